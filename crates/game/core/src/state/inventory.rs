use crate::item::ItemKind;

/// Ordered multiset of claimed item kinds.
///
/// Items keep their claim order and duplicates are counted, so a level can
/// ask for "three keys" without caring which cells they came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<ItemKind>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ItemKind) {
        self.items.push(kind);
    }

    pub fn contains(&self, kind: ItemKind) -> bool {
        self.items.contains(&kind)
    }

    pub fn count(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|item| **item == kind).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemKind> + '_ {
        self.items.iter().copied()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates_in_claim_order() {
        let mut inventory = Inventory::new();
        inventory.push(ItemKind::Key);
        inventory.push(ItemKind::Flippers);
        inventory.push(ItemKind::Key);

        assert_eq!(inventory.count(ItemKind::Key), 2);
        assert_eq!(inventory.count(ItemKind::Flippers), 1);
        assert_eq!(
            inventory.iter().collect::<Vec<_>>(),
            vec![ItemKind::Key, ItemKind::Flippers, ItemKind::Key]
        );
    }

    #[test]
    fn empty_inventory_contains_nothing() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert!(!inventory.contains(ItemKind::Key));
        assert_eq!(inventory.count(ItemKind::Key), 0);
    }
}
