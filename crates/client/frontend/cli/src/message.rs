//! Message log fed from turn reports.
use std::collections::VecDeque;

use game_core::{GameError, TileEffect, TurnError, TurnEvent, TurnOutcome, TurnReport};

/// Severity level for UI messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Turn on which the message was produced.
    pub turn: Option<u64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, turn: Option<u64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            turn,
            level,
        }
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Narrates one resolved turn.
    pub fn record_turn(&mut self, turn: u64, report: &TurnReport) {
        let at = Some(turn);
        match &report.outcome {
            TurnOutcome::Blocked { destination } => self.push(MessageEntry::new(
                format!("The way to {destination} is blocked."),
                at,
                MessageLevel::Info,
            )),
            TurnOutcome::OutOfBounds { .. } => self.push(MessageEntry::new(
                "You cannot leave the map.",
                at,
                MessageLevel::Info,
            )),
            TurnOutcome::Stuck => self.push(MessageEntry::new(
                "The quicksand holds you in place.",
                at,
                MessageLevel::Warning,
            )),
            TurnOutcome::Moved { .. } | TurnOutcome::Restarted { .. } => {}
        }

        for event in &report.events {
            if let Some((text, level)) = describe(event) {
                self.push(MessageEntry::new(text, at, level));
            }
        }
    }

    pub fn record_error(&mut self, err: &TurnError) {
        let level = if err.severity().is_recoverable() {
            MessageLevel::Warning
        } else {
            MessageLevel::Error
        };
        self.push(MessageEntry::new(err.to_string(), None, level));
    }
}

fn describe(event: &TurnEvent) -> Option<(String, MessageLevel)> {
    let described = match event {
        TurnEvent::TileEffect { tile, effect, .. } => match effect {
            TileEffect::Damaged { amount } => {
                (format!("The {tile} burns you for {amount}."), MessageLevel::Warning)
            }
            TileEffect::Healed => (format!("The {tile} restores your health."), MessageLevel::Info),
            TileEffect::Rehydrated => ("You drink your fill.".to_string(), MessageLevel::Info),
        },
        TurnEvent::Transformed { .. } => return None,
        TurnEvent::ItemClaimed { item, .. } => (format!("You pick up the {item}."), MessageLevel::Info),
        TurnEvent::Teleported { to, .. } => (format!("You are whisked to {to}."), MessageLevel::Info),
        TurnEvent::Dehydrated { damage } => (
            format!("You are dehydrated and lose {damage} health."),
            MessageLevel::Warning,
        ),
        TurnEvent::Won => ("You win! Press any move key to play again.".to_string(), MessageLevel::Info),
        TurnEvent::Lost => ("You lose. Press any move key to try again.".to_string(), MessageLevel::Error),
        TurnEvent::LevelStarted { level } => (format!("Level `{level}` started."), MessageLevel::Info),
    };
    Some(described)
}
