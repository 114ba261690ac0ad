//! Scenario tests for turn resolution, terminal states and level resets.

use std::collections::VecDeque;

use game_core::{
    BuildError, CellView, Direction, DrawSurface, Env, GameConfig, GameSession, GameStatus,
    ItemKind, LevelChooser, LevelDefinition, LevelOracle, PcgRng, Position, RngOracle, TileKind,
    TurnError, TurnEvent, TurnOutcome, WinCondition,
};

// ----------------------------------------------------------------------------
// Test doubles
// ----------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
enum Draw {
    Begin(u32, u32),
    Cell(CellView),
    Marker(Position),
    Win,
    Lose,
}

#[derive(Default)]
struct RecordingSurface {
    calls: Vec<Draw>,
}

impl RecordingSurface {
    fn take(&mut self) -> Vec<Draw> {
        std::mem::take(&mut self.calls)
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_level(&mut self, width: u32, height: u32) {
        self.calls.push(Draw::Begin(width, height));
    }

    fn draw_cell(&mut self, cell: &CellView) {
        self.calls.push(Draw::Cell(*cell));
    }

    fn draw_player_marker(&mut self, position: Position) {
        self.calls.push(Draw::Marker(position));
    }

    fn draw_win_banner(&mut self) {
        self.calls.push(Draw::Win);
    }

    fn draw_lose_banner(&mut self) {
        self.calls.push(Draw::Lose);
    }
}

/// Answers level prompts from a script; an exhausted script replays the current level.
#[derive(Default)]
struct ScriptedChooser {
    picks: VecDeque<String>,
    asked: usize,
}

impl LevelChooser for ScriptedChooser {
    fn choose_level(&mut self, _levels: &dyn LevelOracle) -> Option<String> {
        self.asked += 1;
        self.picks.pop_front()
    }
}

struct FixedRoll(u32);

impl RngOracle for FixedRoll {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

struct Levels(Vec<LevelDefinition>);

impl LevelOracle for Levels {
    fn level(&self, name: &str) -> Option<&LevelDefinition> {
        self.0.iter().find(|level| level.name == name)
    }

    fn level_names(&self) -> Vec<&'static str> {
        self.0.iter().map(|level| level.name).collect()
    }
}

struct Harness {
    levels: Levels,
    chooser: ScriptedChooser,
    surface: RecordingSurface,
    rng: Box<dyn RngOracle>,
}

impl Harness {
    fn new(levels: Vec<LevelDefinition>) -> Self {
        Self {
            levels: Levels(levels),
            chooser: ScriptedChooser::default(),
            surface: RecordingSurface::default(),
            rng: Box::new(PcgRng),
        }
    }

    fn with_rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    fn env(&mut self) -> Env<'_> {
        Env::new(
            &self.levels,
            &mut self.chooser,
            &mut self.surface,
            self.rng.as_ref(),
        )
    }

    fn start(&mut self, config: GameConfig, level: &str) -> GameSession {
        let session = GameSession::start(config, level, &mut self.env()).expect("level builds");
        self.surface.take();
        session
    }

    fn step(&mut self, session: &mut GameSession, direction: Direction) -> game_core::TurnReport {
        session
            .resolve_turn(direction, &mut self.env())
            .expect("turn resolves")
    }
}

fn level(
    name: &'static str,
    start: Position,
    terrain: &'static [&'static [u8]],
    items: &'static [&'static [u8]],
    win_condition: WinCondition,
) -> LevelDefinition {
    LevelDefinition::new(name, start, terrain, items, win_condition)
}

fn tile_at(session: &GameSession, x: i32, y: i32) -> TileKind {
    session
        .grid()
        .block(Position::new(x, y))
        .expect("in bounds")
        .tile()
}

fn assert_single_occupant(session: &GameSession) {
    let occupied: Vec<_> = session.grid().occupied().collect();
    assert_eq!(occupied, vec![session.player().position]);
}

// Never winnable: nobody collects a thousand keys.
const UNWINNABLE: WinCondition = WinCondition::keys(1000);

// ----------------------------------------------------------------------------
// Passability
// ----------------------------------------------------------------------------

#[test]
fn rock_blocks_without_leaving_origin() {
    const TERRAIN: &[&[u8]] = &[&[1, 3]];
    const ITEMS: &[&[u8]] = &[&[0, 0]];
    let mut harness = Harness::new(vec![level("rock", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut session = harness.start(GameConfig::default(), "rock");

    let report = harness.step(&mut session, Direction::Right);

    assert_eq!(
        report.outcome,
        TurnOutcome::Blocked {
            destination: Position::new(1, 0)
        }
    );
    assert_eq!(session.player().position, Position::ORIGIN);
    // Ice only melts when actually left.
    assert_eq!(tile_at(&session, 0, 0), TileKind::Ice);
    assert!(report.events.is_empty());
    assert!(harness.surface.take().is_empty());
}

#[test]
fn water_needs_flippers_and_refills_hydration() {
    const TERRAIN: &[&[u8]] = &[&[0, 0, 2], &[2, 0, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 2, 0], &[0, 0, 0]];
    let mut harness = Harness::new(vec![level("pool", Position::new(1, 1), TERRAIN, ITEMS, UNWINNABLE)]);
    let config = GameConfig::default().with_hydration_decay(30);
    let mut session = harness.start(config, "pool");

    let report = harness.step(&mut session, Direction::Left);
    assert!(matches!(report.outcome, TurnOutcome::Blocked { .. }));

    harness.step(&mut session, Direction::Up);
    assert!(session.player().has(ItemKind::Flippers));
    assert_eq!(session.player().hydration, 70);

    let report = harness.step(&mut session, Direction::Right);
    assert!(report.moved());
    assert_eq!(session.player().position, Position::new(2, 0));
    assert_eq!(session.player().hydration, 100);
}

// ----------------------------------------------------------------------------
// Tile transformations
// ----------------------------------------------------------------------------

#[test]
fn ice_turns_to_water_after_one_crossing() {
    const TERRAIN: &[&[u8]] = &[&[0, 1, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 0, 0]];
    let mut harness = Harness::new(vec![level("ice", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut session = harness.start(GameConfig::default(), "ice");

    let report = harness.step(&mut session, Direction::Right);
    assert!(report.events.is_empty());
    assert_eq!(tile_at(&session, 1, 0), TileKind::Ice);

    let report = harness.step(&mut session, Direction::Right);
    assert_eq!(tile_at(&session, 1, 0), TileKind::Water);
    assert_eq!(
        report.events,
        vec![TurnEvent::Transformed {
            position: Position::new(1, 0),
            from: TileKind::Ice,
            to: TileKind::Water,
        }]
    );

    // The melted cell is now water and cannot be re-entered without flippers.
    let report = harness.step(&mut session, Direction::Left);
    assert!(matches!(report.outcome, TurnOutcome::Blocked { .. }));
    assert_eq!(session.player().position, Position::new(2, 0));
}

#[test]
fn water_from_ice_does_not_retrigger_on_leave() {
    const TERRAIN: &[&[u8]] = &[&[0, 1, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 2, 0]];
    let mut harness = Harness::new(vec![level("ice", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut session = harness.start(GameConfig::default(), "ice");

    harness.step(&mut session, Direction::Right); // claim flippers on the ice
    harness.step(&mut session, Direction::Right); // ice melts
    harness.step(&mut session, Direction::Left); // swim back in
    let report = harness.step(&mut session, Direction::Left); // leave the water

    assert_eq!(tile_at(&session, 1, 0), TileKind::Water);
    assert!(
        report
            .events
            .iter()
            .all(|event| !matches!(event, TurnEvent::Transformed { .. }))
    );
}

#[test]
fn sludge_damages_once_then_hardens() {
    const TERRAIN: &[&[u8]] = &[&[0, 6, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 0, 0]];
    let mut harness = Harness::new(vec![level("sludge", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut session = harness.start(GameConfig::default(), "sludge");

    harness.step(&mut session, Direction::Right);
    assert_eq!(session.player().health, 92);
    assert_eq!(tile_at(&session, 1, 0), TileKind::RockFloor);

    harness.step(&mut session, Direction::Right);
    harness.step(&mut session, Direction::Left);
    assert_eq!(session.player().health, 92);
}

#[test]
fn one_time_heal_is_consumed_but_heal_block_is_not() {
    const TERRAIN: &[&[u8]] = &[&[7, 9, 8]];
    const ITEMS: &[&[u8]] = &[&[0, 0, 0]];
    let mut harness = Harness::new(vec![level("heal", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut session = harness.start(GameConfig::default(), "heal");

    harness.step(&mut session, Direction::Right);
    assert_eq!(session.player().health, 100);
    assert_eq!(tile_at(&session, 1, 0), TileKind::RockFloor);

    harness.step(&mut session, Direction::Right);
    assert_eq!(tile_at(&session, 2, 0), TileKind::HealBlock);

    harness.step(&mut session, Direction::Left);
    harness.step(&mut session, Direction::Left); // onto lava
    assert_eq!(session.player().health, 85);
    harness.step(&mut session, Direction::Right);
    harness.step(&mut session, Direction::Right);
    assert_eq!(session.player().health, 100);
}

// ----------------------------------------------------------------------------
// Teleporters and quicksand
// ----------------------------------------------------------------------------

#[test]
fn teleporter_skips_ahead_in_direction_of_travel() {
    const TERRAIN: &[&[u8]] = &[&[0, 5, 0, 0, 0, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 0, 0, 0, 1, 0]];
    let mut harness = Harness::new(vec![level(
        "tele",
        Position::ORIGIN,
        TERRAIN,
        ITEMS,
        WinCondition::keys(1),
    )]);
    let mut session = harness.start(GameConfig::default(), "tele");

    let report = harness.step(&mut session, Direction::Right);

    assert_eq!(
        report.outcome,
        TurnOutcome::Moved {
            from: Position::ORIGIN,
            to: Position::new(4, 0)
        }
    );
    assert!(report.events.contains(&TurnEvent::Teleported {
        from: Position::new(1, 0),
        to: Position::new(4, 0),
    }));
    assert_eq!(session.player().inventory.count(ItemKind::Key), 1);
    assert_eq!(report.status, GameStatus::Won);
    assert_single_occupant(&session);
}

#[test]
fn teleporter_keeps_player_when_target_unavailable() {
    const TERRAIN: &[&[u8]] = &[&[0, 5, 0, 0, 3], &[0, 5, 0, 0, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 0, 0, 0, 0], &[0, 0, 0, 0, 0]];
    let mut harness = Harness::new(vec![level("tele", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut session = harness.start(GameConfig::default(), "tele");

    // Target is rock.
    harness.step(&mut session, Direction::Right);
    assert_eq!(session.player().position, Position::new(1, 0));

    // Target is off the grid (moving down from row 0 lands on row 4).
    let report = harness.step(&mut session, Direction::Down);
    assert_eq!(session.player().position, Position::new(1, 1));
    assert!(
        report
            .events
            .iter()
            .all(|event| !matches!(event, TurnEvent::Teleported { .. }))
    );
    assert_single_occupant(&session);
}

#[test]
fn quicksand_can_trap_the_player() {
    const TERRAIN: &[&[u8]] = &[&[10, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 0]];
    let defs = vec![level("sand", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)];

    let mut stuck = Harness::new(defs.clone()).with_rng(FixedRoll(0));
    let mut session = stuck.start(GameConfig::default(), "sand");
    for _ in 0..5 {
        let report = stuck.step(&mut session, Direction::Right);
        assert_eq!(report.outcome, TurnOutcome::Stuck);
    }
    assert_eq!(session.player().position, Position::ORIGIN);
    assert!(stuck.surface.take().is_empty());

    let mut free = Harness::new(defs).with_rng(FixedRoll(99));
    let mut session = free.start(GameConfig::default(), "sand");
    let report = free.step(&mut session, Direction::Right);
    assert!(report.moved());
}

#[test]
fn quicksand_hold_chance_is_configurable() {
    const TERRAIN: &[&[u8]] = &[&[10, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 0]];
    let mut harness = Harness::new(vec![level("sand", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut config = GameConfig::default();
    config.quicksand_hold_percent = 0;
    let mut session = harness.start(config, "sand");

    assert!(harness.step(&mut session, Direction::Right).moved());
}

// ----------------------------------------------------------------------------
// Items and winning
// ----------------------------------------------------------------------------

#[test]
fn third_key_wins_on_the_same_turn() {
    const TERRAIN: &[&[u8]] = &[&[0, 0, 0, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 1, 1, 1]];
    let mut harness = Harness::new(vec![level(
        "keys",
        Position::ORIGIN,
        TERRAIN,
        ITEMS,
        WinCondition::keys(3),
    )]);
    let mut session = harness.start(GameConfig::default(), "keys");

    harness.step(&mut session, Direction::Right);
    harness.step(&mut session, Direction::Right);
    assert_eq!(session.status(), GameStatus::Playing);

    let report = harness.step(&mut session, Direction::Right);
    assert_eq!(report.status, GameStatus::Won);
    assert_eq!(report.events.last(), Some(&TurnEvent::Won));
    assert_eq!(harness.surface.calls.last(), Some(&Draw::Win));
}

#[test]
fn key_is_claimed_once() {
    const TERRAIN: &[&[u8]] = &[&[0, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 1]];
    let mut harness = Harness::new(vec![level("key", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut session = harness.start(GameConfig::default(), "key");

    let report = harness.step(&mut session, Direction::Right);
    assert_eq!(
        report.events,
        vec![TurnEvent::ItemClaimed {
            position: Position::new(1, 0),
            item: ItemKind::Key,
        }]
    );
    assert_eq!(
        session.grid().block(Position::new(1, 0)).unwrap().item(),
        None
    );

    harness.step(&mut session, Direction::Left);
    let report = harness.step(&mut session, Direction::Right);
    assert!(report.events.is_empty());
    assert_eq!(session.player().inventory.count(ItemKind::Key), 1);
    assert_eq!(session.player().inventory.len(), 1);
}

// ----------------------------------------------------------------------------
// Damage, dehydration and losing
// ----------------------------------------------------------------------------

#[test]
fn dehydration_costs_two_health_and_stacks_with_tile_damage() {
    const TERRAIN: &[&[u8]] = &[&[0, 0, 6, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 0, 0, 0]];
    let mut harness = Harness::new(vec![level("dry", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let config = GameConfig::default().with_hydration_decay(95);
    let mut session = harness.start(config, "dry");

    // 100 -> 5 hydration: dehydrated from the first move on.
    let report = harness.step(&mut session, Direction::Right);
    assert_eq!(session.player().hydration, 5);
    assert_eq!(session.player().health, 98);
    assert!(report.events.contains(&TurnEvent::Dehydrated { damage: 2 }));

    // Sludge (-8) and dehydration (-2) on the same turn.
    harness.step(&mut session, Direction::Right);
    assert_eq!(session.player().health, 88);

    // Blocked moves still pay the dehydration penalty.
    let report = harness.step(&mut session, Direction::Up);
    assert!(matches!(report.outcome, TurnOutcome::OutOfBounds { .. }));
    assert_eq!(session.player().health, 86);
}

#[test]
fn health_reaching_zero_loses_on_that_turn() {
    const TERRAIN: &[&[u8]] = &[&[1, 7, 7]];
    const ITEMS: &[&[u8]] = &[&[0, 0, 0]];
    let mut harness = Harness::new(vec![level("lava", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut config = GameConfig::default();
    config.lava_damage = 50;
    let mut session = harness.start(config, "lava");

    harness.step(&mut session, Direction::Right);
    assert_eq!(session.status(), GameStatus::Playing);

    let report = harness.step(&mut session, Direction::Right);
    assert_eq!(session.player().health, 0);
    assert_eq!(report.status, GameStatus::Lost);
    assert_eq!(report.events.last(), Some(&TurnEvent::Lost));
    assert_eq!(harness.surface.calls.last(), Some(&Draw::Lose));
}

#[test]
fn dehydration_death_is_judged_next_turn() {
    const TERRAIN: &[&[u8]] = &[&[0, 7, 7, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 0, 0, 0]];
    let mut harness = Harness::new(vec![level("dry", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut config = GameConfig::default().with_hydration_decay(100);
    config.lava_damage = 48;
    let mut session = harness.start(config, "dry");

    harness.step(&mut session, Direction::Right); // 100 - 48 - 2
    assert_eq!(session.player().health, 50);
    harness.step(&mut session, Direction::Right); // 50 - 48 - 2
    assert_eq!(session.player().health, 0);
    assert_eq!(session.status(), GameStatus::Playing);

    let report = harness.step(&mut session, Direction::Right);
    assert_eq!(report.status, GameStatus::Lost);
}

// ----------------------------------------------------------------------------
// Reset
// ----------------------------------------------------------------------------

#[test]
fn turn_after_loss_resets_instead_of_moving() {
    const TERRAIN: &[&[u8]] = &[&[1, 7, 7]];
    const ITEMS: &[&[u8]] = &[&[0, 0, 1]];
    let mut harness = Harness::new(vec![level("lava", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut config = GameConfig::default();
    config.lava_damage = 50;
    let mut session = harness.start(config, "lava");

    harness.step(&mut session, Direction::Right);
    harness.step(&mut session, Direction::Right);
    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(tile_at(&session, 0, 0), TileKind::Water);
    harness.surface.take();

    let report = harness.step(&mut session, Direction::Left);

    assert_eq!(
        report.outcome,
        TurnOutcome::Restarted {
            level: "lava".into()
        }
    );
    assert_eq!(harness.chooser.asked, 1);
    assert_eq!(session.status(), GameStatus::Playing);
    assert_eq!(session.player().position, Position::ORIGIN);
    assert_eq!(session.player().health, 100);
    assert_eq!(session.player().hydration, 100);
    assert!(session.player().inventory.is_empty());
    assert_eq!(tile_at(&session, 0, 0), TileKind::Ice);
    assert_eq!(
        session.grid().block(Position::new(2, 0)).unwrap().item(),
        Some(ItemKind::Key)
    );
    assert_single_occupant(&session);

    // Full redraw of the rebuilt 3x1 grid.
    let calls = harness.surface.take();
    assert_eq!(calls.first(), Some(&Draw::Begin(3, 1)));
    assert_eq!(
        calls.iter().filter(|call| matches!(call, Draw::Cell(_))).count(),
        3
    );
}

#[test]
fn reset_loads_the_chosen_level() {
    const FIRST: &[&[u8]] = &[&[0, 0]];
    const FIRST_ITEMS: &[&[u8]] = &[&[0, 1]];
    const SECOND: &[&[u8]] = &[&[0], &[0], &[0]];
    const SECOND_ITEMS: &[&[u8]] = &[&[0], &[0], &[0]];
    let mut harness = Harness::new(vec![
        level("first", Position::ORIGIN, FIRST, FIRST_ITEMS, WinCondition::keys(1)),
        level("second", Position::new(0, 2), SECOND, SECOND_ITEMS, UNWINNABLE),
    ]);
    harness.chooser.picks.push_back("second".into());
    let mut session = harness.start(GameConfig::default(), "first");

    harness.step(&mut session, Direction::Right);
    assert_eq!(session.status(), GameStatus::Won);

    harness.step(&mut session, Direction::Right);
    assert_eq!(session.level_name(), "second");
    assert_eq!(session.player().position, Position::new(0, 2));
    assert_eq!((session.grid().width(), session.grid().height()), (1, 3));
}

#[test]
fn failed_reload_keeps_terminal_state() {
    const TERRAIN: &[&[u8]] = &[&[0, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 1]];
    let mut harness = Harness::new(vec![level(
        "key",
        Position::ORIGIN,
        TERRAIN,
        ITEMS,
        WinCondition::keys(1),
    )]);
    harness.chooser.picks.push_back("missing".into());
    let mut session = harness.start(GameConfig::default(), "key");
    harness.step(&mut session, Direction::Right);

    let err = session
        .resolve_turn(Direction::Left, &mut harness.env())
        .unwrap_err();

    assert_eq!(
        err,
        TurnError::Reload(BuildError::UnknownLevel {
            name: "missing".into()
        })
    );
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.player().position, Position::new(1, 0));
}

#[test]
fn restart_rebuilds_unconditionally() {
    const TERRAIN: &[&[u8]] = &[&[0, 6]];
    const ITEMS: &[&[u8]] = &[&[0, 0]];
    let mut harness = Harness::new(vec![level("mid", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut session = harness.start(GameConfig::default(), "mid");
    harness.step(&mut session, Direction::Right);
    assert_eq!(session.player().health, 92);

    session.restart(&mut harness.env()).expect("restart");

    assert_eq!(session.player().health, 100);
    assert_eq!(tile_at(&session, 1, 0), TileKind::Sludge);
}

// ----------------------------------------------------------------------------
// Bounds and input
// ----------------------------------------------------------------------------

#[test]
fn edges_of_non_square_grids_block_movement() {
    const WIDE: &[&[u8]] = &[&[1, 0, 0, 0, 0], &[0, 0, 0, 0, 1]];
    const WIDE_ITEMS: &[&[u8]] = &[&[0, 0, 0, 0, 0], &[0, 0, 0, 0, 0]];
    const TALL: &[&[u8]] = &[&[1, 0], &[0, 0], &[0, 0], &[0, 0], &[0, 1]];
    const TALL_ITEMS: &[&[u8]] = &[&[0, 0], &[0, 0], &[0, 0], &[0, 0], &[0, 0]];

    let cases = [
        (level("wide", Position::ORIGIN, WIDE, WIDE_ITEMS, UNWINNABLE), Position::new(4, 1)),
        (level("tall", Position::ORIGIN, TALL, TALL_ITEMS, UNWINNABLE), Position::new(1, 4)),
    ];

    for (definition, far_corner) in cases {
        let name = definition.name;
        let mut harness = Harness::new(vec![
            definition,
            level(
                "far",
                far_corner,
                definition.terrain,
                definition.items,
                UNWINNABLE,
            ),
        ]);

        for (start_level, corner, exits) in [
            (name, Position::ORIGIN, [Direction::Up, Direction::Left]),
            ("far", far_corner, [Direction::Down, Direction::Right]),
        ] {
            let mut session = harness.start(GameConfig::default(), start_level);
            for direction in exits {
                let report = harness.step(&mut session, direction);
                assert!(
                    matches!(report.outcome, TurnOutcome::OutOfBounds { .. }),
                    "{name}: {direction} from {corner} should leave the grid"
                );
                assert_eq!(session.player().position, corner);
                assert!(report.events.is_empty());
                // Corner tiles are ice: an exit behavior would have melted them.
                assert_eq!(tile_at(&session, corner.x, corner.y), TileKind::Ice);
            }
            assert!(harness.surface.take().is_empty());
        }
    }
}

#[test]
fn unknown_tokens_are_rejected_without_side_effects() {
    const TERRAIN: &[&[u8]] = &[&[0, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 0]];
    let mut harness = Harness::new(vec![level("plain", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut session = harness.start(GameConfig::default(), "plain");

    let err = session
        .resolve_token("sideways", &mut harness.env())
        .unwrap_err();

    assert!(matches!(err, TurnError::InvalidDirection(_)));
    assert_eq!(session.turn(), 0);
    assert_eq!(session.player().position, Position::ORIGIN);
    assert!(harness.surface.take().is_empty());

    let report = session
        .resolve_token("right", &mut harness.env())
        .expect("valid token");
    assert!(report.moved());
}

#[test]
fn unknown_level_fails_fast() {
    let mut harness = Harness::new(Vec::new());
    let err = GameSession::start(GameConfig::default(), "nowhere", &mut harness.env())
        .err()
        .expect("no such level");
    assert_eq!(
        err,
        BuildError::UnknownLevel {
            name: "nowhere".into()
        }
    );
    assert!(harness.surface.calls.is_empty());
}

// ----------------------------------------------------------------------------
// Redraw contract
// ----------------------------------------------------------------------------

#[test]
fn move_redraws_origin_then_destination_with_marker() {
    const TERRAIN: &[&[u8]] = &[&[0, 4]];
    const ITEMS: &[&[u8]] = &[&[0, 1]];
    let mut harness = Harness::new(vec![level("draw", Position::ORIGIN, TERRAIN, ITEMS, UNWINNABLE)]);
    let mut session = harness.start(GameConfig::default(), "draw");

    harness.step(&mut session, Direction::Right);

    assert_eq!(
        harness.surface.take(),
        vec![
            Draw::Cell(CellView {
                position: Position::ORIGIN,
                tile: TileKind::Grass,
                item: None,
            }),
            Draw::Cell(CellView {
                position: Position::new(1, 0),
                tile: TileKind::RockFloor,
                item: None,
            }),
            Draw::Marker(Position::new(1, 0)),
        ]
    );
}

#[test]
fn start_draws_every_cell_and_the_player() {
    const TERRAIN: &[&[u8]] = &[&[0, 0], &[0, 0]];
    const ITEMS: &[&[u8]] = &[&[0, 0], &[0, 0]];
    let mut harness = Harness::new(vec![level("draw", Position::new(1, 1), TERRAIN, ITEMS, UNWINNABLE)]);

    GameSession::start(GameConfig::default(), "draw", &mut harness.env()).expect("builds");

    let calls = harness.surface.take();
    assert_eq!(calls.first(), Some(&Draw::Begin(2, 2)));
    assert_eq!(calls.len(), 1 + 4 + 1);
    assert_eq!(calls.last(), Some(&Draw::Marker(Position::new(1, 1))));
}
