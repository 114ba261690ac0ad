use crate::env::{Env, compute_seed};
use crate::error::TurnError;
use crate::grid::Grid;
use crate::state::{Direction, Player, Position};
use crate::tile::TileContext;

use super::redraw::DirtyCells;
use super::{GameSession, GameStatus, TurnEvent, TurnOutcome, TurnReport};

/// Turn resolution for [`GameSession`].
impl GameSession {
    /// Resolves one discrete move.
    ///
    /// 1. When the level is already won or lost the call is consumed as a
    ///    reset (see [`GameSession::restart`]); the player does not move.
    /// 2. If the current cell refuses to let the player leave, the turn ends
    ///    with no further effect.
    /// 3. Otherwise the player moves one cell in `direction` when the
    ///    destination is inside the grid and enterable. Exit behaviors only run
    ///    on an actual move; walls and edges never trigger them.
    /// 4. Terminal checks run in a fixed order: health at or below zero loses;
    ///    otherwise dehydration costs health, then the win predicate is
    ///    evaluated. Dehydration damage that empties health is therefore only
    ///    judged on the following turn.
    /// 5. Every touched cell is redrawn, followed by any banner.
    pub fn resolve_turn(
        &mut self,
        direction: Direction,
        env: &mut Env<'_>,
    ) -> Result<TurnReport, TurnError> {
        if self.status.is_over() {
            tracing::info!(status = %self.status, "turn consumed as reset");
            return self.restart(env);
        }

        let seed = compute_seed(self.config.rng_seed, self.turn, 0);
        self.turn += 1;

        let ctx = TileContext::new(&self.config, env.rng, seed);
        let mut events = Vec::new();
        let mut dirty = DirtyCells::default();
        let origin = self.player.position;

        let can_leave = self
            .grid
            .block(origin)
            .is_some_and(|block| block.can_leave(&self.player, &ctx));
        if !can_leave {
            tracing::debug!(position = %origin, "player is stuck");
            return Ok(TurnReport::new(TurnOutcome::Stuck, events, self.status));
        }

        let destination = origin.step(direction);
        let outcome = if !self.grid.contains(destination) {
            TurnOutcome::OutOfBounds { destination }
        } else if !self
            .grid
            .block(destination)
            .is_some_and(|block| block.can_enter(&self.player))
        {
            TurnOutcome::Blocked { destination }
        } else {
            // Hydration is paid before entry effects run.
            self.player.hydration = (self.player.hydration - self.config.hydration_decay).max(0);
            let to = move_player(
                &mut self.grid,
                &mut self.player,
                Transfer {
                    from: origin,
                    to: destination,
                    direction,
                },
                &ctx,
                &mut events,
                &mut dirty,
            );
            TurnOutcome::Moved { from: origin, to }
        };

        self.evaluate(&mut events);

        tracing::debug!(
            turn = self.turn,
            %direction,
            ?outcome,
            health = self.player.health,
            hydration = self.player.hydration,
            "turn resolved"
        );

        debug_assert!(
            self.grid.occupied().eq(std::iter::once(self.player.position)),
            "exactly one block must hold the player"
        );

        if !dirty.is_empty() {
            dirty.flush(&self.grid, env.surface);
        }
        match self.status {
            GameStatus::Won => env.surface.draw_win_banner(),
            GameStatus::Lost => env.surface.draw_lose_banner(),
            GameStatus::Playing => {}
        }

        Ok(TurnReport::new(outcome, events, self.status))
    }

    /// Parses a direction token and resolves it.
    ///
    /// Unknown tokens are rejected before anything is touched.
    pub fn resolve_token(
        &mut self,
        token: &str,
        env: &mut Env<'_>,
    ) -> Result<TurnReport, TurnError> {
        let direction = Direction::parse_token(token).inspect_err(|err| {
            tracing::warn!(%err, "ignoring command");
        })?;
        self.resolve_turn(direction, env)
    }

    fn evaluate(&mut self, events: &mut Vec<TurnEvent>) {
        if self.player.is_dead() {
            self.status = GameStatus::Lost;
            events.push(TurnEvent::Lost);
            tracing::info!(level = self.grid.level(), "level lost");
            return;
        }

        if self.player.is_dehydrated(&self.config) {
            let damage = self.config.dehydration_damage;
            self.player.health -= damage;
            events.push(TurnEvent::Dehydrated { damage });
        }

        if self.grid.win_condition().is_met(&self.player) {
            self.status = GameStatus::Won;
            events.push(TurnEvent::Won);
            tracing::info!(level = self.grid.level(), "level won");
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Transfer {
    from: Position,
    to: Position,
    direction: Direction,
}

/// Moves the player from `transfer.from` to `transfer.to`, following any
/// teleport hops. Returns the cell the player ends up on.
fn move_player(
    grid: &mut Grid,
    player: &mut Player,
    transfer: Transfer,
    ctx: &TileContext<'_>,
    events: &mut Vec<TurnEvent>,
    dirty: &mut DirtyCells,
) -> Position {
    let mut current = transfer.to;
    let mut relocate = step_into(grid, player, transfer.from, transfer.to, ctx, events, dirty);

    // Every hop moves strictly forward inside the grid, so the area bounds the chain.
    let max_hops = grid.width() as usize * grid.height() as usize;
    let mut hops = 0;

    while let Some(distance) = relocate {
        if hops >= max_hops {
            tracing::warn!(position = %current, "teleport chain exceeded grid size");
            break;
        }
        hops += 1;

        let target = current.offset(transfer.direction, distance as i32);
        let enterable = grid
            .block(target)
            .is_some_and(|block| block.can_enter(player));
        if !enterable {
            tracing::debug!(from = %current, to = %target, "teleport target unavailable");
            break;
        }

        events.push(TurnEvent::Teleported {
            from: current,
            to: target,
        });
        relocate = step_into(grid, player, current, target, ctx, events, dirty);
        current = target;
    }

    current
}

fn step_into(
    grid: &mut Grid,
    player: &mut Player,
    from: Position,
    to: Position,
    ctx: &TileContext<'_>,
    events: &mut Vec<TurnEvent>,
    dirty: &mut DirtyCells,
) -> Option<u32> {
    if let Some(block) = grid.block_mut(from) {
        block.leave(player, ctx, events);
    }
    dirty.mark(from);

    let relocate = grid
        .block_mut(to)
        .and_then(|block| block.enter(player, ctx, events));
    player.position = to;
    dirty.mark(to);

    relocate
}
