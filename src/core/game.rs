use alloc::vec::Vec;

use rand::seq::index;
use rand::Rng;

use crate::core::{
    bitboard::CellSet,
    board::{Board, HiddenTraps, PublicTraps},
    common::{Action, ActionKind, Cell, Color, Rejection},
    config::{CELL_COUNT, PUBLIC_TRAP_COUNT, TRAP_BUDGET},
    trap::{select_penalty_targets, TrapTrigger},
    win::check_win,
};

/// Snapshot of everything the authority owns for one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub hidden_traps: HiddenTraps,
    pub public_traps: PublicTraps,
    pub turn: Color,
    pub winner: Option<Color>,
    pub trap_budget: [u8; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            hidden_traps: HiddenTraps::new(),
            public_traps: PublicTraps::new(),
            turn: Color::FIRST,
            winner: None,
            trap_budget: [TRAP_BUDGET; 2],
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Color),
}

/// A state change produced by an accepted action, in the order it happened.
///
/// Events carry private information (trap owners); turning them into
/// messages and choosing recipients is the replication layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PublicTrapSeeded(Cell),
    TrapPlaced { cell: Cell, owner: Color },
    TrapCleared { cell: Cell, owner: Color },
    TrapTriggered { cell: Cell, trigger: TrapTrigger },
    PieceRemoved(Cell),
    PieceSpawned { cell: Cell, color: Color },
    TurnChanged(Color),
    WinnerSet(Color),
}

/// Authoritative game logic: validates requests and applies them.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Fresh match state with no public traps seeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore an engine from a snapshot.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Copy of the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Back to defaults: empty board, no traps, full budgets, Black to move.
    pub fn reset(&mut self) {
        self.state = GameState::default();
    }

    /// Replace the public trap layer with `count` distinct cells sampled
    /// uniformly without replacement.
    pub fn seed_public_traps<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Cell> {
        let cells: Vec<Cell> = index::sample(rng, CELL_COUNT, PUBLIC_TRAP_COUNT)
            .into_iter()
            .filter_map(Cell::from_index)
            .collect();
        self.state.public_traps = cells.iter().copied().collect();
        cells
    }

    /// Replace the public trap layer with explicit cells.
    pub fn set_public_traps<I: IntoIterator<Item = Cell>>(&mut self, cells: I) {
        self.state.public_traps = cells.into_iter().collect();
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn turn(&self) -> Color {
        self.state.turn
    }

    pub fn winner(&self) -> Option<Color> {
        self.state.winner
    }

    pub fn status(&self) -> GameStatus {
        match self.state.winner {
            Some(color) => GameStatus::Won(color),
            None => GameStatus::InProgress,
        }
    }

    pub fn traps_remaining(&self, color: Color) -> u8 {
        self.state.trap_budget[color.index()]
    }

    pub fn has_hidden_trap(&self, owner: Color, cell: Cell) -> bool {
        self.state.hidden_traps.has(owner, cell)
    }

    pub fn hidden_traps(&self, owner: Color) -> CellSet {
        self.state.hidden_traps.of(owner)
    }

    pub fn public_traps(&self) -> CellSet {
        self.state.public_traps.cells()
    }

    /// Check a request against the current state without touching it.
    pub fn validate(&self, requester: Color, action: Action) -> Result<(), Rejection> {
        if let Some(winner) = self.state.winner {
            return Err(Rejection::MatchOver(winner));
        }
        if requester != self.state.turn {
            return Err(Rejection::OutOfTurn {
                requester,
                turn: self.state.turn,
            });
        }
        if !self.state.board.is_empty(action.cell) {
            return Err(Rejection::CellOccupied(action.cell));
        }
        if action.kind == ActionKind::PlaceTrap {
            if self.state.trap_budget[requester.index()] == 0 {
                return Err(Rejection::TrapBudgetExhausted(requester));
            }
            if self.state.hidden_traps.has(requester, action.cell) {
                return Err(Rejection::TrapAlreadyPlaced {
                    color: requester,
                    cell: action.cell,
                });
            }
        }
        Ok(())
    }

    /// Validate and apply one request. On rejection nothing changes.
    pub fn request_action<R: Rng + ?Sized>(
        &mut self,
        requester: Color,
        action: Action,
        rng: &mut R,
    ) -> Result<Vec<Event>, Rejection> {
        self.validate(requester, action)?;
        let mut events = Vec::new();
        match action.kind {
            ActionKind::PlaceTrap => self.place_trap(requester, action.cell, &mut events),
            ActionKind::PlacePiece => self.place_piece(requester, action.cell, rng, &mut events),
        }
        if let Some(winner) = self.state.winner {
            events.push(Event::WinnerSet(winner));
        } else {
            self.state.turn = requester.opponent();
            events.push(Event::TurnChanged(self.state.turn));
        }
        Ok(events)
    }

    fn place_trap(&mut self, owner: Color, cell: Cell, events: &mut Vec<Event>) {
        self.state.hidden_traps.arm(owner, cell);
        let budget = &mut self.state.trap_budget[owner.index()];
        *budget = budget.saturating_sub(1);
        log::debug!("{} hid a trap, {} left", owner, budget);
        events.push(Event::TrapPlaced { cell, owner });
    }

    fn place_piece<R: Rng + ?Sized>(
        &mut self,
        mover: Color,
        cell: Cell,
        rng: &mut R,
        events: &mut Vec<Event>,
    ) {
        let enemy = mover.opponent();
        let public = self.state.public_traps.contains(cell);
        let opposing = self.state.hidden_traps.has(enemy, cell);

        if let Some(trigger) = TrapTrigger::classify(public, opposing) {
            log::info!("{} stepped on a trap at {}: {:?}", mover, cell, trigger);
            events.push(Event::TrapTriggered { cell, trigger });
            if opposing {
                self.state.hidden_traps.disarm(enemy, cell);
                events.push(Event::TrapCleared { cell, owner: enemy });
            }
            let stones = self.state.board.stones(mover);
            for target in select_penalty_targets(stones, trigger.penalty(), rng) {
                self.state.board.clear(target);
                events.push(Event::PieceRemoved(target));
            }
        }

        // Own trap is defused, never triggered.
        if self.state.hidden_traps.disarm(mover, cell) {
            events.push(Event::TrapCleared { cell, owner: mover });
        }

        self.state.board.set(cell, mover);
        events.push(Event::PieceSpawned { cell, color: mover });

        if check_win(&self.state.board, cell, mover) {
            log::info!("{} completes five at {}", mover, cell);
            self.state.winner = Some(mover);
        }
    }
}
