//! Game session - owns the board, the dealer and the move pipeline
//!
//! A shift rotates the board so the requested direction becomes the
//! canonical left axis, runs the slide-merge engine once, deals a tile into
//! one of the exposed cells, and rotates everything back. The session's own
//! board is the authoritative post-move state; the returned motion board
//! exists only for the caller's next animation frame.

use crate::core::board::{Board, MotionBoard, ParseBoardError};
use crate::core::rng::SimpleRng;
use crate::core::slide::{slide_left, SlideOutcome};
use crate::core::supply::{SupplyConfig, TileSupply};
use crate::core::watcher::{DealWatcher, DistributionWarning, WatcherConfig};
use crate::types::{Direction, Tile, BOARD_SIZE, BONUS_MIN, CELL_COUNT};

/// Session-level knobs.
///
/// The two known rule variants disagree on the opening fill and on whether
/// bonus gating exists at all, so both are explicit configuration rather
/// than hard-coded choices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Cells dealt onto the opening board
    pub initial_fill: usize,
    /// Whether the session tracks the bonus release rule and may inject
    /// bonus tiles into the dealt stream
    pub bonus_gating: bool,
    pub supply: SupplyConfig,
    pub watcher: WatcherConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_fill: 9,
            bonus_gating: false,
            supply: SupplyConfig::default(),
            watcher: WatcherConfig::default(),
        }
    }
}

/// One running game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    supply: TileSupply,
    watcher: Option<DealWatcher>,
    rng: SimpleRng,
    /// Bonus tile already committed as the next deal, if any
    pending_bonus: Option<Tile>,
    /// Last distribution diagnostic (consumed by observers)
    last_warning: Option<DistributionWarning>,
}

impl GameSession {
    /// Create a session with a freshly dealt opening board
    pub fn new(config: SessionConfig, seed: u32) -> Self {
        let mut session = Self::bare(config, seed);
        session.deal_opening(config.initial_fill);
        session
    }

    /// Create a session over a fixture board, bypassing the opening deal.
    ///
    /// The text format is 16 whitespace-separated integers in row-major
    /// order; malformed input is rejected, never repaired.
    pub fn from_text(text: &str, config: SessionConfig, seed: u32) -> Result<Self, ParseBoardError> {
        let mut session = Self::bare(config, seed);
        session.board = text.parse()?;
        Ok(session)
    }

    fn bare(config: SessionConfig, seed: u32) -> Self {
        Self {
            board: Board::new(),
            supply: TileSupply::new(config.supply),
            watcher: config.bonus_gating.then(|| DealWatcher::new(config.watcher)),
            rng: SimpleRng::new(seed),
            pending_bonus: None,
            last_warning: None,
        }
    }

    /// Deal the opening board: shuffle all cell coordinates and give the
    /// first `fill` of them a tile each.
    fn deal_opening(&mut self, fill: usize) {
        let mut coords = [(0usize, 0usize); CELL_COUNT];
        for (i, coord) in coords.iter_mut().enumerate() {
            *coord = (i / BOARD_SIZE, i % BOARD_SIZE);
        }
        self.rng.shuffle(&mut coords);

        for &(row, col) in coords.iter().take(fill.min(CELL_COUNT)) {
            let tile = self.deal();
            self.board.put(row, col, tile);
        }
    }

    /// The authoritative board state
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read access to the dealer, for previews of the batch depth
    pub fn supply(&self) -> &TileSupply {
        &self.supply
    }

    /// Next tile the dealer will produce, for the preview UI.
    ///
    /// Forces a batch refill when the batch is exhausted; repeated peeks are
    /// stable until the next deal.
    pub fn peek(&mut self) -> Tile {
        match self.pending_bonus {
            Some(bonus) => bonus,
            None => self.supply.peek(&mut self.rng),
        }
    }

    /// Next-tile odds per class (1, 2, 3, bonus).
    /// None when bonus gating is disabled.
    pub fn probabilities(&self) -> Option<[f64; 4]> {
        self.watcher.as_ref().map(|w| w.probabilities())
    }

    /// Take and clear the last distribution diagnostic
    pub fn take_last_warning(&mut self) -> Option<DistributionWarning> {
        self.last_warning.take()
    }

    /// Apply one directional shift.
    ///
    /// The session board advances to the post-move state. The returned
    /// motion board describes, per destination cell, the tile sliding into
    /// it for one animation step, already mapped back to the caller's
    /// orientation. A shift that exposes no cell still commits the slid
    /// board but deals nothing.
    pub fn shift(&mut self, direction: Direction) -> MotionBoard {
        let turns = direction.turns();
        let rotated = self.board.rotated(turns);
        let SlideOutcome {
            board: mut slid,
            motion,
            exposed,
        } = slide_left(&rotated);

        // Force the preview (and any batch refill) before dealing.
        self.peek();
        if !exposed.is_empty() {
            let pick = self.rng.next_range(exposed.len() as u32) as usize;
            let (row, col) = exposed[pick];
            let tile = self.deal();
            slid.put(row, col, tile);
        }

        self.board = slid.rotated(-turns);
        motion.rotated(-turns)
    }

    /// Produce the next tile of the dealt stream: the committed bonus if
    /// one is pending, otherwise the front of the batch.
    fn deal(&mut self) -> Tile {
        let tile = match self.pending_bonus.take() {
            Some(bonus) => bonus,
            None => self.supply.draw(&mut self.rng),
        };

        let mut bonus_open = false;
        if let Some(watcher) = &mut self.watcher {
            if let Some(warning) = watcher.record(tile) {
                self.last_warning = Some(warning);
            }
            bonus_open = watcher.bonus_open();
        }
        if bonus_open {
            self.pending_bonus = self.roll_bonus();
        }

        tile
    }

    /// The dealer's one shot per saturated window: with the configured odds
    /// weight, commit a bonus tile as the next deal. A window whose shot
    /// misses is closed later by the missed-window reset.
    fn roll_bonus(&mut self) -> Option<Tile> {
        let weight = self.watcher.as_ref()?.config().bonus_weight;
        if !self.rng.chance(weight) {
            return None;
        }

        // Bonus values run from 6 up to an eighth of the best tile on the
        // board, staying behind the player's progress.
        let cap = self.board.max_tile() / 8;
        if cap < BONUS_MIN {
            return None;
        }
        let mut candidates: Vec<Tile> = Vec::new();
        let mut value = BONUS_MIN;
        while value <= cap {
            candidates.push(value);
            value *= 2;
        }
        let pick = self.rng.next_range(candidates.len() as u32) as usize;
        Some(candidates[pick])
    }
}
