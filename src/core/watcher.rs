//! Deal watcher - bonus-tile gating and next-tile odds
//!
//! Tracks how many of each base value the dealer has produced since the last
//! window reset. The release rule: the bonus slot opens only once every base
//! value has appeared `base_window` times, and a window closes either with
//! exactly one bonus tile or with a "missed" window, reset by the first base
//! tile after saturation.

use std::fmt;

use crate::types::{Tile, POWER_BASE};

/// Counter slot for everything above the base values
const BONUS_SLOT: usize = 3;

/// Tunables for the deal watcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatcherConfig {
    /// How many of each base value one window holds
    pub base_window: u32,
    /// Odds weight of the bonus slot while it is open
    pub bonus_weight: f64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            base_window: 4,
            bonus_weight: 0.5,
        }
    }
}

/// Diagnostic raised when the dealt stream runs past the expected window
/// size without resetting. Informational only; the watcher stays usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionWarning {
    /// Counter snapshot at the time of the breach: 1s, 2s, 3s, bonuses
    pub seen: [u32; 4],
}

impl fmt::Display for DistributionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deal stream did not follow the expected distribution: {:?}",
            self.seen
        )
    }
}

/// Per-window counters over the dealt tile stream
#[derive(Debug, Clone)]
pub struct DealWatcher {
    config: WatcherConfig,
    /// Counts of dealt 1s, 2s, 3s and bonus tiles since the last reset
    seen: [u32; 4],
}

impl DealWatcher {
    pub fn new(config: WatcherConfig) -> Self {
        Self {
            config,
            seen: [0; 4],
        }
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.config
    }

    /// Counter snapshot since the last reset
    pub fn seen(&self) -> [u32; 4] {
        self.seen
    }

    fn reset(&mut self) {
        self.seen = [0; 4];
    }

    /// Counters of a window the dealer saturated without a bonus tile yet
    fn saturated_pattern(&self) -> [u32; 4] {
        let w = self.config.base_window;
        [w, w, w, 0]
    }

    /// Counters of a window closed by exactly one bonus tile
    fn complete_pattern(&self) -> [u32; 4] {
        let w = self.config.base_window;
        [w, w, w, 1]
    }

    /// Expected number of tiles in one full window
    fn window_len(&self) -> u32 {
        3 * self.config.base_window + 1
    }

    /// True once every base value has filled its share of the window and no
    /// bonus has been dealt yet; this is the dealer's bonus opportunity.
    pub fn bonus_open(&self) -> bool {
        self.seen == self.saturated_pattern()
    }

    /// Record one dealt tile.
    ///
    /// Returns a warning when the stream has run past the expected window
    /// without hitting a reset pattern.
    pub fn record(&mut self, tile: Tile) -> Option<DistributionWarning> {
        // A base tile landing on a saturated window means the dealer walked
        // past its bonus opportunity; the window restarts before the tile is
        // recorded.
        if self.seen == self.saturated_pattern() && tile <= POWER_BASE {
            self.reset();
        }

        let slot = (tile as usize).saturating_sub(1).min(BONUS_SLOT);
        self.seen[slot] += 1;

        if self.seen == self.complete_pattern() {
            self.reset();
        }
        if self.seen.iter().sum::<u32>() > self.window_len() {
            return Some(DistributionWarning { seen: self.seen });
        }
        None
    }

    /// Odds of each next-tile class (1, 2, 3, bonus), derived from the room
    /// left in each counter. Display-only: the dealer draws from its
    /// batches, not from these odds.
    pub fn probabilities(&self) -> [f64; 4] {
        let w = self.config.base_window;
        let mut odds = [0.0; 4];
        for (slot, odd) in odds.iter_mut().take(BONUS_SLOT).enumerate() {
            *odd = w.saturating_sub(self.seen[slot]) as f64;
        }
        if self.seen[BONUS_SLOT] == 0 && self.bases_full() {
            odds[BONUS_SLOT] = self.config.bonus_weight;
        }

        let total: f64 = odds.iter().sum();
        if total > 0.0 {
            for odd in odds.iter_mut() {
                *odd /= total;
            }
        }
        odds
    }

    fn bases_full(&self) -> bool {
        self.seen
            .iter()
            .take(BONUS_SLOT)
            .all(|&n| n >= self.config.base_window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saturated(watcher: &mut DealWatcher) {
        for _ in 0..watcher.config.base_window {
            watcher.record(1);
            watcher.record(2);
            watcher.record(3);
        }
    }

    #[test]
    fn test_counts_by_value() {
        let mut watcher = DealWatcher::new(WatcherConfig::default());
        watcher.record(1);
        watcher.record(2);
        watcher.record(2);
        watcher.record(3);
        // Everything above 3 collapses into the bonus slot.
        watcher.record(6);
        watcher.record(48);
        assert_eq!(watcher.seen(), [1, 2, 1, 2]);
    }

    #[test]
    fn test_saturation_opens_bonus_slot() {
        let mut watcher = DealWatcher::new(WatcherConfig::default());
        assert!(!watcher.bonus_open());
        saturated(&mut watcher);
        assert!(watcher.bonus_open());
        assert_eq!(watcher.seen(), [4, 4, 4, 0]);
    }

    #[test]
    fn test_completed_window_resets() {
        let mut watcher = DealWatcher::new(WatcherConfig::default());
        saturated(&mut watcher);
        assert_eq!(watcher.record(6), None);
        assert_eq!(watcher.seen(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_missed_window_resets_before_recording() {
        let mut watcher = DealWatcher::new(WatcherConfig::default());
        saturated(&mut watcher);
        assert_eq!(watcher.record(2), None);
        // The window restarted and then counted the incoming 2.
        assert_eq!(watcher.seen(), [0, 1, 0, 0]);
    }

    #[test]
    fn test_window_overrun_warns_but_keeps_counting() {
        let mut watcher = DealWatcher::new(WatcherConfig::default());
        // 5 ones, 4 twos, 4 threes: sum 13, never matches a reset pattern.
        for _ in 0..5 {
            assert_eq!(watcher.record(1), None);
        }
        for _ in 0..4 {
            assert_eq!(watcher.record(2), None);
            assert_eq!(watcher.record(3), None);
        }
        assert_eq!(watcher.seen(), [5, 4, 4, 0]);

        let warning = watcher.record(6).expect("stream ran past the window");
        assert_eq!(warning.seen, [5, 4, 4, 1]);
        // Still usable afterwards.
        assert_eq!(watcher.seen(), [5, 4, 4, 1]);
    }

    #[test]
    fn test_probabilities_track_remaining_room() {
        let mut watcher = DealWatcher::new(WatcherConfig::default());
        watcher.record(1);
        // Room left: 3 ones, 4 twos, 4 threes, no bonus mid-window.
        assert_eq!(
            watcher.probabilities(),
            [3.0 / 11.0, 4.0 / 11.0, 4.0 / 11.0, 0.0]
        );
    }

    #[test]
    fn test_probabilities_at_saturation_point_to_bonus() {
        let mut watcher = DealWatcher::new(WatcherConfig::default());
        saturated(&mut watcher);
        assert_eq!(watcher.probabilities(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_configurable_window() {
        let mut watcher = DealWatcher::new(WatcherConfig {
            base_window: 2,
            bonus_weight: 0.5,
        });
        for _ in 0..2 {
            watcher.record(1);
            watcher.record(2);
            watcher.record(3);
        }
        assert!(watcher.bonus_open());
        watcher.record(12);
        assert_eq!(watcher.seen(), [0, 0, 0, 0]);
    }
}
