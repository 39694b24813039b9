use std::collections::HashMap;

use log::warn;

/// Outcome of a visibility observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealSignal {
    /// First time any part of the block entered the viewport: play the
    /// entrance transition now.
    Play,
    /// Nothing to do (already played, still hidden, or invalid input).
    NoOp,
}

/// Per-block play-once record. Once `has_played` is set it never reverts
/// for the life of the page view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealRecord {
    has_played: bool,
}

impl RevealRecord {
    pub fn has_played(&self) -> bool {
        self.has_played
    }
}

/// Tracks which revealable content blocks have already played their
/// entrance transition. One sequencer per mounted page; block identity is
/// the id the render layer registers under.
#[derive(Debug, Default)]
pub struct RevealSequencer {
    records: HashMap<String, RevealRecord>,
}

impl RevealSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a block, returning its current record. Safe to repeat:
    /// a remounted block that already played keeps its played record
    /// instead of being reset.
    pub fn register_block(&mut self, id: &str) -> RevealRecord {
        *self.records.entry(id.to_owned()).or_default()
    }

    pub fn has_played(&self, id: &str) -> bool {
        self.records.get(id).map(RevealRecord::has_played).unwrap_or(false)
    }

    /// Feeds one visibility sample for a block. Fractions outside `[0, 1]`
    /// (including NaN) are invalid observations and ignored. The first
    /// sample with a visible fraction above zero flips the record and
    /// returns [`RevealSignal::Play`]; every later sample is a no-op.
    pub fn on_visibility_changed(&mut self, id: &str, visible_fraction: f64) -> RevealSignal {
        if !(0.0..=1.0).contains(&visible_fraction) {
            warn!("ignoring out-of-range visibility {visible_fraction} for block '{id}'");
            return RevealSignal::NoOp;
        }

        // Observation can land before the mount effect registers the block.
        let record = self.records.entry(id.to_owned()).or_default();
        if visible_fraction > 0.0 && !record.has_played {
            record.has_played = true;
            RevealSignal::Play
        } else {
            RevealSignal::NoOp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_exactly_once() {
        let mut seq = RevealSequencer::new();
        seq.register_block("hero-title");

        assert_eq!(seq.on_visibility_changed("hero-title", 0.5), RevealSignal::Play);
        assert_eq!(seq.on_visibility_changed("hero-title", 1.0), RevealSignal::NoOp);
        assert!(seq.has_played("hero-title"));
    }

    #[test]
    fn zero_fraction_never_plays() {
        let mut seq = RevealSequencer::new();
        seq.register_block("intro-copy");

        assert_eq!(seq.on_visibility_changed("intro-copy", 0.0), RevealSignal::NoOp);
        assert!(!seq.has_played("intro-copy"));

        // Full visibility is a valid boundary and plays.
        assert_eq!(seq.on_visibility_changed("intro-copy", 1.0), RevealSignal::Play);
    }

    #[test]
    fn out_of_range_fractions_are_ignored() {
        let mut seq = RevealSequencer::new();
        seq.register_block("stats-card");

        assert_eq!(seq.on_visibility_changed("stats-card", -0.1), RevealSignal::NoOp);
        assert_eq!(seq.on_visibility_changed("stats-card", 1.5), RevealSignal::NoOp);
        assert_eq!(seq.on_visibility_changed("stats-card", f64::NAN), RevealSignal::NoOp);
        assert!(!seq.has_played("stats-card"));

        // A later valid sample still plays.
        assert_eq!(seq.on_visibility_changed("stats-card", 0.2), RevealSignal::Play);
    }

    #[test]
    fn blocks_are_independent() {
        let mut seq = RevealSequencer::new();
        seq.register_block("first");
        seq.register_block("second");

        assert_eq!(seq.on_visibility_changed("first", 0.8), RevealSignal::Play);
        assert!(seq.has_played("first"));
        assert!(!seq.has_played("second"));
    }

    #[test]
    fn reregistration_keeps_played_record() {
        let mut seq = RevealSequencer::new();
        seq.register_block("about-title");
        seq.on_visibility_changed("about-title", 0.4);

        // Remount/re-render churn registers again; the record survives.
        let record = seq.register_block("about-title");
        assert!(record.has_played());
        assert_eq!(seq.on_visibility_changed("about-title", 0.9), RevealSignal::NoOp);
    }

    #[test]
    fn observation_before_registration_is_not_lost() {
        let mut seq = RevealSequencer::new();
        assert_eq!(seq.on_visibility_changed("cta-title", 0.3), RevealSignal::Play);

        let record = seq.register_block("cta-title");
        assert!(record.has_played());
    }

    #[test]
    fn unknown_block_reads_as_unplayed() {
        let seq = RevealSequencer::new();
        assert!(!seq.has_played("never-registered"));
    }
}
