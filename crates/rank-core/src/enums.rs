//! Score tiers and strategy names.
//!
//! Tiers serialize as the kebab-case labels used by the result cards
//! (`high`, `med-high`, `med`, `low`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy used when the caller leaves the selector unset or blank.
pub const DEFAULT_STRATEGY: &str = "smart_balance";

/// Strategy names the scoring service is known to understand.
///
/// The client never validates against this list; strategies are opaque and
/// forwarded verbatim. It feeds the `--strategy` help text, and an
/// unlisted name is only noted in debug logs.
pub const KNOWN_STRATEGIES: &[&str] = &[
    "smart_balance",
    "fastest_wins",
    "high_impact",
    "deadline_driven",
];

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Display bucket derived from a priority score.
///
/// ```text
/// score >= 150        -> high
/// 80 <= score < 150   -> med-high
/// 40 <= score < 80    -> med
/// score < 40          -> low
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    High,
    MedHigh,
    Med,
    Low,
}

impl Tier {
    /// Lower bound (inclusive) of the `high` tier.
    pub const HIGH_FLOOR: f64 = 150.0;
    /// Lower bound (inclusive) of the `med-high` tier.
    pub const MED_HIGH_FLOOR: f64 = 80.0;
    /// Lower bound (inclusive) of the `med` tier.
    pub const MED_FLOOR: f64 = 40.0;

    /// Classify a score, checking thresholds from high to low.
    ///
    /// `NaN` never satisfies a threshold and therefore lands in [`Tier::Low`].
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score >= Self::HIGH_FLOOR {
            Self::High
        } else if score >= Self::MED_HIGH_FLOOR {
            Self::MedHigh
        } else if score >= Self::MED_FLOOR {
            Self::Med
        } else {
            Self::Low
        }
    }

    /// Return the label used on result cards.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::MedHigh => "med-high",
            Self::Med => "med",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1000.0, Tier::High)]
    #[case(150.0, Tier::High)]
    #[case(149.99, Tier::MedHigh)]
    #[case(80.0, Tier::MedHigh)]
    #[case(79.5, Tier::Med)]
    #[case(40.0, Tier::Med)]
    #[case(39.99, Tier::Low)]
    #[case(0.0, Tier::Low)]
    #[case(-250.0, Tier::Low)]
    fn classifies_on_closed_lower_bounds(#[case] score: f64, #[case] expected: Tier) {
        assert_eq!(Tier::classify(score), expected);
    }

    #[test]
    fn nan_is_low() {
        assert_eq!(Tier::classify(f64::NAN), Tier::Low);
    }

    #[test]
    fn serializes_as_card_label() {
        let json = serde_json::to_string(&Tier::MedHigh).unwrap();
        assert_eq!(json, "\"med-high\"");
        assert_eq!(Tier::MedHigh.to_string(), "med-high");
    }

    #[test]
    fn default_strategy_is_known() {
        assert!(KNOWN_STRATEGIES.contains(&DEFAULT_STRATEGY));
    }
}
