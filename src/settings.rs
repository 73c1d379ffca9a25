//! Variant selection
//!
//! The variant picks which of the incremental feature sets the session runs
//! with. It lives only for the page's lifetime.

use crate::sim::{Features, Placement};

/// Incremental feature sets, from plain circles to the scored game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Four fixed circles, nothing reacts
    Static,
    /// Four fixed circles that disappear when clicked
    Clickable,
    /// Ten circles at random positions
    Randomized,
    /// Random circles bouncing off the walls
    Moving,
    /// Striped circles that spin while they move
    Spinning,
    /// Speed presets and an accuracy score
    #[default]
    Scored,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Static,
        Variant::Clickable,
        Variant::Randomized,
        Variant::Moving,
        Variant::Spinning,
        Variant::Scored,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Static => "Static",
            Variant::Clickable => "Clickable",
            Variant::Randomized => "Randomized",
            Variant::Moving => "Moving",
            Variant::Spinning => "Spinning",
            Variant::Scored => "Scored",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "static" => Some(Variant::Static),
            "clickable" | "click" => Some(Variant::Clickable),
            "randomized" | "random" => Some(Variant::Randomized),
            "moving" | "motion" => Some(Variant::Moving),
            "spinning" | "spin" => Some(Variant::Spinning),
            "scored" | "score" => Some(Variant::Scored),
            _ => None,
        }
    }

    /// Feature flags enabled by this variant
    pub fn features(&self) -> Features {
        let base = Features::default();
        match self {
            Variant::Static => base,
            Variant::Clickable => Features {
                clickable: true,
                ..base
            },
            Variant::Randomized => Features {
                clickable: true,
                placement: Placement::Random,
                ..base
            },
            Variant::Moving => Features {
                motion: true,
                ..Variant::Randomized.features()
            },
            Variant::Spinning => Features {
                colored: true,
                spin: true,
                ..Variant::Moving.features()
            },
            Variant::Scored => Features {
                speed_presets: true,
                scoring: true,
                ..Variant::Spinning.features()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_str(variant.as_str()), Some(variant));
        }
        assert_eq!(Variant::from_str("SPIN"), Some(Variant::Spinning));
        assert_eq!(Variant::from_str("bogus"), None);
    }

    #[test]
    fn test_features_accumulate() {
        let stat = Variant::Static.features();
        assert!(!stat.clickable);
        assert_eq!(stat.placement, Placement::Fixed);

        let clickable = Variant::Clickable.features();
        assert!(clickable.clickable);
        assert!(!clickable.motion);

        let moving = Variant::Moving.features();
        assert_eq!(moving.placement, Placement::Random);
        assert!(moving.motion);
        assert!(!moving.colored);

        let scored = Variant::Scored.features();
        assert!(scored.clickable && scored.motion && scored.colored && scored.spin);
        assert!(scored.speed_presets && scored.scoring);
    }
}
