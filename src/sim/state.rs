//! Target field and session counters
//!
//! The field is rebuilt wholesale on reset; targets only change in place
//! through hit-testing and motion.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// How `initialize` chooses target centers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// One target per quadrant at (±0.5, ±0.5)
    #[default]
    Fixed,
    /// Uniform over [-0.9, 0.9]²
    Random,
}

/// Feature flags for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Features {
    /// Clicks deactivate targets
    pub clickable: bool,
    pub placement: Placement,
    /// Targets carry a velocity and bounce off the walls
    pub motion: bool,
    /// Targets carry a stripe color
    pub colored: bool,
    /// Wedges rotate while movement is enabled
    pub spin: bool,
    /// Keys `1`-`4` pick the speed divisor
    pub speed_presets: bool,
    /// Clicks are counted and scored
    pub scoring: bool,
}

impl Features {
    /// Target count the variant starts with
    pub fn target_count(&self) -> usize {
        match self.placement {
            Placement::Fixed => FIXED_TARGET_COUNT,
            Placement::Random => RANDOM_TARGET_COUNT,
        }
    }
}

/// Speed divisor presets, selected with keys `1`..`4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedPreset {
    Slow,
    #[default]
    Normal,
    Fast,
    Frantic,
}

impl SpeedPreset {
    /// Map a preset key to its preset
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(SpeedPreset::Slow),
            '2' => Some(SpeedPreset::Normal),
            '3' => Some(SpeedPreset::Fast),
            '4' => Some(SpeedPreset::Frantic),
            _ => None,
        }
    }

    pub fn divisor(&self) -> f32 {
        match self {
            SpeedPreset::Slow => SPEED_DIVISORS[0],
            SpeedPreset::Normal => SPEED_DIVISORS[1],
            SpeedPreset::Fast => SPEED_DIVISORS[2],
            SpeedPreset::Frantic => SPEED_DIVISORS[3],
        }
    }
}

/// A circular click target
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub active: bool,
    pub center: Vec2,
    pub radius: f32,
    /// Raw per-axis speed, divided by the speed divisor each tick
    pub velocity: Option<Vec2>,
    pub stripe_color: Option<[f32; 4]>,
}

impl Target {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            active: true,
            center,
            radius,
            velocity: None,
            stripe_color: None,
        }
    }

    /// Whether a point lies on or inside the circle
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }
}

/// Randomized base direction for a moving target
///
/// Each axis gets a magnitude in [MIN_BASE_SPEED, 1] and an independent sign,
/// so no target starts out sliding along a single axis.
pub fn random_base_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let mut axis = || {
        let magnitude = rng.random_range(MIN_BASE_SPEED..=1.0);
        if rng.random_bool(0.5) { magnitude } else { -magnitude }
    };
    let x = axis();
    let y = axis();
    Vec2::new(x, y)
}

/// All targets plus the per-session counters
#[derive(Debug, Clone)]
pub struct TargetField {
    pub features: Features,
    pub targets: Vec<Target>,
    /// Count handed to the last `initialize`
    pub initial_count: usize,
    pub targets_remaining: usize,
    pub click_count: u32,
    /// Wedge phase in [0, 2π)
    pub spin_offset: f32,
    pub speed: SpeedPreset,
    pub movement_enabled: bool,
}

impl TargetField {
    /// Empty field; call `initialize` to populate it
    pub fn new(features: Features) -> Self {
        Self {
            features,
            targets: Vec::new(),
            initial_count: 0,
            targets_remaining: 0,
            click_count: 0,
            spin_offset: 0.0,
            speed: SpeedPreset::default(),
            movement_enabled: features.motion,
        }
    }

    /// Replace the target list with `count` fresh targets
    pub fn initialize<R: Rng + ?Sized>(&mut self, count: usize, placement: Placement, rng: &mut R) {
        let features = self.features;
        self.targets = (0..count)
            .map(|i| {
                let center = match placement {
                    Placement::Fixed => {
                        let (x, y) = FIXED_CENTERS[i % FIXED_CENTERS.len()];
                        Vec2::new(x, y)
                    }
                    Placement::Random => Vec2::new(
                        rng.random_range(-PLACEMENT_EXTENT..=PLACEMENT_EXTENT),
                        rng.random_range(-PLACEMENT_EXTENT..=PLACEMENT_EXTENT),
                    ),
                };
                let mut target = Target::new(center, TARGET_RADIUS);
                if features.motion {
                    target.velocity = Some(random_base_direction(&mut *rng));
                }
                if features.colored {
                    target.stripe_color = Some(PALETTE[rng.random_range(0..PALETTE.len())]);
                }
                target
            })
            .collect();

        self.initial_count = count;
        self.targets_remaining = count;
        self.click_count = 0;
        self.spin_offset = 0.0;
    }

    /// Targets still on screen
    pub fn active_count(&self) -> usize {
        self.targets.iter().filter(|t| t.active).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.targets_remaining == 0
    }

    /// Step divisor for motion
    pub fn speed_divisor(&self) -> f32 {
        self.speed.divisor()
    }

    /// Accuracy score: hits per hundred clicks
    ///
    /// `None` when the session is not scored. Zero clicks count as one so the
    /// untouched field scores 0.
    pub fn score(&self) -> Option<u32> {
        if !self.features.scoring {
            return None;
        }
        let hits = (self.initial_count - self.targets_remaining) as u64;
        let clicks = u64::from(self.click_count.max(1));
        Some((100 * hits / clicks) as u32)
    }

    /// HUD lines: targets remaining, then the score when scored
    pub fn status_text(&self) -> Vec<String> {
        let mut lines = vec![format!("Targets remaining: {}", self.targets_remaining)];
        if let Some(score) = self.score() {
            lines.push(format!("Score: {}", score));
        }
        lines
    }
}
