//! Click Targets - a click-the-circles minigame
//!
//! Core modules:
//! - `sim`: Target field, hit-testing, motion and the event entry point
//! - `renderer`: Tessellation and the WebGPU rendering pipeline
//! - `settings`: Variant selection

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Variant;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::TAU;

    /// Targets created by the fixed-layout variants
    pub const FIXED_TARGET_COUNT: usize = 4;
    /// Targets created by the randomized variants
    pub const RANDOM_TARGET_COUNT: usize = 10;

    /// Hit-test and render radius (normalized units)
    pub const TARGET_RADIUS: f32 = 0.1;
    /// Wedges per tessellated circle
    pub const TRIANGLES_PER_TARGET: u32 = 20;

    /// Random centers are drawn from [-PLACEMENT_EXTENT, PLACEMENT_EXTENT] on each axis
    pub const PLACEMENT_EXTENT: f32 = 0.9;
    /// Literal layout for fixed placement (one per quadrant)
    pub const FIXED_CENTERS: [(f32, f32); 4] = [(0.5, 0.5), (0.5, -0.5), (-0.5, -0.5), (-0.5, 0.5)];

    /// Smallest raw per-axis speed from the base-direction roll
    pub const MIN_BASE_SPEED: f32 = 0.25;
    /// Speed divisors for presets `1`..`4` (smaller divisor = faster)
    pub const SPEED_DIVISORS: [f32; 4] = [200.0, 100.0, 50.0, 25.0];

    /// Spin phase added per tick
    pub const SPIN_STEP: f32 = 0.05;
    /// Spin phase wraps here
    pub const SPIN_PERIOD: f32 = TAU;

    /// Timer period driving `advance` (~60 Hz)
    pub const TICK_PERIOD_MS: i32 = 16;

    /// Stripe palette for colored targets
    pub const PALETTE: [[f32; 4]; 8] = [
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [1.0, 1.0, 0.0, 1.0],
        [1.0, 0.0, 1.0, 1.0],
        [0.0, 1.0, 1.0, 1.0],
        [1.0, 0.5, 0.0, 1.0],
        [0.5, 0.0, 1.0, 1.0],
    ];
    /// Color of the odd wedges on colored targets
    pub const BASE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Clear color
    pub const BACKGROUND: [f32; 4] = [0.1, 0.5, 0.8, 1.0];
}
