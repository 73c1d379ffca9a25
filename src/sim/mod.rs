//! Target field simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (list order)
//! - No rendering or platform dependencies

pub mod hit;
pub mod session;
pub mod state;
pub mod tick;

pub use hit::{CanvasRect, hit_test};
pub use session::{Event, Outcome, Session, TimerCommand};
pub use state::{
    Features, Placement, SpeedPreset, Target, TargetField, random_base_direction,
};
pub use tick::advance;
