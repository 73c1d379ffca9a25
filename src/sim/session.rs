//! Session entry point
//!
//! The host forwards every click, key and timer tick to `handle_event`, which
//! mutates the field synchronously and tells the host what to do next.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::hit::{CanvasRect, hit_test};
use super::state::{Features, SpeedPreset, TargetField};
use super::tick::advance;

/// Input delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer click in client pixels, with the canvas bounding box
    Click { client: Vec2, rect: CanvasRect },
    /// Single-character key press
    Key(char),
    /// Fixed-interval timer fired
    Tick,
    /// Rebuild the field from scratch
    Reset,
}

/// Start or stop the host's interval timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Stop,
}

/// What the host should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// State changed; re-tessellate and draw
    pub redraw: bool,
    pub timer: Option<TimerCommand>,
    /// This event hit the last remaining target
    pub cleared: bool,
}

impl Outcome {
    fn redraw() -> Self {
        Self {
            redraw: true,
            ..Default::default()
        }
    }
}

/// One play session: the field, its random source and the timer flag
pub struct Session {
    pub field: TargetField,
    rng: Pcg32,
    timer_running: bool,
}

impl Session {
    /// Create a session and populate its first field
    pub fn new(features: Features, seed: u64) -> Self {
        let mut session = Self {
            field: TargetField::new(features),
            rng: Pcg32::seed_from_u64(seed),
            timer_running: false,
        };
        session.reset();
        log::info!(
            "Session started with seed {} ({} targets)",
            seed,
            session.field.initial_count
        );
        session
    }

    /// Command the host should apply right after construction
    pub fn initial_timer(&self) -> Option<TimerCommand> {
        self.timer_running.then_some(TimerCommand::Start)
    }

    fn reset(&mut self) {
        let features = self.field.features;
        self.field
            .initialize(features.target_count(), features.placement, &mut self.rng);
        self.field.movement_enabled = features.motion;
        self.timer_running = features.motion;
    }

    /// Apply one host event
    pub fn handle_event(&mut self, event: Event) -> Outcome {
        match event {
            Event::Click { client, rect } => self.click(rect.to_normalized(client)),
            Event::Key(key) => self.key(key),
            Event::Tick => {
                if !self.field.movement_enabled {
                    return Outcome::default();
                }
                advance(&mut self.field, 1);
                Outcome::redraw()
            }
            Event::Reset => {
                let was_running = self.timer_running;
                self.reset();
                log::info!("Field reset ({} targets)", self.field.initial_count);
                Outcome {
                    redraw: true,
                    timer: self.timer_change(was_running),
                    cleared: false,
                }
            }
        }
    }

    fn click(&mut self, point: Vec2) -> Outcome {
        if !self.field.features.clickable {
            return Outcome::default();
        }
        let already_cleared = self.field.is_cleared();
        let hits = hit_test(&mut self.field, point);
        let cleared = hits > 0 && !already_cleared && self.field.is_cleared();
        if cleared {
            match self.field.score() {
                Some(score) => log::info!("Field cleared, score {}", score),
                None => log::info!("Field cleared"),
            }
        }
        Outcome {
            redraw: true,
            timer: None,
            cleared,
        }
    }

    fn key(&mut self, key: char) -> Outcome {
        let features = self.field.features;
        match key {
            'm' if features.motion => {
                let was_running = self.timer_running;
                self.field.movement_enabled = !self.field.movement_enabled;
                self.timer_running = self.field.movement_enabled;
                log::info!("Movement: {}", self.field.movement_enabled);
                Outcome {
                    redraw: false,
                    timer: self.timer_change(was_running),
                    cleared: false,
                }
            }
            'r' => self.handle_event(Event::Reset),
            k if features.speed_presets => match SpeedPreset::from_key(k) {
                Some(speed) => {
                    self.field.speed = speed;
                    log::info!("Speed preset {:?} (divisor {})", speed, speed.divisor());
                    Outcome::default()
                }
                None => Outcome::default(),
            },
            _ => Outcome::default(),
        }
    }

    fn timer_change(&self, was_running: bool) -> Option<TimerCommand> {
        match (was_running, self.timer_running) {
            (false, true) => Some(TimerCommand::Start),
            (true, false) => Some(TimerCommand::Stop),
            _ => None,
        }
    }
}
