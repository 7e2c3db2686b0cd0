use crate::theme::Color;
use jsonview_types::JsonValue;
use std::time::{Duration, Instant};

/// Value seen on the immediately prior render of one node.
///
/// Overwritten exactly once per render cycle, after classification, no
/// matter whether a flash fired. Empty until the second cycle.
#[derive(Default)]
pub struct PrevValue {
    value: Option<JsonValue>,
}

impl PrevValue {
    pub fn new() -> Self {
        Self { value: None }
    }

    pub fn get(&self) -> Option<&JsonValue> {
        self.value.as_ref()
    }

    pub fn commit(&mut self, current: Option<JsonValue>) {
        self.value = current;
    }
}

/// Dependency gate for the flash effect.
///
/// The flash replays only when the `(verdict, value)` pair it watches
/// actually changed since the last render; a value that merely stays
/// equal to its already-highlighted self does not flash again every
/// frame. There is no cooldown: every fresh qualifying change re-arms.
#[derive(Default)]
pub struct FlashGate {
    seen: Option<(bool, Option<JsonValue>)>,
}

impl FlashGate {
    pub fn new() -> Self {
        Self { seen: None }
    }

    /// Record this render's `(verdict, value)` pair and report whether a
    /// flash should play.
    pub fn should_fire(&mut self, verdict: bool, value: Option<&JsonValue>) -> bool {
        let changed = match &self.seen {
            Some((seen_verdict, seen_value)) => {
                *seen_verdict != verdict || !opt_same(seen_value.as_ref(), value)
            }
            None => true,
        };
        if changed {
            self.seen = Some((verdict, value.cloned()));
        }
        verdict && changed
    }
}

fn opt_same(a: Option<&JsonValue>, b: Option<&JsonValue>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same_snapshot(b),
        _ => false,
    }
}

/// How flash progress maps to fade progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
        }
    }
}

pub const FLASH_DURATION: Duration = Duration::from_millis(1000);

/// One armed background flash: fades from the highlight color to
/// transparent over its duration.
#[derive(Debug, Clone)]
pub struct Flash {
    started: Instant,
    duration: Duration,
    easing: Easing,
    color: Color,
}

impl Flash {
    pub fn new(color: Color, started: Instant) -> Self {
        Self {
            started,
            duration: FLASH_DURATION,
            easing: Easing::EaseIn,
            color,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Background color at `now`, or `None` once the flash has finished.
    pub fn sample(&self, now: Instant) -> Option<Color> {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return None;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let faded = self.easing.apply(t.clamp(0.0, 1.0));
        Some(self.color.with_alpha_scaled(1.0 - faded))
    }
}
