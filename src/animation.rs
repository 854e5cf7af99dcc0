//! Fill-boundary animation with latest-request-wins scheduling
//!
//! The slider's fill boundary is smoothed through a single-slot request
//! queue: each new request atomically replaces any pending one, and only
//! the most recent request is ever applied. Correctness never depends on
//! this module; the authoritative value always lives in
//! [`SliderState`](crate::state::SliderState).

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Duration of an eased slide (programmatic value changes).
const SLIDE_DURATION: Duration = Duration::from_millis(250);

fn slide_easing() -> Easing {
    Easing::EASE_OUT.with_duration(SLIDE_DURATION)
}

/// A pending change to the animated fill boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideRequest {
    /// Jump straight to the target, used while the pointer drives the fill.
    Snap(f32),
    /// Ease towards the target, used for programmatic value changes.
    Ease(f32),
}

impl SlideRequest {
    pub fn target(self) -> f32 {
        match self {
            Self::Snap(target) | Self::Ease(target) => target,
        }
    }
}

/// Animated position of the fill boundary.
#[derive(Debug)]
pub struct TrackAnimation {
    position: Animated<f32>,
    pending: Option<SlideRequest>,
}

impl TrackAnimation {
    pub fn new(position: f32) -> Self {
        Self {
            position: Animated::transition(position, slide_easing()),
            pending: None,
        }
    }

    /// Submits a request, replacing any pending one.
    pub fn request(&mut self, request: SlideRequest) {
        self.pending = Some(request);
    }

    /// Discards any in-flight interpolation and pending request, placing
    /// the boundary directly at `position`.
    pub fn reset(&mut self, position: f32) {
        self.position = Animated::transition(position, slide_easing());
        self.pending = None;
    }

    /// Applies the latest pending request, then advances the interpolation
    /// to `now`. Called once per redraw frame.
    pub fn tick(&mut self, now: Instant) {
        match self.pending.take() {
            Some(SlideRequest::Snap(target)) => {
                self.position = Animated::transition(target, slide_easing());
            }
            Some(SlideRequest::Ease(target)) => {
                self.position.update(target.into());
            }
            None => {}
        }
        self.position.tick(now);
    }

    /// Current interpolated position.
    pub fn value(&self) -> f32 {
        *self.position.value()
    }

    /// Position the animation is heading towards.
    pub fn target(&self) -> f32 {
        *self.position.target()
    }

    /// Whether another frame is needed, either because an interpolation is
    /// running or because a request has not been applied yet.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some() || self.position.is_animating()
    }
}
