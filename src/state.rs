//! Slider interaction state - framework-free drag and value logic
//!
//! [`SliderState`] owns everything the widget needs to track between events:
//! the current progress value, the pixel offset of the fill boundary
//! ("adjust top"), the enabled flag and the per-gesture tracking flag.
//! It knows nothing about iced; the widget layer subscribes to its events
//! and forwards them as messages.
//!
//! All coordinate math is linear: `progress = 100 - y / height * 100`,
//! rounded to the nearest integer and clamped into `[0, 100]`. Inputs are
//! never rejected, only clamped.

use std::fmt;

/// Smallest selectable progress value.
pub const MIN_VALUE: u8 = 0;

/// Largest selectable progress value.
pub const MAX_VALUE: u8 = 100;

/// Notification emitted by [`SliderState`] when its value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    /// The value changed while the pointer is still down (or was set
    /// programmatically).
    ProgressChanged(u8),
    /// The drag gesture ended; carries the final value. Emitted at most
    /// once per gesture.
    DragStopped(u8),
}

/// Interaction state of a vertical slider.
///
/// `progress` and `adjust_top` are kept consistent: whenever a pointer
/// update or a programmatic assignment happens with a positive track
/// height, `adjust_top == Self::progress_to_pixels(progress, height)`.
pub struct SliderState {
    progress: u8,
    adjust_top: f32,
    enabled: bool,
    dragging: bool,
    listeners: Vec<Box<dyn FnMut(SliderEvent)>>,
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SliderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderState")
            .field("progress", &self.progress)
            .field("adjust_top", &self.adjust_top)
            .field("enabled", &self.enabled)
            .field("dragging", &self.dragging)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SliderState {
    /// Creates an enabled state at progress 0.
    pub fn new() -> Self {
        Self {
            progress: MIN_VALUE,
            adjust_top: 0.0,
            enabled: true,
            dragging: false,
            listeners: Vec::new(),
        }
    }

    /// Registers an observer that is called on every emitted [`SliderEvent`].
    ///
    /// This is the only way changes leave the state object; rendering and
    /// host notification both hang off this subscription.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(SliderEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Current progress value in `[0, 100]`.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Pixel offset of the boundary between the unfilled and filled track
    /// regions, measured from the top of the track.
    pub fn adjust_top(&self) -> f32 {
        self.adjust_top
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a drag gesture is currently in flight.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Enables or disables the slider.
    ///
    /// Disabling mid-drag aborts the gesture immediately and silently: a
    /// disabled slider never emits events from user input, so no
    /// `DragStopped` follows. Programmatic assignment through
    /// [`set_progress`](Self::set_progress) is host-driven and stays
    /// available either way.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.dragging = false;
        }
    }

    /// Sets the progress value programmatically.
    ///
    /// Clamps `value` into `[0, 100]` and derives `adjust_top` when the
    /// track height is known. Emits both [`SliderEvent::ProgressChanged`]
    /// and [`SliderEvent::DragStopped`] so the host learns the effective
    /// value, mirroring what a completed gesture would have reported.
    ///
    /// Applies even while disabled: only user input is gated by the
    /// enabled flag, and the host still needs to position a disabled
    /// slider (e.g. an initial value supplied on mount).
    pub fn set_progress(&mut self, value: u8, track_height: f32) {
        let value = value.min(MAX_VALUE);
        self.progress = value;
        if track_height > 0.0 {
            self.adjust_top = Self::progress_to_pixels(value, track_height);
        }
        self.notify(SliderEvent::ProgressChanged(value));
        self.notify(SliderEvent::DragStopped(value));
    }

    /// Steps the value by `delta`, clamped into `[0, 100]`. Used for
    /// keyboard input, so it is gated like pointer input: ignored while
    /// disabled, and ignored while a drag gesture is in flight so the
    /// gesture's single `DragStopped` stays the only one. Returns whether
    /// the value changed.
    pub fn step(&mut self, delta: i8, track_height: f32) -> bool {
        if !self.enabled || self.dragging {
            return false;
        }
        let next = (i16::from(self.progress) + i16::from(delta))
            .clamp(i16::from(MIN_VALUE), i16::from(MAX_VALUE)) as u8;
        if next == self.progress {
            return false;
        }
        self.set_progress(next, track_height);
        true
    }

    /// Starts a drag gesture. Returns whether tracking began.
    ///
    /// The press itself does not move the value; only subsequent moves and
    /// the release do. A disabled state rejects the press.
    pub fn pointer_down(&mut self) -> bool {
        if !self.enabled || self.dragging {
            return false;
        }
        self.dragging = true;
        true
    }

    /// Updates the value from a pointer move at `y` pixels from the top of
    /// the track. No-op unless a gesture is in flight and the track has a
    /// positive height (guards the division).
    pub fn pointer_move(&mut self, y: f32, track_height: f32) {
        if !self.dragging || !self.enabled || track_height <= 0.0 {
            return;
        }
        self.update_from_pointer(y, track_height);
        self.notify(SliderEvent::ProgressChanged(self.progress));
    }

    /// Ends the drag gesture, updating the value from the release position
    /// first. Emits [`SliderEvent::DragStopped`] with the final value.
    pub fn pointer_up(&mut self, y: f32, track_height: f32) {
        if !self.dragging {
            return;
        }
        if track_height > 0.0 {
            self.update_from_pointer(y, track_height);
        }
        self.dragging = false;
        self.notify(SliderEvent::DragStopped(self.progress));
    }

    fn update_from_pointer(&mut self, y: f32, track_height: f32) {
        // Clamping happens in progress space, so adjust_top derived from
        // the clamped value stays inside [0, track_height].
        let progress = Self::pixels_to_progress(y, track_height);
        self.progress = progress;
        self.adjust_top = Self::progress_to_pixels(progress, track_height);
    }

    /// Converts a progress value into the fill-boundary pixel offset:
    /// `(100 - progress) * track_height / 100`.
    pub fn progress_to_pixels(progress: u8, track_height: f32) -> f32 {
        f32::from(MAX_VALUE - progress.min(MAX_VALUE)) * track_height / f32::from(MAX_VALUE)
    }

    /// Converts a pixel offset into a progress value, rounded to the
    /// nearest integer and clamped into `[0, 100]`.
    pub fn pixels_to_progress(pixels: f32, track_height: f32) -> u8 {
        let raw = f32::from(MAX_VALUE) - pixels / track_height * f32::from(MAX_VALUE);
        raw.round().clamp(f32::from(MIN_VALUE), f32::from(MAX_VALUE)) as u8
    }

    fn notify(&mut self, event: SliderEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Subscribes a recording listener and returns the shared event log.
    fn record_events(state: &mut SliderState) -> Rc<RefCell<Vec<SliderEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        state.subscribe(move |event| sink.borrow_mut().push(event));
        events
    }

    #[test]
    fn test_round_trip_conversion() {
        for height in [180.0_f32, 360.0, 77.0, 1.0] {
            for progress in MIN_VALUE..=MAX_VALUE {
                let pixels = SliderState::progress_to_pixels(progress, height);
                assert_eq!(
                    SliderState::pixels_to_progress(pixels, height),
                    progress,
                    "round trip failed for progress {progress} at height {height}"
                );
            }
        }
    }

    #[test]
    fn test_pointer_coordinates_are_clamped() {
        let mut state = SliderState::new();
        assert!(state.pointer_down());

        state.pointer_move(-50.0, 180.0);
        assert_eq!(state.progress(), MAX_VALUE);

        state.pointer_move(1000.0, 180.0);
        assert_eq!(state.progress(), MIN_VALUE);
        assert_eq!(state.adjust_top(), 180.0);
    }

    #[test]
    fn test_set_progress_emits_both_events() {
        let mut state = SliderState::new();
        let events = record_events(&mut state);

        state.set_progress(34, 180.0);

        assert_eq!(
            *events.borrow(),
            vec![
                SliderEvent::ProgressChanged(34),
                SliderEvent::DragStopped(34),
            ]
        );
        assert_eq!(state.progress(), 34);
        assert_eq!(
            state.adjust_top(),
            SliderState::progress_to_pixels(34, 180.0)
        );
    }

    #[test]
    fn test_set_progress_clamps_overshoot() {
        let mut state = SliderState::new();
        state.set_progress(150, 180.0);
        assert_eq!(state.progress(), MAX_VALUE);
    }

    #[test]
    fn test_disabled_rejects_pointer_down() {
        let mut state = SliderState::new();
        state.set_enabled(false);
        let events = record_events(&mut state);

        assert!(!state.pointer_down());
        state.pointer_move(90.0, 180.0);
        state.pointer_up(90.0, 180.0);

        assert!(events.borrow().is_empty());
        assert_eq!(state.progress(), MIN_VALUE);
    }

    #[test]
    fn test_drag_top_to_bottom_is_monotonic() {
        let height = 180.0;
        let mut state = SliderState::new();
        assert!(state.pointer_down());

        let mut previous = MAX_VALUE;
        for step in 0..=180 {
            state.pointer_move(step as f32, height);
            assert!(
                state.progress() <= previous,
                "progress increased while dragging downwards"
            );
            previous = state.progress();
        }
        assert_eq!(previous, MIN_VALUE);
    }

    #[test]
    fn test_release_reports_last_value_once() {
        let mut state = SliderState::new();
        let events = record_events(&mut state);

        assert!(state.pointer_down());
        state.pointer_move(45.0, 180.0);
        state.pointer_move(90.0, 180.0);
        state.pointer_up(90.0, 180.0);
        // A stray release outside a gesture must not emit again.
        state.pointer_up(90.0, 180.0);

        let stopped: Vec<_> = events
            .borrow()
            .iter()
            .filter(|event| matches!(event, SliderEvent::DragStopped(_)))
            .copied()
            .collect();
        assert_eq!(stopped, vec![SliderEvent::DragStopped(50)]);
    }

    #[test]
    fn test_disabled_still_accepts_programmatic_set() {
        let mut state = SliderState::new();
        state.set_enabled(false);
        let events = record_events(&mut state);

        state.set_progress(34, 180.0);

        assert_eq!(state.progress(), 34);
        assert_eq!(
            state.adjust_top(),
            SliderState::progress_to_pixels(34, 180.0)
        );
        assert_eq!(
            *events.borrow(),
            vec![
                SliderEvent::ProgressChanged(34),
                SliderEvent::DragStopped(34),
            ]
        );
    }

    #[test]
    fn test_step_adjusts_value_when_idle() {
        let mut state = SliderState::new();
        state.set_progress(34, 180.0);
        let events = record_events(&mut state);

        assert!(state.step(1, 180.0));
        assert_eq!(state.progress(), 35);
        assert_eq!(
            *events.borrow(),
            vec![
                SliderEvent::ProgressChanged(35),
                SliderEvent::DragStopped(35),
            ]
        );

        // Clamped at the bounds: no change, no events.
        state.set_progress(MAX_VALUE, 180.0);
        events.borrow_mut().clear();
        assert!(!state.step(1, 180.0));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_step_is_ignored_mid_drag() {
        let mut state = SliderState::new();
        let events = record_events(&mut state);

        assert!(state.pointer_down());
        state.pointer_move(90.0, 180.0);

        assert!(!state.step(1, 180.0));
        assert_eq!(state.progress(), 50);

        state.pointer_up(90.0, 180.0);

        // The gesture's release is the only DragStopped emitted.
        let stopped = events
            .borrow()
            .iter()
            .filter(|event| matches!(event, SliderEvent::DragStopped(_)))
            .count();
        assert_eq!(stopped, 1);

        // Once the gesture ended, stepping works again.
        assert!(state.step(-1, 180.0));
        assert_eq!(state.progress(), 49);
    }

    #[test]
    fn test_release_without_movement_reports_current_value() {
        let mut state = SliderState::new();
        let events = record_events(&mut state);

        assert!(state.pointer_down());
        // A release with no known pointer position falls back to the pixel
        // offset derived from the current progress, never to a stale
        // adjust_top.
        let fallback = SliderState::progress_to_pixels(state.progress(), 180.0);
        state.pointer_up(fallback, 180.0);

        assert_eq!(*events.borrow(), vec![SliderEvent::DragStopped(0)]);
    }

    #[test]
    fn test_zero_height_track_is_inert() {
        let mut state = SliderState::new();
        let events = record_events(&mut state);

        assert!(state.pointer_down());
        state.pointer_move(40.0, 0.0);

        assert!(events.borrow().is_empty());
        assert_eq!(state.progress(), MIN_VALUE);
        assert_eq!(state.adjust_top(), 0.0);
    }

    #[test]
    fn test_disable_mid_drag_aborts_gesture() {
        let mut state = SliderState::new();
        let events = record_events(&mut state);

        assert!(state.pointer_down());
        state.pointer_move(45.0, 180.0);
        state.set_enabled(false);

        assert!(!state.is_dragging());
        events.borrow_mut().clear();

        // Neither further moves nor the release produce anything.
        state.pointer_move(90.0, 180.0);
        state.pointer_up(90.0, 180.0);
        assert!(events.borrow().is_empty());
        assert_eq!(state.progress(), 75);
    }
}
