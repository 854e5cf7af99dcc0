//! The vertical slider widget
//!
//! Translates mouse, touch and keyboard events into [`SliderState`] calls,
//! forwards the state's events as messages, and draws the track plus the
//! proportional fill with rounded quads.

use std::cell::RefCell;
use std::rc::Rc;

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::{Border, Radius};
use iced::keyboard;
use iced::keyboard::key::{self, Key};
use iced::mouse;
use iced::touch;
use iced::window;
use iced::{Background, Color, Element, Event, Length, Rectangle, Size, Theme};

use crate::animation::{SlideRequest, TrackAnimation};
use crate::state::{MAX_VALUE, SliderEvent, SliderState};

const DEFAULT_CORNER_RADIUS: f32 = 40.0;

/// A vertical slider selecting an integer value in `[0, 100]`.
///
/// Dragging upwards increases the value; the filled region grows from the
/// bottom of the track. The widget publishes a message on every drag move
/// and, optionally, a second message once when the drag ends.
pub struct VerticalSlider<'a, Message> {
    initial_value: Option<u8>,
    enabled: bool,
    width: Length,
    height: Length,
    on_progress_changed: Box<dyn Fn(u8) -> Message + 'a>,
    on_stop_tracking_touch: Option<Box<dyn Fn(u8) -> Message + 'a>>,
    track_color: Option<Color>,
    progress_track_color: Option<Color>,
    corner_radius: Option<f32>,
    style: Box<dyn Fn(&Theme, Status) -> Style + 'a>,
    status: Option<Status>,
}

impl<'a, Message> VerticalSlider<'a, Message>
where
    Message: Clone,
{
    pub const DEFAULT_WIDTH: f32 = 90.0;
    pub const DEFAULT_HEIGHT: f32 = 180.0;

    /// Creates a slider that publishes `on_progress_changed` on every drag
    /// move.
    pub fn new<F>(on_progress_changed: F) -> Self
    where
        F: 'a + Fn(u8) -> Message,
    {
        Self {
            initial_value: None,
            enabled: true,
            width: Length::Fixed(Self::DEFAULT_WIDTH),
            height: Length::Fixed(Self::DEFAULT_HEIGHT),
            on_progress_changed: Box::new(on_progress_changed),
            on_stop_tracking_touch: None,
            track_color: None,
            progress_track_color: None,
            corner_radius: None,
            style: Box::new(default_style),
            status: None,
        }
    }

    /// Publishes a message once per gesture when the pointer is released,
    /// carrying the final value.
    pub fn on_stop_tracking_touch<F>(mut self, on_stop: F) -> Self
    where
        F: 'a + Fn(u8) -> Message,
    {
        self.on_stop_tracking_touch = Some(Box::new(on_stop));
        self
    }

    /// Sets the initial progress value, applied once when the widget is
    /// first mounted. Both callbacks fire immediately with the effective
    /// (clamped) value so the host knows where the slider starts.
    pub fn value(mut self, value: u8) -> Self {
        self.initial_value = Some(value.min(MAX_VALUE));
        self
    }

    /// Enables or disables interaction. A disabled slider ignores pointer
    /// presses and aborts an in-flight gesture. Default: enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Overrides the unfilled track color.
    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = Some(color);
        self
    }

    /// Overrides the filled track color.
    pub fn progress_track_color(mut self, color: Color) -> Self {
        self.progress_track_color = Some(color);
        self
    }

    /// Overrides the rounded-corner radius of the track.
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Sets the style function. Explicit `track_color`,
    /// `progress_track_color` and `corner_radius` overrides still apply on
    /// top of its output.
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self {
        self.style = Box::new(style);
        self
    }
}

/// Tree-held widget state: the interaction model, the event queue the
/// widget drains into the shell, and the fill animation.
#[derive(Debug)]
struct State {
    slider: SliderState,
    events: Rc<RefCell<Vec<SliderEvent>>>,
    animation: TrackAnimation,
    initialized: bool,
}

impl State {
    fn new() -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut slider = SliderState::new();
        let sink = Rc::clone(&events);
        slider.subscribe(move |event| sink.borrow_mut().push(event));

        Self {
            slider,
            events,
            animation: TrackAnimation::new(0.0),
            initialized: false,
        }
    }
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for VerticalSlider<'_, Message>
where
    Message: Clone,
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        // Keep the state's flag in sync with the host-supplied one; turning
        // it off aborts an in-flight gesture.
        state.slider.set_enabled(self.enabled);

        if !state.initialized {
            state.initialized = true;
            state.animation.reset(bounds.height);

            if let Some(value) = self.initial_value {
                state.slider.set_progress(value, bounds.height);
                state.animation.request(SlideRequest::Ease(
                    SliderState::progress_to_pixels(state.slider.progress(), bounds.height),
                ));
                shell.request_redraw();
            }
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if cursor.position_over(bounds).is_some() && state.slider.pointer_down() {
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                if state.slider.is_dragging() {
                    if let Some(position) = cursor.land().position() {
                        state.slider.pointer_move(position.y - bounds.y, bounds.height);
                        state
                            .animation
                            .request(SlideRequest::Snap(state.slider.adjust_top()));
                        shell.request_redraw();
                    }
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.slider.is_dragging() {
                    // Without a cursor position, derive the release offset
                    // from the authoritative progress value; adjust_top may
                    // still be unseeded when no move happened yet.
                    let y = cursor
                        .land()
                        .position()
                        .map(|position| position.y - bounds.y)
                        .unwrap_or_else(|| {
                            SliderState::progress_to_pixels(
                                state.slider.progress(),
                                bounds.height,
                            )
                        });
                    state.slider.pointer_up(y, bounds.height);
                    state
                        .animation
                        .request(SlideRequest::Snap(state.slider.adjust_top()));
                    shell.request_redraw();
                    shell.capture_event();
                }
            }
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                if self.enabled && cursor.is_over(bounds) {
                    let delta: i8 = match key {
                        Key::Named(key::Named::ArrowUp) | Key::Named(key::Named::ArrowRight) => 1,
                        Key::Named(key::Named::ArrowDown) | Key::Named(key::Named::ArrowLeft) => -1,
                        _ => 0,
                    };
                    // step is inert while a drag is in flight, keeping the
                    // gesture's DragStopped unique.
                    if delta != 0 && state.slider.step(delta, bounds.height) {
                        state.animation.request(SlideRequest::Ease(
                            SliderState::progress_to_pixels(
                                state.slider.progress(),
                                bounds.height,
                            ),
                        ));
                        shell.request_redraw();
                        shell.capture_event();
                    }
                }
            }
            Event::Window(window::Event::RedrawRequested(now)) => {
                state.animation.tick(*now);

                // Re-derive the fill target from the authoritative progress
                // value so layout resizes cannot leave a stale boundary.
                if !state.slider.is_dragging() && !state.animation.is_animating() {
                    let target =
                        SliderState::progress_to_pixels(state.slider.progress(), bounds.height);
                    if bounds.height > 0.0 && (state.animation.value() - target).abs() > 0.5 {
                        state.animation.request(SlideRequest::Snap(target));
                    }
                }

                if state.animation.is_animating() {
                    shell.request_redraw();
                }
            }
            _ => {}
        }

        for event in state.events.borrow_mut().drain(..) {
            match event {
                SliderEvent::ProgressChanged(value) => {
                    shell.publish((self.on_progress_changed)(value));
                }
                SliderEvent::DragStopped(value) => {
                    if let Some(on_stop) = &self.on_stop_tracking_touch {
                        shell.publish(on_stop(value));
                    }
                }
            }
        }

        let current_status = if !self.enabled {
            Status::Disabled
        } else if state.slider.is_dragging() {
            Status::Dragged
        } else if cursor.is_over(bounds) {
            Status::Hovered
        } else {
            Status::Active
        };

        if let Event::Window(window::Event::RedrawRequested(_now)) = event {
            self.status = Some(current_status);
        } else if self.status.is_some_and(|status| status != current_status) {
            shell.request_redraw();
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }

        let state = tree.state.downcast_ref::<State>();
        let status = self.status.unwrap_or(if self.enabled {
            Status::Active
        } else {
            Status::Disabled
        });

        let mut style = (self.style)(theme, status);
        if let Some(color) = self.track_color {
            style.track = Background::Color(color);
        }
        if let Some(color) = self.progress_track_color {
            style.progress_track = Background::Color(color);
        }
        if let Some(radius) = self.corner_radius {
            style.border.radius = radius.into();
        }

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: style.border,
                ..renderer::Quad::default()
            },
            style.track,
        );

        let adjust_top = state.animation.value().clamp(0.0, bounds.height);
        let fill_height = bounds.height - adjust_top;
        if fill_height <= 0.0 {
            return;
        }

        // Top corners flatten out while the boundary sits below them and
        // sharpen again as the fill approaches the top of the track, so the
        // fill never pokes out of the rounded silhouette.
        let radius = style.border.radius;
        let fill_border = Border {
            radius: Radius {
                top_left: (radius.top_left - adjust_top).max(0.0),
                top_right: (radius.top_right - adjust_top).max(0.0),
                bottom_right: radius.bottom_right,
                bottom_left: radius.bottom_left,
            },
            ..Border::default()
        };

        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: bounds.x,
                    y: bounds.y + adjust_top,
                    width: bounds.width,
                    height: fill_height,
                },
                border: fill_border,
                ..renderer::Quad::default()
            },
            style.progress_track,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if !self.enabled {
            return mouse::Interaction::default();
        }

        let state = tree.state.downcast_ref::<State>();

        if state.slider.is_dragging() {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grabbing
            }
        } else if cursor.is_over(layout.bounds()) {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<VerticalSlider<'a, Message>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(slider: VerticalSlider<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(slider)
    }
}

/// Interaction status of the slider, passed to the style function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Hovered,
    Dragged,
    Disabled,
}

/// Appearance of the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Background of the unfilled track region.
    pub track: Background,
    /// Background of the filled track region.
    pub progress_track: Background,
    /// Border of the track; its radius shapes both regions.
    pub border: Border,
}

fn default_style(theme: &Theme, status: Status) -> Style {
    let palette = theme.extended_palette();

    let (track, progress_track) = match status {
        Status::Disabled => (
            palette.background.weak.color.scale_alpha(0.5),
            palette.primary.weak.color.scale_alpha(0.5),
        ),
        _ => (palette.background.weak.color, palette.primary.base.color),
    };

    Style {
        track: Background::Color(track),
        progress_track: Background::Color(progress_track),
        border: Border {
            radius: DEFAULT_CORNER_RADIUS.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

/// Creates a new [`VerticalSlider`].
pub fn vertical_slider<'a, Message>(
    on_progress_changed: impl Fn(u8) -> Message + 'a,
) -> VerticalSlider<'a, Message>
where
    Message: Clone,
{
    VerticalSlider::new(on_progress_changed)
}
