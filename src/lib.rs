//! A vertical slider widget for iced
//!
//! The user drags a pointer along a vertical track to pick an integer value
//! between 0 and 100. The filled region grows from the bottom of the
//! rounded track; the host is notified through two callbacks, one on every
//! drag move and one when the drag ends.
//!
//! # Layers
//!
//! - [`state`]: the framework-free interaction model. Coordinate math, the
//!   drag state machine and the observer mechanism live here and are unit
//!   tested without a renderer.
//! - [`animation`]: visual smoothing of the fill boundary through a
//!   single-slot, latest-request-wins queue.
//! - [`widget`]: the iced `Widget` implementation tying both together.
//!
//! # Usage
//!
//! ```no_run
//! use iced_vertical_slider::vertical_slider;
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     VolumeChanged(u8),
//!     VolumeCommitted(u8),
//! }
//!
//! let slider = vertical_slider(Message::VolumeChanged)
//!     .value(34)
//!     .on_stop_tracking_touch(Message::VolumeCommitted);
//! # let _: iced_vertical_slider::VerticalSlider<'_, Message> = slider;
//! ```

pub mod animation;
pub mod state;
pub mod widget;

pub use animation::{SlideRequest, TrackAnimation};
pub use state::{MAX_VALUE, MIN_VALUE, SliderEvent, SliderState};
pub use widget::{Status, Style, VerticalSlider, vertical_slider};
