//! Trellis Core
//!
//! Foundational primitives shared by every Trellis crate:
//!
//! - **Geometry**: `Point`, `Size` and `Rect` in logical (scaled) pixels
//! - **Color**: 8-bit RGBA colors as resolved by color constraints
//! - **Draw Context**: the contract a rendering backend implements
//! - **Clocks**: monotonic time sources driving the animation tick
//!
//! # Example
//!
//! ```rust
//! use trellis_core::{Color, DrawCommand, DrawContext, Rect, RecordingContext};
//!
//! let mut ctx = RecordingContext::new();
//! ctx.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
//! assert_eq!(ctx.commands().len(), 1);
//! assert!(matches!(ctx.commands()[0], DrawCommand::FillRect { .. }));
//! ```

pub mod clock;
pub mod color;
pub mod draw;
pub mod geometry;

pub use clock::{Clock, ManualClock, SystemClock};
pub use color::Color;
pub use draw::{DrawCommand, DrawContext, RecordingContext};
pub use geometry::{Point, Rect, Size};
