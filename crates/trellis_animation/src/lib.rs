//! Trellis Animation Primitives
//!
//! Tick-driven animations in Trellis are constraints that blend between two
//! other constraints. This crate supplies the two pieces that blend needs:
//!
//! - **Easing**: named curves mapping linear progress to eased progress
//! - **Interpolate**: how a resolved value (position, size, color) is blended

pub mod easing;
pub mod values;

pub use easing::{Easing, ParseEasingError};
pub use values::Interpolate;
