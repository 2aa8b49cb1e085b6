//! Trellis Layout Engine
//!
//! Retained-mode component tree where every component positions, sizes and
//! colors itself through per-axis constraints relative to its parent.
//! Animations substitute a constraint with a blend toward another one and are
//! advanced at a fixed tick rate per window.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use trellis_core::{ManualClock, RecordingContext};
//! use trellis_layout::prelude::*;
//!
//! let mut tree = ComponentTree::new();
//! let window = tree.create_window(WindowConfig::new(100).with_size(400.0, 300.0));
//!
//! let sidebar = tree.create(ComponentKind::Block);
//! tree.add_child(window, sidebar).unwrap();
//! tree.component(sidebar)
//!     .unwrap()
//!     .set_width(WidthConstraint::pixels(100.0))
//!     .set_height(HeightConstraint::fill())
//!     .set_color(Color::GRAY);
//!
//! tree.animate(sidebar, |anim| {
//!     anim.set_width_animation(Easing::Linear, 0.1, WidthConstraint::pixels(200.0));
//! })
//! .unwrap();
//!
//! let clock = ManualClock::new();
//! let mut ctx = RecordingContext::new();
//! tree.draw_window(window, &clock, &mut ctx).unwrap();
//!
//! clock.advance(Duration::from_millis(100));
//! tree.draw_window(window, &clock, &mut ctx).unwrap();
//! assert_eq!(tree.width(sidebar).unwrap(), 200.0);
//! ```

pub mod animate;
pub mod component;
pub mod config;
pub mod constraint;
pub mod constraints;
pub mod effect;
pub mod element;
pub mod error;
pub mod event_handler;
pub mod events;
pub mod tree;
pub mod window;

// Core types
pub use animate::AnimationBuilder;
pub use component::ComponentMut;
pub use config::{ConfigError, WindowConfig};
pub use constraints::{AnimationTarget, Axis, Constraints};
pub use effect::{Effect, ScissorEffect, StencilEffect};
pub use element::{ComponentKind, Paint};
pub use error::{LayoutError, Result};
pub use event_handler::{EventHandlers, MouseButton};
pub use tree::{ComponentId, ComponentNode, ComponentTree};
pub use window::{RootState, TickAccumulator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::animate::AnimationBuilder;
    pub use crate::component::ComponentMut;
    pub use crate::config::WindowConfig;
    // Constraints
    pub use crate::constraint::{
        ColorConstraint, HeightConstraint, WidthConstraint, XConstraint, YConstraint,
    };
    pub use crate::constraints::{Axis, Constraints};
    // Effects
    pub use crate::effect::{Effect, ScissorEffect, StencilEffect};
    pub use crate::element::{ComponentKind, Paint};
    pub use crate::error::LayoutError;
    // Events
    pub use crate::event_handler::MouseButton;
    pub use crate::tree::{ComponentId, ComponentTree};

    // Re-export from trellis_core and trellis_animation
    pub use trellis_animation::Easing;
    pub use trellis_core::{Color, Point, Rect, Size};
}
