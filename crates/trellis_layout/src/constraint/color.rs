//! Color constraints

use trellis_core::Color;

use super::{Animation, AxisConstraint, ResolveCx};
use crate::error::Result;

/// How a component's color is derived
#[derive(Debug)]
pub enum ColorConstraint {
    Constant(Color),
    Animating(Box<Animation<ColorConstraint>>),
}

impl ColorConstraint {
    pub fn constant(color: Color) -> Self {
        ColorConstraint::Constant(color)
    }
}

impl Default for ColorConstraint {
    fn default() -> Self {
        ColorConstraint::Constant(Color::WHITE)
    }
}

impl From<Color> for ColorConstraint {
    fn from(color: Color) -> Self {
        ColorConstraint::Constant(color)
    }
}

impl AxisConstraint for ColorConstraint {
    type Value = Color;

    fn resolve(&self, cx: &ResolveCx<'_>) -> Result<Color> {
        match self {
            ColorConstraint::Constant(color) => Ok(*color),
            ColorConstraint::Animating(animation) => animation.resolve(cx),
        }
    }

    fn animating(animation: Animation<Self>) -> Self {
        ColorConstraint::Animating(Box::new(animation))
    }

    fn as_animation(&self) -> Option<&Animation<Self>> {
        match self {
            ColorConstraint::Animating(animation) => Some(&**animation),
            _ => None,
        }
    }

    fn as_animation_mut(&mut self) -> Option<&mut Animation<Self>> {
        match self {
            ColorConstraint::Animating(animation) => Some(&mut **animation),
            _ => None,
        }
    }
}
