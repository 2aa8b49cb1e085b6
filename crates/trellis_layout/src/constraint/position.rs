//! Position constraints (X and Y axes)

use super::{Animation, AxisConstraint, ResolveCx};
use crate::error::Result;

/// How a component's left edge is derived
#[derive(Debug)]
pub enum XConstraint {
    /// Offset from the parent's left edge, or from its right edge when
    /// `from_opposite` is set (the component's own width is then subtracted)
    Pixels { value: f32, from_opposite: bool },
    /// `fraction` of the free space `parent width - own width`;
    /// 0.0 aligns left, 0.5 centers, 1.0 aligns right
    Relative(f32),
    /// Centered within the parent
    Center,
    /// Absolute coordinate, independent of the parent
    Constant(f32),
    /// Mid-animation
    Animating(Box<Animation<XConstraint>>),
}

impl XConstraint {
    pub fn pixels(value: f32) -> Self {
        XConstraint::Pixels {
            value,
            from_opposite: false,
        }
    }

    /// `value` pixels in from the parent's right edge
    pub fn pixels_from_far(value: f32) -> Self {
        XConstraint::Pixels {
            value,
            from_opposite: true,
        }
    }

    pub fn relative(fraction: f32) -> Self {
        XConstraint::Relative(fraction)
    }

    pub fn center() -> Self {
        XConstraint::Center
    }

    pub fn constant(value: f32) -> Self {
        XConstraint::Constant(value)
    }
}

impl Default for XConstraint {
    fn default() -> Self {
        XConstraint::pixels(0.0)
    }
}

impl AxisConstraint for XConstraint {
    type Value = f32;

    fn resolve(&self, cx: &ResolveCx<'_>) -> Result<f32> {
        let tree = cx.tree;
        match self {
            XConstraint::Pixels {
                value,
                from_opposite: false,
            } => Ok(tree.left(cx.parent)? + value),
            XConstraint::Pixels {
                value,
                from_opposite: true,
            } => Ok(tree.right(cx.parent)? - value - tree.width(cx.component)?),
            XConstraint::Relative(fraction) => {
                let free = tree.width(cx.parent)? - tree.width(cx.component)?;
                Ok(tree.left(cx.parent)? + free * fraction)
            }
            XConstraint::Center => {
                let free = tree.width(cx.parent)? - tree.width(cx.component)?;
                Ok(tree.left(cx.parent)? + free / 2.0)
            }
            XConstraint::Constant(value) => Ok(*value),
            XConstraint::Animating(animation) => animation.resolve(cx),
        }
    }

    fn animating(animation: Animation<Self>) -> Self {
        XConstraint::Animating(Box::new(animation))
    }

    fn as_animation(&self) -> Option<&Animation<Self>> {
        match self {
            XConstraint::Animating(animation) => Some(&**animation),
            _ => None,
        }
    }

    fn as_animation_mut(&mut self) -> Option<&mut Animation<Self>> {
        match self {
            XConstraint::Animating(animation) => Some(&mut **animation),
            _ => None,
        }
    }
}

/// How a component's top edge is derived
#[derive(Debug)]
pub enum YConstraint {
    /// Offset from the parent's top edge, or from its bottom edge when
    /// `from_opposite` is set (the component's own height is then subtracted)
    Pixels { value: f32, from_opposite: bool },
    /// `fraction` of the free space `parent height - own height`
    Relative(f32),
    /// Centered within the parent
    Center,
    /// Directly below the previous sibling's bottom edge
    ///
    /// Siblings are read in insertion order. If that order does not match the
    /// intended visual order the layout is wrong, but nothing fails.
    Sibling,
    /// Absolute coordinate, independent of the parent
    Constant(f32),
    /// Mid-animation
    Animating(Box<Animation<YConstraint>>),
}

impl YConstraint {
    pub fn pixels(value: f32) -> Self {
        YConstraint::Pixels {
            value,
            from_opposite: false,
        }
    }

    /// `value` pixels up from the parent's bottom edge
    pub fn pixels_from_far(value: f32) -> Self {
        YConstraint::Pixels {
            value,
            from_opposite: true,
        }
    }

    pub fn relative(fraction: f32) -> Self {
        YConstraint::Relative(fraction)
    }

    pub fn center() -> Self {
        YConstraint::Center
    }

    /// Stack after the previous sibling ("cram")
    pub fn sibling() -> Self {
        YConstraint::Sibling
    }

    pub fn constant(value: f32) -> Self {
        YConstraint::Constant(value)
    }
}

impl Default for YConstraint {
    fn default() -> Self {
        YConstraint::pixels(0.0)
    }
}

impl AxisConstraint for YConstraint {
    type Value = f32;

    fn resolve(&self, cx: &ResolveCx<'_>) -> Result<f32> {
        let tree = cx.tree;
        match self {
            YConstraint::Pixels {
                value,
                from_opposite: false,
            } => Ok(tree.top(cx.parent)? + value),
            YConstraint::Pixels {
                value,
                from_opposite: true,
            } => Ok(tree.bottom(cx.parent)? - value - tree.height(cx.component)?),
            YConstraint::Relative(fraction) => {
                let free = tree.height(cx.parent)? - tree.height(cx.component)?;
                Ok(tree.top(cx.parent)? + free * fraction)
            }
            YConstraint::Center => {
                let free = tree.height(cx.parent)? - tree.height(cx.component)?;
                Ok(tree.top(cx.parent)? + free / 2.0)
            }
            YConstraint::Sibling => {
                let siblings = tree.children(cx.parent)?;
                match siblings.iter().position(|&id| id == cx.component) {
                    Some(index) if index > 0 => tree.bottom(siblings[index - 1]),
                    _ => tree.top(cx.parent),
                }
            }
            YConstraint::Constant(value) => Ok(*value),
            YConstraint::Animating(animation) => animation.resolve(cx),
        }
    }

    fn animating(animation: Animation<Self>) -> Self {
        YConstraint::Animating(Box::new(animation))
    }

    fn as_animation(&self) -> Option<&Animation<Self>> {
        match self {
            YConstraint::Animating(animation) => Some(&**animation),
            _ => None,
        }
    }

    fn as_animation_mut(&mut self) -> Option<&mut Animation<Self>> {
        match self {
            YConstraint::Animating(animation) => Some(&mut **animation),
            _ => None,
        }
    }
}
