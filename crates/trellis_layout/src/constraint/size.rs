//! Size constraints (width and height)

use super::{Animation, AxisConstraint, ResolveCx};
use crate::error::Result;

/// How a component's width is derived
#[derive(Debug)]
pub enum WidthConstraint {
    Pixels(f32),
    /// Fraction of the parent's width
    Relative(f32),
    Constant(f32),
    Animating(Box<Animation<WidthConstraint>>),
}

impl WidthConstraint {
    pub fn pixels(value: f32) -> Self {
        WidthConstraint::Pixels(value)
    }

    pub fn relative(fraction: f32) -> Self {
        WidthConstraint::Relative(fraction)
    }

    /// Same width as the parent
    pub fn fill() -> Self {
        WidthConstraint::Relative(1.0)
    }

    pub fn constant(value: f32) -> Self {
        WidthConstraint::Constant(value)
    }
}

impl Default for WidthConstraint {
    fn default() -> Self {
        WidthConstraint::Pixels(0.0)
    }
}

impl AxisConstraint for WidthConstraint {
    type Value = f32;

    fn resolve(&self, cx: &ResolveCx<'_>) -> Result<f32> {
        match self {
            WidthConstraint::Pixels(value) | WidthConstraint::Constant(value) => Ok(*value),
            WidthConstraint::Relative(fraction) => Ok(cx.tree.width(cx.parent)? * fraction),
            WidthConstraint::Animating(animation) => animation.resolve(cx),
        }
    }

    fn animating(animation: Animation<Self>) -> Self {
        WidthConstraint::Animating(Box::new(animation))
    }

    fn as_animation(&self) -> Option<&Animation<Self>> {
        match self {
            WidthConstraint::Animating(animation) => Some(&**animation),
            _ => None,
        }
    }

    fn as_animation_mut(&mut self) -> Option<&mut Animation<Self>> {
        match self {
            WidthConstraint::Animating(animation) => Some(&mut **animation),
            _ => None,
        }
    }
}

/// How a component's height is derived
#[derive(Debug)]
pub enum HeightConstraint {
    Pixels(f32),
    /// Fraction of the parent's height
    Relative(f32),
    Constant(f32),
    Animating(Box<Animation<HeightConstraint>>),
}

impl HeightConstraint {
    pub fn pixels(value: f32) -> Self {
        HeightConstraint::Pixels(value)
    }

    pub fn relative(fraction: f32) -> Self {
        HeightConstraint::Relative(fraction)
    }

    /// Same height as the parent
    pub fn fill() -> Self {
        HeightConstraint::Relative(1.0)
    }

    pub fn constant(value: f32) -> Self {
        HeightConstraint::Constant(value)
    }
}

impl Default for HeightConstraint {
    fn default() -> Self {
        HeightConstraint::Pixels(0.0)
    }
}

impl AxisConstraint for HeightConstraint {
    type Value = f32;

    fn resolve(&self, cx: &ResolveCx<'_>) -> Result<f32> {
        match self {
            HeightConstraint::Pixels(value) | HeightConstraint::Constant(value) => Ok(*value),
            HeightConstraint::Relative(fraction) => Ok(cx.tree.height(cx.parent)? * fraction),
            HeightConstraint::Animating(animation) => animation.resolve(cx),
        }
    }

    fn animating(animation: Animation<Self>) -> Self {
        HeightConstraint::Animating(Box::new(animation))
    }

    fn as_animation(&self) -> Option<&Animation<Self>> {
        match self {
            HeightConstraint::Animating(animation) => Some(&**animation),
            _ => None,
        }
    }

    fn as_animation_mut(&mut self) -> Option<&mut Animation<Self>> {
        match self {
            HeightConstraint::Animating(animation) => Some(&mut **animation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WindowConfig;
    use crate::element::ComponentKind;
    use crate::error::LayoutError;
    use crate::tree::ComponentTree;

    #[test]
    fn test_size_strategies() {
        let mut tree = ComponentTree::new();
        let root = tree.create_window(WindowConfig::default().with_size(200.0, 100.0));
        let id = tree.create(ComponentKind::Block);
        tree.add_child(root, id).unwrap();

        tree.set_width(id, WidthConstraint::relative(0.25)).unwrap();
        tree.set_height(id, HeightConstraint::fill()).unwrap();
        assert_eq!(tree.width(id).unwrap(), 50.0);
        assert_eq!(tree.height(id).unwrap(), 100.0);

        tree.set_width(id, WidthConstraint::pixels(12.0)).unwrap();
        tree.set_height(id, HeightConstraint::constant(3.0)).unwrap();
        assert_eq!(tree.width(id).unwrap(), 12.0);
        assert_eq!(tree.height(id).unwrap(), 3.0);
    }

    #[test]
    fn test_nested_relative_sizes_multiply() {
        let mut tree = ComponentTree::new();
        let root = tree.create_window(WindowConfig::default().with_size(200.0, 100.0));
        let outer = tree.create(ComponentKind::Container);
        let inner = tree.create(ComponentKind::Block);
        tree.add_child(root, outer).unwrap();
        tree.add_child(outer, inner).unwrap();
        tree.set_width(outer, WidthConstraint::relative(0.5)).unwrap();
        tree.set_width(inner, WidthConstraint::relative(0.5)).unwrap();

        assert_eq!(tree.width(inner).unwrap(), 50.0);
    }

    #[test]
    fn test_unattached_size_fails() {
        let mut tree = ComponentTree::new();
        let id = tree.create(ComponentKind::Block);
        tree.set_width(id, WidthConstraint::pixels(10.0)).unwrap();
        assert_eq!(tree.width(id), Err(LayoutError::NoRootAncestor));
    }
}
