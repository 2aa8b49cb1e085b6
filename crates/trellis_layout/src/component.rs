//! Chaining handle for configuring a component
//!
//! ```rust
//! use trellis_layout::prelude::*;
//!
//! let mut tree = ComponentTree::new();
//! let window = tree.create_window(WindowConfig::default());
//! let button = tree.create(ComponentKind::RoundedRectangle { radius: 4.0 });
//! tree.add_child(window, button).unwrap();
//!
//! tree.component(button)
//!     .unwrap()
//!     .set_x(XConstraint::center())
//!     .set_y(YConstraint::pixels(20.0))
//!     .set_width(WidthConstraint::pixels(120.0))
//!     .set_height(HeightConstraint::pixels(32.0))
//!     .set_color(Color::GRAY)
//!     .on_mouse_enter(|tree, id| {
//!         tree.animate(id, |anim| {
//!             anim.set_color_animation(Easing::OutExp, 0.25, Color::WHITE);
//!         })
//!     });
//! ```

use crate::constraint::{
    ColorConstraint, HeightConstraint, WidthConstraint, XConstraint, YConstraint,
};
use crate::constraints::Constraints;
use crate::effect::Effect;
use crate::error::Result;
use crate::event_handler::MouseButton;
use crate::tree::{ComponentId, ComponentNode, ComponentTree};

/// Borrowed, validated handle to one component
///
/// Obtained from [`ComponentTree::component`]. Every method consumes and
/// returns the handle so calls chain.
pub struct ComponentMut<'a> {
    tree: &'a mut ComponentTree,
    id: ComponentId,
}

impl<'a> ComponentMut<'a> {
    /// `id` must be live in `tree`
    pub(crate) fn new(tree: &'a mut ComponentTree, id: ComponentId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Give the tree back, e.g. to continue with other components
    pub fn tree(self) -> &'a mut ComponentTree {
        self.tree
    }

    fn node(&mut self) -> &mut ComponentNode {
        &mut self.tree.nodes[self.id]
    }

    pub fn set_x(mut self, constraint: XConstraint) -> Self {
        self.node().constraints.set_x(constraint);
        self
    }

    pub fn set_y(mut self, constraint: YConstraint) -> Self {
        self.node().constraints.set_y(constraint);
        self
    }

    pub fn set_width(mut self, constraint: WidthConstraint) -> Self {
        self.node().constraints.set_width(constraint);
        self
    }

    pub fn set_height(mut self, constraint: HeightConstraint) -> Self {
        self.node().constraints.set_height(constraint);
        self
    }

    pub fn set_color(mut self, constraint: impl Into<ColorConstraint>) -> Self {
        self.node().constraints.set_color(constraint);
        self
    }

    pub fn constrain(mut self, edit: impl FnOnce(&mut Constraints)) -> Self {
        edit(&mut self.node().constraints);
        self
    }

    pub fn enable_effect(mut self, effect: impl Effect + 'static) -> Self {
        self.node().effects.push(Box::new(effect));
        self
    }

    pub fn enable_effects(mut self, effects: impl IntoIterator<Item = Box<dyn Effect>>) -> Self {
        self.node().effects.extend(effects);
        self
    }

    /// Replace the press handler
    pub fn on_mouse_click<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut ComponentTree, ComponentId, MouseButton) -> Result<()> + 'static,
    {
        self.node().handlers.click = Some(Box::new(handler));
        self
    }

    /// Replace the release handler
    pub fn on_mouse_release<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut ComponentTree, ComponentId) -> Result<()> + 'static,
    {
        self.node().handlers.release = Some(Box::new(handler));
        self
    }

    /// Replace the handler run when the cursor moves onto the component
    pub fn on_mouse_enter<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut ComponentTree, ComponentId) -> Result<()> + 'static,
    {
        self.node().handlers.enter = Some(Box::new(handler));
        self
    }

    /// Replace the handler run when the cursor moves off the component
    pub fn on_mouse_leave<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut ComponentTree, ComponentId) -> Result<()> + 'static,
    {
        self.node().handlers.leave = Some(Box::new(handler));
        self
    }

    /// Replace the wheel handler
    pub fn on_mouse_scroll<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut ComponentTree, ComponentId, i32) -> Result<()> + 'static,
    {
        self.node().handlers.scroll = Some(Box::new(handler));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WindowConfig;
    use crate::effect::ScissorEffect;
    use crate::element::ComponentKind;
    use trellis_core::Color;

    #[test]
    fn test_chained_setters_apply() {
        let mut tree = ComponentTree::new();
        let root = tree.create_window(WindowConfig::default().with_size(200.0, 100.0));
        let id = tree.create(ComponentKind::Block);
        tree.add_child(root, id).unwrap();

        tree.component(id)
            .unwrap()
            .set_x(XConstraint::pixels_from_far(10.0))
            .set_width(WidthConstraint::relative(0.25))
            .set_height(HeightConstraint::pixels(8.0))
            .enable_effect(ScissorEffect::new())
            .on_mouse_click(|_, _, _| Ok(()));

        assert_eq!(tree.width(id).unwrap(), 50.0);
        assert_eq!(tree.left(id).unwrap(), 140.0);
        assert_eq!(tree.height(id).unwrap(), 8.0);

        let node = tree.node(id).unwrap();
        assert_eq!(node.effect_count(), 1);
        assert!(node.handlers().has_click());
        assert!(!node.handlers().has_scroll());
    }

    #[test]
    fn test_component_rejects_stale_handle() {
        let mut tree = ComponentTree::new();
        let id = tree.create(ComponentKind::Block);
        tree.dispose(id).unwrap();
        assert!(tree.component(id).is_err());
    }

    #[test]
    fn test_tree_returns_borrow() {
        let mut tree = ComponentTree::new();
        let id = tree.create(ComponentKind::Block);
        let tree_ref = tree.component(id).unwrap().set_color(Color::RED).tree();
        assert_eq!(tree_ref.len(), 1);
    }
}
