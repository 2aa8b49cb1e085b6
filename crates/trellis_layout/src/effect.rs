//! Draw effects
//!
//! An effect hooks into one component's draw: before it paints itself, before
//! its children draw, and after everything in its subtree has drawn. Effects
//! only touch render state through the [`DrawContext`].

use trellis_core::DrawContext;

use crate::error::Result;
use crate::tree::{ComponentId, ComponentTree};

/// Render-state hook attached to a component
pub trait Effect {
    fn before_draw(
        &self,
        _tree: &ComponentTree,
        _component: ComponentId,
        _ctx: &mut dyn DrawContext,
    ) -> Result<()> {
        Ok(())
    }

    fn before_children_draw(
        &self,
        _tree: &ComponentTree,
        _component: ComponentId,
        _ctx: &mut dyn DrawContext,
    ) -> Result<()> {
        Ok(())
    }

    fn after_draw(
        &self,
        _tree: &ComponentTree,
        _component: ComponentId,
        _ctx: &mut dyn DrawContext,
    ) -> Result<()> {
        Ok(())
    }
}

/// Clips the component and its subtree to a rectangle
///
/// The rectangle is the bounds of `bounding_box` if set, otherwise the
/// component's own bounds, in logical pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScissorEffect {
    bounding_box: Option<ComponentId>,
}

impl ScissorEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clip to another component's bounds instead
    pub fn with_bounds(component: ComponentId) -> Self {
        Self {
            bounding_box: Some(component),
        }
    }
}

impl Effect for ScissorEffect {
    fn before_draw(
        &self,
        tree: &ComponentTree,
        component: ComponentId,
        ctx: &mut dyn DrawContext,
    ) -> Result<()> {
        let target = self.bounding_box.unwrap_or(component);
        ctx.push_clip(tree.bounds(target)?);
        Ok(())
    }

    fn after_draw(
        &self,
        _tree: &ComponentTree,
        _component: ComponentId,
        ctx: &mut dyn DrawContext,
    ) -> Result<()> {
        ctx.pop_clip();
        Ok(())
    }
}

/// Masks the children to the shape the component paints
#[derive(Clone, Copy, Debug, Default)]
pub struct StencilEffect;

impl Effect for StencilEffect {
    fn before_draw(
        &self,
        _tree: &ComponentTree,
        _component: ComponentId,
        ctx: &mut dyn DrawContext,
    ) -> Result<()> {
        ctx.begin_stencil_mask();
        Ok(())
    }

    fn before_children_draw(
        &self,
        _tree: &ComponentTree,
        _component: ComponentId,
        ctx: &mut dyn DrawContext,
    ) -> Result<()> {
        ctx.use_stencil_mask();
        Ok(())
    }

    fn after_draw(
        &self,
        _tree: &ComponentTree,
        _component: ComponentId,
        ctx: &mut dyn DrawContext,
    ) -> Result<()> {
        ctx.end_stencil_mask();
        Ok(())
    }
}
