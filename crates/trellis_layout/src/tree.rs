//! Component tree arena
//!
//! Components live in a [`SlotMap`] and refer to each other through
//! [`ComponentId`] handles. A component that owns a [`RootState`] is a
//! window; every other component resolves its geometry through its parent
//! chain up to a window.

use slotmap::{new_key_type, Key, SecondaryMap, SlotMap};
use smallvec::SmallVec;
use trellis_core::{Color, Point, Rect};

use crate::component::ComponentMut;
use crate::constraint::{
    ColorConstraint, HeightConstraint, ResolveCx, WidthConstraint, XConstraint, YConstraint,
};
use crate::constraints::Constraints;
use crate::effect::Effect;
use crate::element::ComponentKind;
use crate::error::{LayoutError, Result};
use crate::event_handler::EventHandlers;
use crate::window::RootState;

new_key_type! {
    pub struct ComponentId;
}

impl ComponentId {
    /// Convert to a raw u64 representation
    pub fn to_raw(self) -> u64 {
        self.data().as_ffi()
    }
}

/// One component: what it paints, how it is laid out, what it reacts to
pub struct ComponentNode {
    pub(crate) kind: ComponentKind,
    pub(crate) parent: Option<ComponentId>,
    pub(crate) children: Vec<ComponentId>,
    pub(crate) constraints: Constraints,
    pub(crate) effects: SmallVec<[Box<dyn Effect>; 2]>,
    pub(crate) handlers: EventHandlers,
    pub(crate) hovered: bool,
}

impl ComponentNode {
    fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            constraints: Constraints::default(),
            effects: SmallVec::new(),
            handlers: EventHandlers::default(),
            hovered: false,
        }
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    /// Parent handle; kept after the component is removed from that parent
    pub fn parent(&self) -> Option<ComponentId> {
        self.parent
    }

    pub fn children(&self) -> &[ComponentId] {
        &self.children
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn handlers(&self) -> &EventHandlers {
        &self.handlers
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// Hover state as of the last draw
    pub fn was_hovered(&self) -> bool {
        self.hovered
    }
}

impl std::fmt::Debug for ComponentNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentNode")
            .field("kind", &self.kind)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("effects", &self.effects.len())
            .field("handlers", &self.handlers)
            .field("hovered", &self.hovered)
            .finish()
    }
}

/// Owner of every component and window
#[derive(Default)]
pub struct ComponentTree {
    pub(crate) nodes: SlotMap<ComponentId, ComponentNode>,
    pub(crate) roots: SecondaryMap<ComponentId, RootState>,
}

impl ComponentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached component
    pub fn create(&mut self, kind: ComponentKind) -> ComponentId {
        self.nodes.insert(ComponentNode::new(kind))
    }

    /// Number of live components, windows included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: ComponentId) -> Result<&ComponentNode> {
        self.nodes.get(id).ok_or(LayoutError::StaleComponent(id))
    }

    pub(crate) fn node_mut(&mut self, id: ComponentId) -> Result<&mut ComponentNode> {
        self.nodes.get_mut(id).ok_or(LayoutError::StaleComponent(id))
    }

    /// Chaining handle for configuring one component
    pub fn component(&mut self, id: ComponentId) -> Result<ComponentMut<'_>> {
        self.node(id)?;
        Ok(ComponentMut::new(self, id))
    }

    pub fn is_root(&self, id: ComponentId) -> bool {
        self.roots.contains_key(id)
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Append `child` to `parent`'s children
    ///
    /// A child that is still listed under another parent is moved.
    pub fn add_child(&mut self, parent: ComponentId, child: ComponentId) -> Result<()> {
        self.node(parent)?;
        self.node(child)?;

        if self.is_root(child) {
            return Err(LayoutError::WindowAsChild(child));
        }
        if self.ancestors_include(parent, child) {
            return Err(LayoutError::WouldCycle { parent, child });
        }

        if let Some(previous) = self.nodes[child].parent {
            if let Some(node) = self.nodes.get_mut(previous) {
                node.children.retain(|&id| id != child);
            }
        }

        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);

        tracing::debug!("added {:?} under {:?}", child, parent);
        Ok(())
    }

    pub fn add_children(
        &mut self,
        parent: ComponentId,
        children: impl IntoIterator<Item = ComponentId>,
    ) -> Result<()> {
        for child in children {
            self.add_child(parent, child)?;
        }
        Ok(())
    }

    /// Drop `child` from `parent`'s list
    ///
    /// The child keeps its parent handle. Returns whether it was listed.
    pub fn remove_child(&mut self, parent: ComponentId, child: ComponentId) -> Result<bool> {
        let node = self.node_mut(parent)?;
        let before = node.children.len();
        node.children.retain(|&id| id != child);
        let removed = node.children.len() != before;

        if removed {
            tracing::debug!("removed {:?} from {:?}", child, parent);
        }
        Ok(removed)
    }

    /// Drop every child handle; the children keep their parent handles
    pub fn clear_children(&mut self, parent: ComponentId) -> Result<()> {
        let node = self.node_mut(parent)?;
        let count = node.children.len();
        node.children.clear();

        tracing::debug!("cleared {} children of {:?}", count, parent);
        Ok(())
    }

    /// Remove a component and its whole subtree from the arena
    ///
    /// The component is first dropped from its parent's list. Handles to any
    /// removed component fail with [`LayoutError::StaleComponent`] afterwards.
    pub fn dispose(&mut self, id: ComponentId) -> Result<()> {
        let parent = self.node(id)?.parent;
        if let Some(node) = parent.and_then(|parent| self.nodes.get_mut(parent)) {
            node.children.retain(|&child| child != id);
        }

        let subtree = self.descendants(id)?;
        for &removed in &subtree {
            self.nodes.remove(removed);
            self.roots.remove(removed);
        }

        tracing::debug!("disposed {:?} ({} components)", id, subtree.len());
        Ok(())
    }

    pub fn children(&self, id: ComponentId) -> Result<&[ComponentId]> {
        Ok(&self.node(id)?.children)
    }

    pub fn parent(&self, id: ComponentId) -> Result<Option<ComponentId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn kind(&self, id: ComponentId) -> Result<&ComponentKind> {
        Ok(&self.node(id)?.kind)
    }

    /// Direct children whose kind matches `predicate`
    pub fn children_of_kind(
        &self,
        id: ComponentId,
        predicate: impl Fn(&ComponentKind) -> bool,
    ) -> Result<Vec<ComponentId>> {
        let node = self.node(id)?;
        Ok(node
            .children
            .iter()
            .copied()
            .filter(|&child| self.nodes.get(child).is_some_and(|c| predicate(&c.kind)))
            .collect())
    }

    /// `id` followed by every live descendant, pre-order
    pub fn descendants(&self, id: ComponentId) -> Result<Vec<ComponentId>> {
        self.node(id)?;

        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            order.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(order)
    }

    /// Nearest window above (or at) `id`
    ///
    /// Follows parent handles, stale ones included.
    pub fn find_root(&self, id: ComponentId) -> Result<ComponentId> {
        let mut current = id;
        let mut node = self.node(id)?;
        loop {
            if self.is_root(current) {
                return Ok(current);
            }
            current = node.parent.ok_or(LayoutError::NoRootAncestor)?;
            node = self
                .nodes
                .get(current)
                .ok_or(LayoutError::NoRootAncestor)?;
        }
    }

    /// Whether `candidate` is `id` or appears on its parent chain
    fn ancestors_include(&self, id: ComponentId, candidate: ComponentId) -> bool {
        let mut current = Some(id);
        while let Some(step) = current {
            if step == candidate {
                return true;
            }
            current = self.nodes.get(step).and_then(|node| node.parent);
        }
        false
    }

    // =========================================================================
    // Constraints
    // =========================================================================

    pub fn constraints(&self, id: ComponentId) -> Result<&Constraints> {
        Ok(&self.node(id)?.constraints)
    }

    /// Edit several constraints at once
    pub fn constrain<R>(
        &mut self,
        id: ComponentId,
        edit: impl FnOnce(&mut Constraints) -> R,
    ) -> Result<R> {
        Ok(edit(&mut self.node_mut(id)?.constraints))
    }

    pub fn set_x(&mut self, id: ComponentId, constraint: XConstraint) -> Result<()> {
        self.node_mut(id)?.constraints.set_x(constraint);
        Ok(())
    }

    pub fn set_y(&mut self, id: ComponentId, constraint: YConstraint) -> Result<()> {
        self.node_mut(id)?.constraints.set_y(constraint);
        Ok(())
    }

    pub fn set_width(&mut self, id: ComponentId, constraint: WidthConstraint) -> Result<()> {
        self.node_mut(id)?.constraints.set_width(constraint);
        Ok(())
    }

    pub fn set_height(&mut self, id: ComponentId, constraint: HeightConstraint) -> Result<()> {
        self.node_mut(id)?.constraints.set_height(constraint);
        Ok(())
    }

    pub fn set_color(
        &mut self,
        id: ComponentId,
        constraint: impl Into<ColorConstraint>,
    ) -> Result<()> {
        self.node_mut(id)?.constraints.set_color(constraint);
        Ok(())
    }

    /// Attach an effect after any already attached
    pub fn enable_effect(&mut self, id: ComponentId, effect: impl Effect + 'static) -> Result<()> {
        self.node_mut(id)?.effects.push(Box::new(effect));
        Ok(())
    }

    /// Advance every animation in the subtree under `id` by one tick
    pub fn animation_frame(&mut self, id: ComponentId) -> Result<()> {
        for current in self.descendants(id)? {
            self.nodes[current].constraints.animation_frame();
        }
        Ok(())
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    fn resolve_cx(&self, id: ComponentId) -> Result<ResolveCx<'_>> {
        let node = self.node(id)?;
        let parent = if self.is_root(id) {
            id
        } else {
            node.parent
                .filter(|parent| self.nodes.contains_key(*parent))
                .ok_or(LayoutError::NoRootAncestor)?
        };
        Ok(ResolveCx {
            tree: self,
            component: id,
            parent,
        })
    }

    /// Left edge in logical pixels
    pub fn left(&self, id: ComponentId) -> Result<f32> {
        if self.is_root(id) {
            return Ok(0.0);
        }
        let cx = self.resolve_cx(id)?;
        self.nodes[id].constraints.x(&cx)
    }

    /// Top edge in logical pixels
    pub fn top(&self, id: ComponentId) -> Result<f32> {
        if self.is_root(id) {
            return Ok(0.0);
        }
        let cx = self.resolve_cx(id)?;
        self.nodes[id].constraints.y(&cx)
    }

    pub fn width(&self, id: ComponentId) -> Result<f32> {
        if let Some(root) = self.roots.get(id) {
            return Ok(root.scaled_size().width);
        }
        let cx = self.resolve_cx(id)?;
        self.nodes[id].constraints.width(&cx)
    }

    pub fn height(&self, id: ComponentId) -> Result<f32> {
        if let Some(root) = self.roots.get(id) {
            return Ok(root.scaled_size().height);
        }
        let cx = self.resolve_cx(id)?;
        self.nodes[id].constraints.height(&cx)
    }

    pub fn right(&self, id: ComponentId) -> Result<f32> {
        Ok(self.left(id)? + self.width(id)?)
    }

    pub fn bottom(&self, id: ComponentId) -> Result<f32> {
        Ok(self.top(id)? + self.height(id)?)
    }

    pub fn color(&self, id: ComponentId) -> Result<Color> {
        let cx = self.resolve_cx(id)?;
        self.nodes[id].constraints.color(&cx)
    }

    pub fn bounds(&self, id: ComponentId) -> Result<Rect> {
        Ok(Rect::new(
            self.left(id)?,
            self.top(id)?,
            self.width(id)?,
            self.height(id)?,
        ))
    }

    /// Whether the cursor of the enclosing window is strictly inside `id`
    ///
    /// Children drawn on top do not block the parent.
    pub fn is_hovered(&self, id: ComponentId) -> Result<bool> {
        let root = self.find_root(id)?;
        let cursor: Point = self.roots[root].scaled_cursor();
        Ok(self.bounds(id)?.contains_strict(cursor))
    }
}

impl std::fmt::Debug for ComponentTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentTree")
            .field("components", &self.nodes.len())
            .field("windows", &self.roots.len())
            .finish()
    }
}
