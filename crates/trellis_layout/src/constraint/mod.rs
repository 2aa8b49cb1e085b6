//! Constraint value types
//!
//! Each component has exactly one active constraint per axis. A constraint
//! is a small closed enum ([`XConstraint`], [`YConstraint`],
//! [`WidthConstraint`], [`HeightConstraint`], [`ColorConstraint`]) describing
//! how the axis value is derived from the parent, the previous sibling or the
//! component's own size.
//!
//! Constraints are wrapped in a [`ConstraintSlot`] that memoizes the resolved
//! value. The cache is only invalidated by an animation tick
//! ([`ConstraintSlot::animation_frame`]); there is no change detection.
//!
//! # Example
//!
//! ```rust
//! use trellis_layout::prelude::*;
//!
//! let mut tree = ComponentTree::new();
//! let window = tree.create_window(WindowConfig::default().with_size(200.0, 100.0));
//! let panel = tree.create(ComponentKind::Block);
//! tree.add_child(window, panel).unwrap();
//!
//! tree.constrain(panel, |c| {
//!     c.set_x(XConstraint::center());
//!     c.set_width(WidthConstraint::relative(0.5));
//!     c.set_height(HeightConstraint::pixels(20.0));
//! })
//! .unwrap();
//!
//! assert_eq!(tree.width(panel).unwrap(), 100.0);
//! assert_eq!(tree.left(panel).unwrap(), 50.0);
//! ```

mod animation;
mod color;
mod position;
mod size;

use std::cell::Cell;

use trellis_animation::{Easing, Interpolate};

use crate::error::Result;
use crate::tree::{ComponentId, ComponentTree};

pub use animation::Animation;
pub use color::ColorConstraint;
pub use position::{XConstraint, YConstraint};
pub use size::{HeightConstraint, WidthConstraint};

/// What a constraint may look at while resolving
#[derive(Clone, Copy)]
pub struct ResolveCx<'a> {
    pub tree: &'a ComponentTree,
    /// The component whose axis is being resolved
    pub component: ComponentId,
    /// Its parent (a window is its own parent)
    pub parent: ComponentId,
}

/// Behaviour shared by the per-axis constraint enums
pub trait AxisConstraint: Default + Sized {
    /// The resolved value type
    type Value: Interpolate + Default + std::fmt::Debug;

    /// Compute the value, ignoring any cache
    fn resolve(&self, cx: &ResolveCx<'_>) -> Result<Self::Value>;

    /// Wrap an animation as this axis' constraint
    fn animating(animation: Animation<Self>) -> Self;

    fn as_animation(&self) -> Option<&Animation<Self>>;

    fn as_animation_mut(&mut self) -> Option<&mut Animation<Self>>;
}

/// An active constraint plus its memoized value
///
/// The cache lives in [`Cell`]s so resolution only needs a shared borrow of
/// the tree; the whole tree belongs to the single render thread.
#[derive(Debug)]
pub struct ConstraintSlot<C: AxisConstraint> {
    constraint: C,
    cached: Cell<C::Value>,
    recalculate: Cell<bool>,
}

impl<C: AxisConstraint> ConstraintSlot<C> {
    pub fn new(constraint: C) -> Self {
        Self {
            constraint,
            cached: Cell::new(C::Value::default()),
            recalculate: Cell::new(true),
        }
    }

    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Resolve through the cache
    pub fn resolve(&self, cx: &ResolveCx<'_>) -> Result<C::Value> {
        if !self.recalculate.get() {
            return Ok(self.cached.get());
        }

        let value = self.constraint.resolve(cx)?;
        self.cached.set(value);
        self.recalculate.set(false);
        Ok(value)
    }

    /// Last value stored by [`resolve`](Self::resolve)
    pub fn cached_value(&self) -> C::Value {
        self.cached.get()
    }

    /// Whether the next [`resolve`](Self::resolve) recomputes
    pub fn recalculate(&self) -> bool {
        self.recalculate.get()
    }

    pub fn set_recalculate(&self, recalculate: bool) {
        self.recalculate.set(recalculate);
    }

    /// Advance one animation tick: invalidate and step any animation
    pub fn animation_frame(&mut self) {
        self.recalculate.set(true);
        if let Some(animation) = self.constraint.as_animation_mut() {
            animation.animation_frame();
        }
    }

    /// Replace this slot with an animation from the current constraint to `target`
    ///
    /// The current slot, cache included, becomes the animation's start point.
    /// If it is itself an unfinished animation it keeps running inside the new
    /// one, so the new animation starts from wherever the old one had got to.
    /// A finished animation is unwrapped to its target first, so nesting only
    /// grows with the number of animations actually in flight.
    pub fn begin_animation(
        &mut self,
        easing: Easing,
        total_ticks: u32,
        target: C,
        delay_ticks: u32,
    ) {
        let mut old = std::mem::take(self);
        let finished = old
            .constraint
            .as_animation_mut()
            .filter(|animation| animation.is_complete())
            .map(Animation::take_target);
        if let Some(finished) = finished {
            old = finished;
        }
        let animation = Animation::new(
            easing,
            total_ticks,
            delay_ticks,
            old,
            ConstraintSlot::new(target),
        );
        *self = ConstraintSlot::new(C::animating(animation));
    }

    /// The installed animation, complete or not
    pub fn animation(&self) -> Option<&Animation<C>> {
        self.constraint.as_animation()
    }

    /// Whether an animation is installed and still running
    pub fn is_animating(&self) -> bool {
        self.animation().is_some_and(|animation| !animation.is_complete())
    }
}

impl<C: AxisConstraint> Default for ConstraintSlot<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: AxisConstraint> From<C> for ConstraintSlot<C> {
    fn from(constraint: C) -> Self {
        Self::new(constraint)
    }
}
