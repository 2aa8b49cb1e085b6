//! Animation as constraint substitution
//!
//! An [`Animation`] stands in for an axis constraint while it blends from the
//! constraint that was active when it started ("old") to a target ("new").
//! Both ends keep resolving live, so animating toward `center()` tracks the
//! parent even if the parent moves mid-animation.

use trellis_animation::{Easing, Interpolate};

use super::{AxisConstraint, ConstraintSlot, ResolveCx};
use crate::error::Result;

/// A tick-driven blend between two constraints of the same axis
#[derive(Debug)]
pub struct Animation<C: AxisConstraint> {
    easing: Easing,
    total_ticks: u32,
    delay_ticks: u32,
    elapsed_ticks: u32,
    old: ConstraintSlot<C>,
    new: ConstraintSlot<C>,
}

impl<C: AxisConstraint> Animation<C> {
    pub fn new(
        easing: Easing,
        total_ticks: u32,
        delay_ticks: u32,
        old: ConstraintSlot<C>,
        new: ConstraintSlot<C>,
    ) -> Self {
        Self {
            easing,
            total_ticks,
            delay_ticks,
            elapsed_ticks: 0,
            old,
            new,
        }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    pub fn delay_ticks(&self) -> u32 {
        self.delay_ticks
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    pub fn old(&self) -> &ConstraintSlot<C> {
        &self.old
    }

    /// The target constraint
    pub fn new_constraint(&self) -> &ConstraintSlot<C> {
        &self.new
    }

    /// Move the target slot out, leaving a default in its place
    pub(super) fn take_target(&mut self) -> ConstraintSlot<C> {
        std::mem::take(&mut self.new)
    }

    /// True once the ticks past the delay reach the duration
    pub fn is_complete(&self) -> bool {
        i64::from(self.elapsed_ticks) - i64::from(self.delay_ticks) >= i64::from(self.total_ticks)
    }

    /// Linear progress in `[0, 1]`, before easing
    pub fn progress(&self) -> f32 {
        if self.total_ticks == 0 {
            return 1.0;
        }
        let active = self.elapsed_ticks.saturating_sub(self.delay_ticks);
        (active as f32 / self.total_ticks as f32).min(1.0)
    }

    /// Eased progress
    pub fn percent_complete(&self) -> f32 {
        self.easing.apply(self.progress())
    }

    /// Advance one tick, then tick both ends
    pub fn animation_frame(&mut self) {
        if !self.is_complete() {
            self.elapsed_ticks += 1;
        }
        self.old.animation_frame();
        self.new.animation_frame();
    }

    pub fn resolve(&self, cx: &ResolveCx<'_>) -> Result<C::Value> {
        let start = self.old.resolve(cx)?;
        let end = self.new.resolve(cx)?;
        Ok(start.lerp(&end, self.percent_complete()))
    }
}
