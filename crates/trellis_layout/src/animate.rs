//! Seconds-based animation builder
//!
//! Animations are stored in ticks. This builder converts durations given in
//! seconds using the enclosing window's animation rate, so the same call
//! takes the same wall time on any window.

use trellis_animation::Easing;

use crate::constraint::{
    ColorConstraint, HeightConstraint, WidthConstraint, XConstraint, YConstraint,
};
use crate::constraints::Constraints;
use crate::error::Result;
use crate::tree::{ComponentId, ComponentTree};

/// Starts animations on one component
pub struct AnimationBuilder<'a> {
    constraints: &'a mut Constraints,
    animation_fps: u32,
}

impl<'a> AnimationBuilder<'a> {
    pub fn new(constraints: &'a mut Constraints, animation_fps: u32) -> Self {
        Self {
            constraints,
            animation_fps,
        }
    }

    /// Ticks covering `seconds`, rounded to nearest; negative counts as zero
    pub fn ticks(&self, seconds: f32) -> u32 {
        (seconds * self.animation_fps as f32).round().max(0.0) as u32
    }

    pub fn set_x_animation(
        &mut self,
        easing: Easing,
        seconds: f32,
        target: XConstraint,
    ) -> &mut Self {
        self.set_x_animation_delayed(easing, seconds, target, 0.0)
    }

    pub fn set_x_animation_delayed(
        &mut self,
        easing: Easing,
        seconds: f32,
        target: XConstraint,
        delay: f32,
    ) -> &mut Self {
        let (total, delay) = (self.ticks(seconds), self.ticks(delay));
        self.constraints.animate_x(easing, total, target, delay);
        self
    }

    pub fn set_y_animation(
        &mut self,
        easing: Easing,
        seconds: f32,
        target: YConstraint,
    ) -> &mut Self {
        self.set_y_animation_delayed(easing, seconds, target, 0.0)
    }

    pub fn set_y_animation_delayed(
        &mut self,
        easing: Easing,
        seconds: f32,
        target: YConstraint,
        delay: f32,
    ) -> &mut Self {
        let (total, delay) = (self.ticks(seconds), self.ticks(delay));
        self.constraints.animate_y(easing, total, target, delay);
        self
    }

    pub fn set_width_animation(
        &mut self,
        easing: Easing,
        seconds: f32,
        target: WidthConstraint,
    ) -> &mut Self {
        self.set_width_animation_delayed(easing, seconds, target, 0.0)
    }

    pub fn set_width_animation_delayed(
        &mut self,
        easing: Easing,
        seconds: f32,
        target: WidthConstraint,
        delay: f32,
    ) -> &mut Self {
        let (total, delay) = (self.ticks(seconds), self.ticks(delay));
        self.constraints.animate_width(easing, total, target, delay);
        self
    }

    pub fn set_height_animation(
        &mut self,
        easing: Easing,
        seconds: f32,
        target: HeightConstraint,
    ) -> &mut Self {
        self.set_height_animation_delayed(easing, seconds, target, 0.0)
    }

    pub fn set_height_animation_delayed(
        &mut self,
        easing: Easing,
        seconds: f32,
        target: HeightConstraint,
        delay: f32,
    ) -> &mut Self {
        let (total, delay) = (self.ticks(seconds), self.ticks(delay));
        self.constraints.animate_height(easing, total, target, delay);
        self
    }

    pub fn set_color_animation(
        &mut self,
        easing: Easing,
        seconds: f32,
        target: impl Into<ColorConstraint>,
    ) -> &mut Self {
        self.set_color_animation_delayed(easing, seconds, target, 0.0)
    }

    pub fn set_color_animation_delayed(
        &mut self,
        easing: Easing,
        seconds: f32,
        target: impl Into<ColorConstraint>,
        delay: f32,
    ) -> &mut Self {
        let (total, delay) = (self.ticks(seconds), self.ticks(delay));
        self.constraints.animate_color(easing, total, target, delay);
        self
    }
}

impl ComponentTree {
    /// Start animations on `id`; it must already be under a window
    pub fn animate(
        &mut self,
        id: ComponentId,
        build: impl FnOnce(&mut AnimationBuilder<'_>),
    ) -> Result<()> {
        let root = self.find_root(id)?;
        let fps = self.root_state(root)?.animation_fps();
        let mut builder = AnimationBuilder::new(&mut self.node_mut(id)?.constraints, fps);
        build(&mut builder);
        Ok(())
    }
}
