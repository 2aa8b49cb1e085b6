//! Per-component constraint bundle

use trellis_animation::Easing;
use trellis_core::Color;

use crate::constraint::{
    ColorConstraint, ConstraintSlot, HeightConstraint, ResolveCx, WidthConstraint, XConstraint,
    YConstraint,
};
use crate::error::Result;

/// One of the five constrained properties of a component
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Width,
    Height,
    Color,
}

impl Axis {
    /// Order in which an animation tick visits the axes
    pub const TICK_ORDER: [Axis; 5] = [Axis::Color, Axis::X, Axis::Y, Axis::Width, Axis::Height];
}

/// Target of an animation, tagged with its axis
#[derive(Debug)]
pub enum AnimationTarget {
    X(XConstraint),
    Y(YConstraint),
    Width(WidthConstraint),
    Height(HeightConstraint),
    Color(ColorConstraint),
}

impl AnimationTarget {
    pub fn axis(&self) -> Axis {
        match self {
            AnimationTarget::X(_) => Axis::X,
            AnimationTarget::Y(_) => Axis::Y,
            AnimationTarget::Width(_) => Axis::Width,
            AnimationTarget::Height(_) => Axis::Height,
            AnimationTarget::Color(_) => Axis::Color,
        }
    }
}

impl From<XConstraint> for AnimationTarget {
    fn from(constraint: XConstraint) -> Self {
        AnimationTarget::X(constraint)
    }
}

impl From<YConstraint> for AnimationTarget {
    fn from(constraint: YConstraint) -> Self {
        AnimationTarget::Y(constraint)
    }
}

impl From<WidthConstraint> for AnimationTarget {
    fn from(constraint: WidthConstraint) -> Self {
        AnimationTarget::Width(constraint)
    }
}

impl From<HeightConstraint> for AnimationTarget {
    fn from(constraint: HeightConstraint) -> Self {
        AnimationTarget::Height(constraint)
    }
}

impl From<ColorConstraint> for AnimationTarget {
    fn from(constraint: ColorConstraint) -> Self {
        AnimationTarget::Color(constraint)
    }
}

/// The five active constraints of one component
///
/// Defaults: zero pixels on every geometric axis, constant white color.
#[derive(Debug, Default)]
pub struct Constraints {
    x: ConstraintSlot<XConstraint>,
    y: ConstraintSlot<YConstraint>,
    width: ConstraintSlot<WidthConstraint>,
    height: ConstraintSlot<HeightConstraint>,
    color: ConstraintSlot<ColorConstraint>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    pub fn x(&self, cx: &ResolveCx<'_>) -> Result<f32> {
        self.x.resolve(cx)
    }

    pub fn y(&self, cx: &ResolveCx<'_>) -> Result<f32> {
        self.y.resolve(cx)
    }

    pub fn width(&self, cx: &ResolveCx<'_>) -> Result<f32> {
        self.width.resolve(cx)
    }

    pub fn height(&self, cx: &ResolveCx<'_>) -> Result<f32> {
        self.height.resolve(cx)
    }

    pub fn color(&self, cx: &ResolveCx<'_>) -> Result<Color> {
        self.color.resolve(cx)
    }

    // =========================================================================
    // Slots
    // =========================================================================

    pub fn x_slot(&self) -> &ConstraintSlot<XConstraint> {
        &self.x
    }

    pub fn y_slot(&self) -> &ConstraintSlot<YConstraint> {
        &self.y
    }

    pub fn width_slot(&self) -> &ConstraintSlot<WidthConstraint> {
        &self.width
    }

    pub fn height_slot(&self) -> &ConstraintSlot<HeightConstraint> {
        &self.height
    }

    pub fn color_slot(&self) -> &ConstraintSlot<ColorConstraint> {
        &self.color
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    pub fn set_x(&mut self, constraint: XConstraint) -> &mut Self {
        self.x = ConstraintSlot::new(constraint);
        self
    }

    pub fn set_y(&mut self, constraint: YConstraint) -> &mut Self {
        self.y = ConstraintSlot::new(constraint);
        self
    }

    pub fn set_width(&mut self, constraint: WidthConstraint) -> &mut Self {
        self.width = ConstraintSlot::new(constraint);
        self
    }

    pub fn set_height(&mut self, constraint: HeightConstraint) -> &mut Self {
        self.height = ConstraintSlot::new(constraint);
        self
    }

    pub fn set_color(&mut self, constraint: impl Into<ColorConstraint>) -> &mut Self {
        self.color = ConstraintSlot::new(constraint.into());
        self
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Start animating one axis toward `target` over `total_ticks` ticks
    ///
    /// The axis' current constraint becomes the animation's start point.
    /// Other axes are untouched.
    pub fn begin_animation(
        &mut self,
        easing: Easing,
        total_ticks: u32,
        target: impl Into<AnimationTarget>,
        delay_ticks: u32,
    ) -> &mut Self {
        match target.into() {
            AnimationTarget::X(target) => {
                self.x.begin_animation(easing, total_ticks, target, delay_ticks)
            }
            AnimationTarget::Y(target) => {
                self.y.begin_animation(easing, total_ticks, target, delay_ticks)
            }
            AnimationTarget::Width(target) => {
                self.width
                    .begin_animation(easing, total_ticks, target, delay_ticks)
            }
            AnimationTarget::Height(target) => {
                self.height
                    .begin_animation(easing, total_ticks, target, delay_ticks)
            }
            AnimationTarget::Color(target) => {
                self.color
                    .begin_animation(easing, total_ticks, target, delay_ticks)
            }
        }
        self
    }

    pub fn animate_x(
        &mut self,
        easing: Easing,
        total_ticks: u32,
        target: XConstraint,
        delay_ticks: u32,
    ) -> &mut Self {
        self.begin_animation(easing, total_ticks, target, delay_ticks)
    }

    pub fn animate_y(
        &mut self,
        easing: Easing,
        total_ticks: u32,
        target: YConstraint,
        delay_ticks: u32,
    ) -> &mut Self {
        self.begin_animation(easing, total_ticks, target, delay_ticks)
    }

    pub fn animate_width(
        &mut self,
        easing: Easing,
        total_ticks: u32,
        target: WidthConstraint,
        delay_ticks: u32,
    ) -> &mut Self {
        self.begin_animation(easing, total_ticks, target, delay_ticks)
    }

    pub fn animate_height(
        &mut self,
        easing: Easing,
        total_ticks: u32,
        target: HeightConstraint,
        delay_ticks: u32,
    ) -> &mut Self {
        self.begin_animation(easing, total_ticks, target, delay_ticks)
    }

    pub fn animate_color(
        &mut self,
        easing: Easing,
        total_ticks: u32,
        target: impl Into<ColorConstraint>,
        delay_ticks: u32,
    ) -> &mut Self {
        self.begin_animation(easing, total_ticks, target.into(), delay_ticks)
    }

    /// Advance every axis one tick (color, x, y, width, height)
    pub fn animation_frame(&mut self) {
        for axis in Axis::TICK_ORDER {
            match axis {
                Axis::Color => self.color.animation_frame(),
                Axis::X => self.x.animation_frame(),
                Axis::Y => self.y.animation_frame(),
                Axis::Width => self.width.animation_frame(),
                Axis::Height => self.height.animation_frame(),
            }
        }
    }

    /// Whether `axis` has an animation that has not completed
    pub fn is_axis_animating(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x.is_animating(),
            Axis::Y => self.y.is_animating(),
            Axis::Width => self.width.is_animating(),
            Axis::Height => self.height.is_animating(),
            Axis::Color => self.color.is_animating(),
        }
    }

    /// Whether any axis is still animating
    pub fn is_animating(&self) -> bool {
        Axis::TICK_ORDER
            .iter()
            .any(|&axis| self.is_axis_animating(axis))
    }
}
