//! What a component paints
//!
//! The framework ships a handful of primitive shapes. Widget libraries paint
//! anything else through [`Paint`] and [`ComponentKind::Custom`].

use std::fmt;

use trellis_core::{Color, DrawContext, Rect};

/// Custom painting for widget skins
pub trait Paint {
    /// Paint into `bounds` with the component's resolved `color`
    ///
    /// Called even when `color` is fully transparent; skipping is up to the
    /// implementation.
    fn paint(&self, bounds: Rect, color: Color, ctx: &mut dyn DrawContext);
}

/// The visual kind of a component
#[derive(Default)]
pub enum ComponentKind {
    /// Paints nothing; only lays out and draws its children
    #[default]
    Container,
    /// Filled rectangle
    Block,
    /// Filled circle inscribed in the bounds' width, centered in the bounds
    Circle,
    /// Filled rectangle with rounded corners
    RoundedRectangle { radius: f32 },
    /// Painted by a widget library
    Custom(Box<dyn Paint>),
}

impl ComponentKind {
    pub fn custom(paint: impl Paint + 'static) -> Self {
        ComponentKind::Custom(Box::new(paint))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Container => "container",
            ComponentKind::Block => "block",
            ComponentKind::Circle => "circle",
            ComponentKind::RoundedRectangle { .. } => "rounded_rectangle",
            ComponentKind::Custom(_) => "custom",
        }
    }

    /// Paint this kind. Built-in shapes skip fully transparent colors.
    pub(crate) fn paint(&self, bounds: Rect, color: Color, ctx: &mut dyn DrawContext) {
        if let ComponentKind::Custom(paint) = self {
            paint.paint(bounds, color, ctx);
            return;
        }

        if color.is_transparent() {
            return;
        }

        match self {
            ComponentKind::Container | ComponentKind::Custom(_) => {}
            ComponentKind::Block => ctx.fill_rect(bounds, color),
            ComponentKind::Circle => ctx.fill_circle(bounds.center(), bounds.width() / 2.0, color),
            ComponentKind::RoundedRectangle { radius } => {
                ctx.fill_rounded_rect(bounds, *radius, color)
            }
        }
    }
}

impl fmt::Debug for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::RoundedRectangle { radius } => f
                .debug_struct("RoundedRectangle")
                .field("radius", radius)
                .finish(),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{DrawCommand, Point, RecordingContext};

    struct Outline;

    impl Paint for Outline {
        fn paint(&self, bounds: Rect, _color: Color, ctx: &mut dyn DrawContext) {
            ctx.push_clip(bounds);
            ctx.pop_clip();
        }
    }

    #[test]
    fn test_default_is_container() {
        assert!(matches!(ComponentKind::default(), ComponentKind::Container));
        assert_eq!(ComponentKind::default().name(), "container");
    }

    #[test]
    fn test_shapes_emit_commands() {
        let bounds = Rect::new(0.0, 0.0, 20.0, 10.0);
        let mut ctx = RecordingContext::new();

        ComponentKind::Block.paint(bounds, Color::RED, &mut ctx);
        ComponentKind::Circle.paint(bounds, Color::RED, &mut ctx);
        ComponentKind::RoundedRectangle { radius: 3.0 }.paint(bounds, Color::RED, &mut ctx);
        ComponentKind::Container.paint(bounds, Color::RED, &mut ctx);

        assert_eq!(
            ctx.commands(),
            &[
                DrawCommand::FillRect {
                    rect: bounds,
                    color: Color::RED
                },
                DrawCommand::FillCircle {
                    center: Point::new(10.0, 5.0),
                    radius: 10.0,
                    color: Color::RED
                },
                DrawCommand::FillRoundedRect {
                    rect: bounds,
                    radius: 3.0,
                    color: Color::RED
                },
            ]
        );
    }

    #[test]
    fn test_transparent_shapes_are_skipped() {
        let mut ctx = RecordingContext::new();
        ComponentKind::Block.paint(Rect::new(0.0, 0.0, 5.0, 5.0), Color::TRANSPARENT, &mut ctx);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_custom_paints_even_when_transparent() {
        let mut ctx = RecordingContext::new();
        ComponentKind::custom(Outline).paint(Rect::ZERO, Color::TRANSPARENT, &mut ctx);
        assert_eq!(ctx.commands().len(), 2);
    }
}
