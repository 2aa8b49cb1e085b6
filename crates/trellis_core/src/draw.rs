//! Rendering backend contract
//!
//! Trellis never rasterizes anything itself. Components and effects describe
//! what they want through [`DrawContext`]; the host's backend turns that into
//! GPU work. [`RecordingContext`] captures the calls as [`DrawCommand`]s, which
//! is what tests (and deferred backends) use.
//!
//! All coordinates are logical pixels. Backends multiply by the window's scale
//! factor when they need framebuffer coordinates.

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Rendering API used by components and effects
pub trait DrawContext {
    // ─────────────────────────────────────────────────────────────────────────
    // Per-frame state
    // ─────────────────────────────────────────────────────────────────────────

    /// Clear the stencil buffer at the start of a window draw
    fn clear_stencil(&mut self);

    // ─────────────────────────────────────────────────────────────────────────
    // Clipping
    // ─────────────────────────────────────────────────────────────────────────

    /// Restrict drawing to `rect` until the matching [`pop_clip`](Self::pop_clip)
    fn push_clip(&mut self, rect: Rect);

    /// Remove the most recent clip
    fn pop_clip(&mut self);

    // ─────────────────────────────────────────────────────────────────────────
    // Stencil masking
    // ─────────────────────────────────────────────────────────────────────────

    /// Start writing subsequent fills into the stencil mask
    fn begin_stencil_mask(&mut self);

    /// Stop writing the mask; subsequent fills only land inside it
    fn use_stencil_mask(&mut self);

    /// Disable stencil testing
    fn end_stencil_mask(&mut self);

    // ─────────────────────────────────────────────────────────────────────────
    // Shapes
    // ─────────────────────────────────────────────────────────────────────────

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
}

/// A recorded [`DrawContext`] call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearStencil,
    PushClip(Rect),
    PopClip,
    BeginStencilMask,
    UseStencilMask,
    EndStencilMask,
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillRoundedRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
}

/// A [`DrawContext`] that records every call in order
#[derive(Clone, Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of clips currently pushed
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Clear all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_depth = 0;
    }
}

impl DrawContext for RecordingContext {
    fn clear_stencil(&mut self) {
        self.commands.push(DrawCommand::ClearStencil);
    }

    fn push_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushClip(rect));
        self.clip_depth += 1;
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
        self.clip_depth = self.clip_depth.saturating_sub(1);
    }

    fn begin_stencil_mask(&mut self) {
        self.commands.push(DrawCommand::BeginStencilMask);
    }

    fn use_stencil_mask(&mut self) {
        self.commands.push(DrawCommand::UseStencilMask);
    }

    fn end_stencil_mask(&mut self) {
        self.commands.push(DrawCommand::EndStencilMask);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillRoundedRect {
            rect,
            radius,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }
}
