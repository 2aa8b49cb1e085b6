//! Root windows and the per-frame draw protocol
//!
//! A window is a component that owns a [`RootState`]. The host pushes the
//! framebuffer size and cursor position into it, then calls
//! [`ComponentTree::draw_window`] once per display frame. Animation ticks run
//! at the window's own fixed rate, decoupled from the display rate:
//!
//! ```rust
//! use std::time::Duration;
//! use trellis_core::{ManualClock, RecordingContext};
//! use trellis_layout::prelude::*;
//!
//! let mut tree = ComponentTree::new();
//! let window = tree.create_window(WindowConfig::new(100));
//! let clock = ManualClock::new();
//! let mut ctx = RecordingContext::new();
//!
//! // The first frame only anchors the tick clock
//! assert_eq!(tree.draw_window(window, &clock, &mut ctx).unwrap(), 0);
//!
//! clock.advance(Duration::from_millis(35));
//! assert_eq!(tree.draw_window(window, &clock, &mut ctx).unwrap(), 3);
//! ```

use std::time::Duration;

use trellis_core::{Clock, DrawContext, Point, Size};

use crate::config::{sanitize_scale, WindowConfig};
use crate::effect::Effect;
use crate::element::ComponentKind;
use crate::error::{LayoutError, Result};
use crate::tree::{ComponentId, ComponentTree};

/// Converts wall-clock time into a whole number of fixed-rate ticks
#[derive(Clone, Debug)]
pub struct TickAccumulator {
    interval: Duration,
    anchor: Option<Duration>,
}

impl TickAccumulator {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_nanos(1)),
            anchor: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks due at `now`
    ///
    /// The first call anchors the accumulator and returns zero. Later calls
    /// consume whole intervals only; the remainder carries over.
    pub fn advance(&mut self, now: Duration) -> u64 {
        let Some(anchor) = self.anchor else {
            self.anchor = Some(now);
            return 0;
        };

        let elapsed = now.saturating_sub(anchor);
        let ticks = (elapsed.as_nanos() / self.interval.as_nanos()) as u64;
        let consumed = self.interval.as_nanos() * u128::from(ticks);
        self.anchor = Some(anchor + Duration::from_nanos(consumed as u64));
        ticks
    }

    pub fn is_anchored(&self) -> bool {
        self.anchor.is_some()
    }
}

/// State owned by a root window
#[derive(Clone, Debug)]
pub struct RootState {
    config: WindowConfig,
    /// Framebuffer size in physical pixels
    viewport: Size,
    scale_factor: f32,
    /// Last cursor position in physical pixels, top-left origin
    cursor: Point,
    ticks: TickAccumulator,
}

impl RootState {
    pub fn new(config: WindowConfig) -> Self {
        let config = config.sanitized();
        Self {
            viewport: config.size,
            scale_factor: config.scale_factor,
            cursor: Point::new(-1.0, -1.0),
            ticks: TickAccumulator::new(config.tick_interval()),
            config,
        }
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn animation_fps(&self) -> u32 {
        self.config.animation_fps
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Physical framebuffer size
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Viewport in logical pixels
    pub fn scaled_size(&self) -> Size {
        self.viewport.unscale(self.scale_factor)
    }

    /// Cursor in logical pixels
    pub fn scaled_cursor(&self) -> Point {
        Point::new(
            self.cursor.x / self.scale_factor,
            self.cursor.y / self.scale_factor,
        )
    }

    pub fn ticks(&self) -> &TickAccumulator {
        &self.ticks
    }
}

#[derive(Clone, Copy)]
enum EffectHook {
    BeforeDraw,
    BeforeChildren,
    AfterDraw,
}

impl ComponentTree {
    /// Create a root window
    pub fn create_window(&mut self, config: WindowConfig) -> ComponentId {
        let id = self.create(ComponentKind::Container);
        let state = RootState::new(config);
        tracing::debug!(
            "created window {:?} at {} animation fps",
            id,
            state.animation_fps()
        );
        self.roots.insert(id, state);
        id
    }

    pub fn root_state(&self, root: ComponentId) -> Result<&RootState> {
        self.node(root)?;
        self.roots.get(root).ok_or(LayoutError::NotAWindow(root))
    }

    fn root_state_mut(&mut self, root: ComponentId) -> Result<&mut RootState> {
        self.node(root)?;
        self.roots.get_mut(root).ok_or(LayoutError::NotAWindow(root))
    }

    /// Push the framebuffer size (physical pixels) and scale factor
    pub fn set_viewport(
        &mut self,
        root: ComponentId,
        width: f32,
        height: f32,
        scale_factor: f32,
    ) -> Result<()> {
        let state = self.root_state_mut(root)?;
        state.viewport = Size::new(width, height);
        state.scale_factor = sanitize_scale(scale_factor);
        Ok(())
    }

    /// Push the cursor position in physical pixels, top-left origin
    pub fn set_cursor(&mut self, root: ComponentId, x: f32, y: f32) -> Result<()> {
        self.root_state_mut(root)?.cursor = Point::new(x, y);
        Ok(())
    }

    /// Draw one display frame of `root`
    ///
    /// Resets per-frame render state, runs the animation ticks due since the
    /// last call, then draws the whole tree. Returns the number of ticks run.
    pub fn draw_window(
        &mut self,
        root: ComponentId,
        clock: &dyn Clock,
        ctx: &mut dyn DrawContext,
    ) -> Result<u64> {
        let state = self.root_state_mut(root)?;
        ctx.clear_stencil();

        let fps = state.config.animation_fps;
        let ticks = state.ticks.advance(clock.now());

        if ticks > u64::from(fps) {
            tracing::warn!(
                "window {:?} is {} animation ticks behind, catching up",
                root,
                ticks
            );
        } else if ticks > 0 {
            tracing::trace!("running {} animation ticks", ticks);
        }

        for _ in 0..ticks {
            self.animation_frame(root)?;
        }

        self.draw_component(root, ctx)?;
        Ok(ticks)
    }

    fn draw_component(&mut self, id: ComponentId, ctx: &mut dyn DrawContext) -> Result<()> {
        // Held outside the node so the closing hooks still run if a handler
        // disposes the component mid-draw
        let effects = std::mem::take(&mut self.node_mut(id)?.effects);
        let result = self.draw_with_effects(id, &effects, ctx);

        if let Some(node) = self.nodes.get_mut(id) {
            let added = std::mem::replace(&mut node.effects, effects);
            node.effects.extend(added);
        }
        result
    }

    fn draw_with_effects(
        &mut self,
        id: ComponentId,
        effects: &[Box<dyn Effect>],
        ctx: &mut dyn DrawContext,
    ) -> Result<()> {
        self.run_effects(id, effects, EffectHook::BeforeDraw, ctx)?;
        let drawn = self.draw_contents(id, effects, ctx);
        let unwound = self.run_effects(id, effects, EffectHook::AfterDraw, ctx);
        drawn.and(unwound)
    }

    fn draw_contents(
        &mut self,
        id: ComponentId,
        effects: &[Box<dyn Effect>],
        ctx: &mut dyn DrawContext,
    ) -> Result<()> {
        let bounds = self.bounds(id)?;
        let color = self.color(id)?;
        self.node(id)?.kind.paint(bounds, color, ctx);

        self.run_effects(id, effects, EffectHook::BeforeChildren, ctx)?;

        // Handlers fired below may restructure the tree
        let children = self.children(id)?.to_vec();
        for child in children {
            if self.contains(child) {
                self.draw_component(child, ctx)?;
            }
        }

        self.update_hover(id)
    }

    fn run_effects(
        &self,
        id: ComponentId,
        effects: &[Box<dyn Effect>],
        hook: EffectHook,
        ctx: &mut dyn DrawContext,
    ) -> Result<()> {
        for effect in effects {
            match hook {
                EffectHook::BeforeDraw => effect.before_draw(self, id, ctx)?,
                EffectHook::BeforeChildren => effect.before_children_draw(self, id, ctx)?,
                EffectHook::AfterDraw => effect.after_draw(self, id, ctx)?,
            }
        }
        Ok(())
    }
}
