//! Event handler storage for components
//!
//! Every component holds at most one handler per event kind. Handlers get
//! mutable access to the whole tree, so a click handler can start animations
//! on other components or rebind handlers, including its own.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use trellis_layout::prelude::*;
//!
//! let mut tree = ComponentTree::new();
//! let button = tree.create(ComponentKind::Block);
//! let clicks = Rc::new(Cell::new(0));
//!
//! let counter = clicks.clone();
//! tree.component(button)
//!     .unwrap()
//!     .on_mouse_click(move |_tree, _id, _button| {
//!         counter.set(counter.get() + 1);
//!         Ok(())
//!     });
//! ```

use std::fmt;

use crate::error::Result;
use crate::tree::{ComponentId, ComponentTree};

/// Mouse button identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl MouseButton {
    /// Map a host button index (0 = left, 1 = right, 2 = middle, ...)
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => MouseButton::Left,
            1 => MouseButton::Right,
            2 => MouseButton::Middle,
            3 => MouseButton::Back,
            4 => MouseButton::Forward,
            other => MouseButton::Other(other),
        }
    }
}

/// Called on mouse press while the component is hovered
pub type ClickHandler = Box<dyn FnMut(&mut ComponentTree, ComponentId, MouseButton) -> Result<()>>;

/// Called for release, enter and leave
pub type NotifyHandler = Box<dyn FnMut(&mut ComponentTree, ComponentId) -> Result<()>>;

/// Called on wheel movement while hovered; the delta is signed
pub type ScrollHandler = Box<dyn FnMut(&mut ComponentTree, ComponentId, i32) -> Result<()>>;

/// Handlers registered on one component
#[derive(Default)]
pub struct EventHandlers {
    pub(crate) click: Option<ClickHandler>,
    pub(crate) release: Option<NotifyHandler>,
    pub(crate) enter: Option<NotifyHandler>,
    pub(crate) leave: Option<NotifyHandler>,
    pub(crate) scroll: Option<ScrollHandler>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_click(&self) -> bool {
        self.click.is_some()
    }

    pub fn has_release(&self) -> bool {
        self.release.is_some()
    }

    pub fn has_enter(&self) -> bool {
        self.enter.is_some()
    }

    pub fn has_leave(&self) -> bool {
        self.leave.is_some()
    }

    pub fn has_scroll(&self) -> bool {
        self.scroll.is_some()
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("click", &self.has_click())
            .field("release", &self.has_release())
            .field("enter", &self.has_enter())
            .field("leave", &self.has_leave())
            .field("scroll", &self.has_scroll())
            .finish()
    }
}
