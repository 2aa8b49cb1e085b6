//! Error types for trellis_layout

use thiserror::Error;

use crate::tree::ComponentId;

/// Errors raised while building, resolving or driving a component tree
///
/// None of these are meant to be recovered from: they signal a construction
/// order bug in the calling code and are propagated up to the host's draw or
/// event call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The component is not (yet) attached beneath a window
    #[error("no root ancestor found; has the component been added to a window yet?")]
    NoRootAncestor,

    /// The handle refers to a component that has been disposed
    #[error("component {0:?} no longer exists")]
    StaleComponent(ComponentId),

    /// A window-only operation was called on a regular component
    #[error("component {0:?} is not a window")]
    NotAWindow(ComponentId),

    /// Attaching would make a component its own ancestor
    #[error("adding {child:?} under {parent:?} would create a cycle")]
    WouldCycle {
        parent: ComponentId,
        child: ComponentId,
    },

    /// Windows are always tree roots
    #[error("window {0:?} cannot be added as a child")]
    WindowAsChild(ComponentId),
}

/// Result type for trellis_layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
