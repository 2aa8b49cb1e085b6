//! Mouse event dispatch
//!
//! Press, release and scroll cascade pre-order through the whole window
//! subtree. Every component re-runs its own hit test, so overlapping siblings
//! and their ancestors all see the event. Enter and leave are edge-triggered
//! during draw.

use crate::error::Result;
use crate::event_handler::{EventHandlers, MouseButton};
use crate::tree::{ComponentId, ComponentTree};

impl ComponentTree {
    /// Dispatch a mouse press to every hovered component under `root`
    pub fn mouse_click(&mut self, root: ComponentId, button: MouseButton) -> Result<()> {
        tracing::trace!("mouse click {:?} in {:?}", button, root);
        self.root_state(root)?;

        for id in self.descendants(root)? {
            if !self.has_handler(id, |h| h.click.is_some()) || !self.is_hovered(id)? {
                continue;
            }
            self.with_handler(id, |h| &mut h.click, |handler, tree| {
                handler(tree, id, button)
            })?;
        }
        Ok(())
    }

    /// Dispatch a mouse release to every hovered component under `root`
    pub fn mouse_release(&mut self, root: ComponentId) -> Result<()> {
        tracing::trace!("mouse release in {:?}", root);
        self.root_state(root)?;

        for id in self.descendants(root)? {
            if !self.has_handler(id, |h| h.release.is_some()) || !self.is_hovered(id)? {
                continue;
            }
            self.with_handler(id, |h| &mut h.release, |handler, tree| handler(tree, id))?;
        }
        Ok(())
    }

    /// Dispatch a signed wheel delta to every hovered component under `root`
    pub fn mouse_scroll(&mut self, root: ComponentId, delta: i32) -> Result<()> {
        tracing::trace!("mouse scroll {} in {:?}", delta, root);
        self.root_state(root)?;

        for id in self.descendants(root)? {
            if !self.has_handler(id, |h| h.scroll.is_some()) || !self.is_hovered(id)? {
                continue;
            }
            self.with_handler(id, |h| &mut h.scroll, |handler, tree| {
                handler(tree, id, delta)
            })?;
        }
        Ok(())
    }

    /// Compare the current hit test with the last one and fire enter/leave
    pub(crate) fn update_hover(&mut self, id: ComponentId) -> Result<()> {
        if !self.contains(id) {
            return Ok(());
        }

        let hovered = self.is_hovered(id)?;
        let node = self.node_mut(id)?;
        if node.hovered == hovered {
            return Ok(());
        }
        node.hovered = hovered;

        if hovered {
            tracing::trace!("mouse enter {:?}", id);
            self.with_handler(id, |h| &mut h.enter, |handler, tree| handler(tree, id))
        } else {
            tracing::trace!("mouse leave {:?}", id);
            self.with_handler(id, |h| &mut h.leave, |handler, tree| handler(tree, id))
        }
    }

    /// False for components removed by an earlier handler in the same cascade
    fn has_handler(&self, id: ComponentId, check: impl Fn(&EventHandlers) -> bool) -> bool {
        self.nodes.get(id).is_some_and(|node| check(&node.handlers))
    }

    /// Run the handler in one slot with the tree mutably available
    ///
    /// The handler is taken out of its slot for the call. It is put back
    /// unless the call bound a replacement or removed the component.
    fn with_handler<H, S>(
        &mut self,
        id: ComponentId,
        slot: S,
        call: impl FnOnce(&mut H, &mut ComponentTree) -> Result<()>,
    ) -> Result<()>
    where
        S: Fn(&mut EventHandlers) -> &mut Option<H>,
    {
        let Some(mut handler) = slot(&mut self.node_mut(id)?.handlers).take() else {
            return Ok(());
        };

        let result = call(&mut handler, self);

        if let Some(node) = self.nodes.get_mut(id) {
            let current = slot(&mut node.handlers);
            if current.is_none() {
                *current = Some(handler);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::config::WindowConfig;
    use crate::constraint::{HeightConstraint, WidthConstraint, XConstraint};
    use crate::element::ComponentKind;
    use crate::error::LayoutError;
    use crate::event_handler::MouseButton;
    use crate::tree::{ComponentId, ComponentTree};
    use trellis_core::{ManualClock, RecordingContext};

    fn sized(tree: &mut ComponentTree, parent: ComponentId, x: f32, width: f32) -> ComponentId {
        let id = tree.create(ComponentKind::Block);
        tree.add_child(parent, id).unwrap();
        tree.constrain(id, |c| {
            c.set_x(XConstraint::pixels(x))
                .set_width(WidthConstraint::pixels(width))
                .set_height(HeightConstraint::fill());
        })
        .unwrap();
        id
    }

    #[test]
    fn test_click_reaches_hovered_components_only() {
        let mut tree = ComponentTree::new();
        let root = tree.create_window(WindowConfig::default().with_size(100.0, 100.0));
        let left = sized(&mut tree, root, 0.0, 50.0);
        let right = sized(&mut tree, root, 50.0, 50.0);

        let log = Rc::new(RefCell::new(Vec::new()));
        for id in [root, left, right] {
            let log = log.clone();
            tree.component(id).unwrap().on_mouse_click(move |_, id, button| {
                log.borrow_mut().push((id, button));
                Ok(())
            });
        }

        tree.set_cursor(root, 20.0, 20.0).unwrap();
        tree.mouse_click(root, MouseButton::Right).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![(root, MouseButton::Right), (left, MouseButton::Right)]
        );
    }

    #[test]
    fn test_handler_can_rebind_itself() {
        let mut tree = ComponentTree::new();
        let root = tree.create_window(WindowConfig::default().with_size(100.0, 100.0));
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let (a, b) = (first.clone(), second.clone());
        tree.component(root).unwrap().on_mouse_release(move |tree, id| {
            a.set(a.get() + 1);
            let b = b.clone();
            tree.component(id)?.on_mouse_release(move |_, _| {
                b.set(b.get() + 1);
                Ok(())
            });
            Ok(())
        });

        tree.set_cursor(root, 10.0, 10.0).unwrap();
        tree.mouse_release(root).unwrap();
        tree.mouse_release(root).unwrap();
        tree.mouse_release(root).unwrap();

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn test_handler_keeps_binding_after_call() {
        let mut tree = ComponentTree::new();
        let root = tree.create_window(WindowConfig::default().with_size(100.0, 100.0));
        let total = Rc::new(Cell::new(0));

        let counter = total.clone();
        tree.component(root).unwrap().on_mouse_scroll(move |_, _, delta| {
            counter.set(counter.get() + delta);
            Ok(())
        });

        tree.set_cursor(root, 10.0, 10.0).unwrap();
        tree.mouse_scroll(root, 3).unwrap();
        tree.mouse_scroll(root, -1).unwrap();
        assert_eq!(total.get(), 2);
    }

    #[test]
    fn test_handler_errors_propagate() {
        let mut tree = ComponentTree::new();
        let root = tree.create_window(WindowConfig::default().with_size(100.0, 100.0));
        let orphan = tree.create(ComponentKind::Block);

        tree.component(root)
            .unwrap()
            .on_mouse_click(move |tree, _, _| tree.find_root(orphan).map(|_| ()));

        tree.set_cursor(root, 10.0, 10.0).unwrap();
        assert_eq!(
            tree.mouse_click(root, MouseButton::Left),
            Err(LayoutError::NoRootAncestor)
        );
        // Still bound after failing
        assert!(tree.node(root).unwrap().handlers().has_click());
    }

    #[test]
    fn test_handler_may_dispose_later_component() {
        let mut tree = ComponentTree::new();
        let root = tree.create_window(WindowConfig::default().with_size(100.0, 100.0));
        let victim = sized(&mut tree, root, 0.0, 100.0);
        let hits = Rc::new(Cell::new(0));

        tree.component(root)
            .unwrap()
            .on_mouse_click(move |tree, _, _| tree.dispose(victim));
        let counter = hits.clone();
        tree.component(victim).unwrap().on_mouse_click(move |_, _, _| {
            counter.set(counter.get() + 1);
            Ok(())
        });

        tree.set_cursor(root, 10.0, 10.0).unwrap();
        tree.mouse_click(root, MouseButton::Left).unwrap();
        assert_eq!(hits.get(), 0);
        assert!(!tree.contains(victim));
    }

    #[test]
    fn test_enter_and_leave_fire_on_edges() {
        let mut tree = ComponentTree::new();
        let root = tree.create_window(WindowConfig::default().with_size(100.0, 100.0));
        let panel = sized(&mut tree, root, 0.0, 50.0);
        let events = Rc::new(RefCell::new(Vec::new()));

        let (enter, leave) = (events.clone(), events.clone());
        tree.component(panel)
            .unwrap()
            .on_mouse_enter(move |_, _| {
                enter.borrow_mut().push("enter");
                Ok(())
            })
            .on_mouse_leave(move |_, _| {
                leave.borrow_mut().push("leave");
                Ok(())
            });

        let clock = ManualClock::new();
        let mut ctx = RecordingContext::new();

        tree.set_cursor(root, 10.0, 10.0).unwrap();
        tree.draw_window(root, &clock, &mut ctx).unwrap();
        tree.draw_window(root, &clock, &mut ctx).unwrap();
        tree.set_cursor(root, 80.0, 10.0).unwrap();
        tree.draw_window(root, &clock, &mut ctx).unwrap();
        tree.draw_window(root, &clock, &mut ctx).unwrap();

        assert_eq!(*events.borrow(), vec!["enter", "leave"]);
    }
}
