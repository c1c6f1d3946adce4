//! Drag session: the `DragState` machine plus the document-level listeners
//! that exist only while a handle is held.

use std::rc::Rc;

use gloo::events::EventListener;
use range_core::{DragState, Handle};
use web_sys as web;

use crate::constants::{DRAG_END_EVENTS, DRAG_MOVE_EVENTS};

/// Move/release listeners registered for one gesture.
///
/// Each `EventListener` removes itself from the target when dropped, so
/// dropping the guard is the only deregistration path.
pub struct ListenerGuard {
    listeners: Vec<EventListener>,
}

impl ListenerGuard {
    pub fn attach(
        target: &web::EventTarget,
        on_move: impl Fn(&web::Event) + 'static,
        on_end: impl Fn(&web::Event) + 'static,
    ) -> Self {
        let on_move: Rc<dyn Fn(&web::Event)> = Rc::new(on_move);
        let on_end: Rc<dyn Fn(&web::Event)> = Rc::new(on_end);
        let mut listeners = Vec::with_capacity(DRAG_MOVE_EVENTS.len() + DRAG_END_EVENTS.len());
        for event in DRAG_MOVE_EVENTS {
            let f = on_move.clone();
            listeners.push(EventListener::new(target, event, move |ev| f(ev)));
        }
        for event in DRAG_END_EVENTS {
            let f = on_end.clone();
            listeners.push(EventListener::new(target, event, move |ev| f(ev)));
        }
        Self { listeners }
    }

    pub fn count(&self) -> usize {
        self.listeners.len()
    }
}

/// At most one open session per slider.
#[derive(Default)]
pub struct DragSession {
    state: DragState,
    guard: Option<ListenerGuard>,
}

impl DragSession {
    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Enter `Dragging(handle)`, taking ownership of the listeners. A session
    /// left open by a lost release is closed first.
    pub fn begin(&mut self, handle: Handle, guard: ListenerGuard) {
        if let Some(stale) = self.state.press(handle) {
            log::warn!("[drag] {} session still open, closing it", stale);
        }
        log::debug!("[drag] begin {} ({} listeners)", handle, guard.count());
        self.guard = Some(guard);
    }

    /// Back to `Idle`; the listeners are removed here.
    pub fn end(&mut self) -> Option<Handle> {
        self.guard = None;
        let handle = self.state.release();
        if let Some(h) = handle {
            log::debug!("[drag] end {}", h);
        }
        handle
    }
}
