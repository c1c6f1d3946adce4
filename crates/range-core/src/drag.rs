//! Drag gesture state: `Idle` or `Dragging(handle)`.
//!
//! This is the platform-free half of a drag session. The frontend pairs it
//! with the global listener registration so both begin and end together.

use crate::control::RangeControl;
use crate::handle::Handle;
use crate::mapper::TrackRect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Handle),
}

impl DragState {
    /// Press on a handle. Returns the handle of a session that was still
    /// open, which the caller must close first.
    pub fn press(&mut self, handle: Handle) -> Option<Handle> {
        let previous = self.active();
        *self = DragState::Dragging(handle);
        previous
    }

    /// Pointer released; returns the handle that was being dragged.
    pub fn release(&mut self) -> Option<Handle> {
        let previous = self.active();
        *self = DragState::Idle;
        previous
    }

    #[inline]
    pub fn active(&self) -> Option<Handle> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging(h) => Some(h),
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// Forward a move to the controller if a drag is in progress.
    pub fn dispatch_move<C: RangeControl + ?Sized>(
        &self,
        control: &mut C,
        client_x: f64,
        rect: TrackRect,
    ) -> bool {
        match *self {
            DragState::Idle => false,
            DragState::Dragging(handle) => control.on_drag(client_x, rect, handle),
        }
    }
}
