pub mod keyboard;
pub mod pointer;
pub mod session;

pub use keyboard::wire_handle_keys;
pub use pointer::{wire_handle_press, wire_inputs, wire_markers, wire_track_click};
pub use session::{DragSession, ListenerGuard};
