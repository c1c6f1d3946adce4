// DOM class names shared by the builder and the painter.
pub const CLASS_SLIDER: &str = "range-slider";
pub const CLASS_FIXED: &str = "fixed-range-slider";
pub const CLASS_INPUTS: &str = "range-inputs";
pub const CLASS_INPUT: &str = "range-input";
pub const CLASS_TRACK: &str = "range-track";
pub const CLASS_HIGHLIGHT: &str = "range-highlight";
pub const CLASS_HANDLE: &str = "range-handle";
pub const CLASS_MARKERS: &str = "markers-container";
pub const CLASS_MARKER: &str = "range-marker";
pub const CLASS_MARKER_CIRCLE: &str = "marker-circle";
pub const CLASS_SELECTED: &str = "selected";
pub const CLASS_LABELS: &str = "range-labels";
pub const CLASS_DRAGGING: &str = "dragging";

// Mount points are any element carrying this attribute.
pub const MOUNT_SELECTOR: &str = "[data-range]";

// Document-level events owned by a drag session
pub const DRAG_MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
pub const DRAG_END_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];
