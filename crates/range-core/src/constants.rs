// Shared defaults and user-facing strings for both slider modes.

// Continuous domain used when a mount point does not override it
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 1.0;
pub const DEFAULT_MIN_GAP: f64 = 3.0; // minimum distance between the two handles

// Remote value endpoints
pub const RANGE_VALUES_URL: &str = "https://demo3042680.mockable.io/range-values";
pub const FIXED_RANGE_VALUES_URL: &str = "https://demo3042680.mockable.io/range-values-fixed";

// Formatting
pub const CURRENCY_SUFFIX: &str = "€";
pub const DECIMAL_PLACES: usize = 2;
pub const PLACEHOLDER_VALUE: &str = "-";

// Layout / error chrome
pub const LOADING_TEXT: &str = "Loading...";
pub const RANGE_VALUES_ERROR: &str = "Error loading range values. Please try again later.";
pub const FIXED_RANGE_VALUES_ERROR: &str =
    "Error loading fixed range values. Please try again later.";
pub const INVALID_RANGE_VALUES_ERROR: &str = "Invalid range values received from the server.";
