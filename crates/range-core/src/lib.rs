pub mod constants;
pub mod continuous;
pub mod control;
pub mod drag;
pub mod error;
pub mod fixed;
pub mod format;
pub mod handle;
pub mod keys;
pub mod mapper;
pub mod payload;
pub mod view;

pub use constants::*;
pub use continuous::*;
pub use control::*;
pub use drag::*;
pub use error::*;
pub use fixed::*;
pub use format::*;
pub use handle::*;
pub use keys::*;
pub use mapper::*;
pub use payload::*;
pub use view::*;
