/// Display formatting for dates and ratios
pub mod format;
/// HTML fragments for request lifecycle states
pub mod markup;

pub use format::*;
pub use markup::*;
