//! Mobile/desktop classification and the reactive detection shared by every
//! page.

pub use classifier::*;
pub use debounce::*;
pub use detection::*;

mod classifier;
mod debounce;
mod detection;
