pub use errors::*;

#[cfg(feature = "ssr")]
pub use config::*;

mod errors;
mod macros;

#[cfg(feature = "ssr")]
mod config;
