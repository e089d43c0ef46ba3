//! Server-only routes that sit beside the Leptos app.

pub mod handlers;
pub mod helpers;
pub mod middleware;
pub mod state;
pub mod templates;

pub use handlers::configure;
pub use middleware::SecurityHeaders;
pub use state::AppState;
