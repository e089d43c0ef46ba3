/// Logs a warning to the console together with its source location, but only
/// in debug builds. Release builds compile the call away.
#[macro_export]
macro_rules! dev_warn {
    // Usage: dev_warn!("detection failed: {}", err);
    ($($arg:tt)*) => {{
        if cfg!(debug_assertions) {
            let location = format!("{}:{}", file!(), line!());
            ::leptos::logging::warn!("[{}] {}", location, format_args!($($arg)*));
        }
    }};
}
