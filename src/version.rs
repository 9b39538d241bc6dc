/// Version tag used in versioned greetings.
pub const APP_VERSION: &str = "v1";

/// Greeting prefixed with the application version, e.g. `[v1] Hello, world`.
pub fn versioned_greeting(name: &str) -> String {
    format!("[{APP_VERSION}] Hello, {name}")
}
