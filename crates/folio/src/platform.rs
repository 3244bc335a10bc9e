pub mod headless;

// DOM bindings (feature-gated)
#[cfg(feature = "browser")]
pub mod browser;
