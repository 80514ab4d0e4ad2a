// ============================================================================
// SIGN-UP FORM - Yew + WebAssembly
// ============================================================================
// - Views: components that render the DOM
// - Hooks: Yew state wiring
// - ViewModels: form state + submit flow (plain Rust, testable natively)
// - Services: HTTP only
// - Models: wire types and the bearer token
// ============================================================================

pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;
pub mod views;

pub use views::App;

/// Installs the panic hook and console logger, then mounts [`App`] on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(config::CONFIG.log_level()));
    }
    log::info!("🚀 Sign-up form starting (endpoint: {})", config::CONFIG.signup_endpoint());

    yew::Renderer::<App>::new().render();
}
