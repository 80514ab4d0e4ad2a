pub mod app;
pub mod signup_form;

pub use app::App;
pub use signup_form::SignupForm;
