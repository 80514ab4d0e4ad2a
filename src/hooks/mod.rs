pub mod use_signup_form;

pub use use_signup_form::{use_signup_form, UseSignupFormHandle};
