pub mod password_policy;
pub mod signup_viewmodel;

pub use password_policy::validate;
pub use signup_viewmodel::{FormAction, SignupFormState, SignupViewModel, SubmitOutcome};
