pub mod signup;
pub mod token;

pub use signup::{ApiErrorBody, Credentials};
pub use token::{AuthToken, TokenError};
