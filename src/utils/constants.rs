/// Sign-up endpoint used when `SIGNUP_ENDPOINT` is not set at build time
pub const DEFAULT_SIGNUP_ENDPOINT: &str =
    "https://api.challenge.hennge.com/password-validation-challenge-api/001/challenge-signup";

// Password policy
pub const PASSWORD_MIN_LENGTH: usize = 10;
pub const PASSWORD_MAX_LENGTH: usize = 24;

// ============================================================================
// VALIDATION MESSAGES (display order is fixed by the validator)
// ============================================================================

pub const MSG_USERNAME_REQUIRED: &str = "Username is required";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 10 characters long";
pub const MSG_PASSWORD_TOO_LONG: &str = "Password must be at most 24 characters long";
pub const MSG_PASSWORD_HAS_SPACES: &str = "Password cannot contain spaces";
pub const MSG_PASSWORD_NO_DIGIT: &str = "Password must contain at least one number";
pub const MSG_PASSWORD_NO_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const MSG_PASSWORD_NO_LOWERCASE: &str = "Password must contain at least one lowercase letter";

// ============================================================================
// API ERROR MESSAGES
// ============================================================================

pub const MSG_NOT_AUTHENTICATED: &str = "Not authenticated to access this resource.";
pub const MSG_PASSWORD_NOT_ALLOWED: &str =
    "Sorry, the entered password is not allowed, please try a different one.";
pub const MSG_GENERIC_FAILURE: &str = "Something went wrong, please try again.";

/// Substring of a 500 response message that marks a password policy rejection
pub const NOT_ALLOWED_MARKER: &str = "not allowed";

// UI labels
pub const LABEL_SUBMIT: &str = "Create User";
pub const LABEL_SUBMITTING: &str = "Submitting...";
pub const MSG_USER_CREATED: &str = "Your account has been created successfully.";
