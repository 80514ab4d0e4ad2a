// ============================================================================
// PASSWORD POLICY - pure validation rules
// ============================================================================

use crate::utils::constants::*;

type Rule = (fn(&str) -> bool, &'static str);

/// Password rules in display order. A message is reported when its
/// predicate returns false.
const PASSWORD_RULES: &[Rule] = &[
    (|p| p.chars().count() >= PASSWORD_MIN_LENGTH, MSG_PASSWORD_TOO_SHORT),
    (|p| p.chars().count() <= PASSWORD_MAX_LENGTH, MSG_PASSWORD_TOO_LONG),
    (|p| !p.contains(' '), MSG_PASSWORD_HAS_SPACES),
    (|p| p.chars().any(|c| c.is_ascii_digit()), MSG_PASSWORD_NO_DIGIT),
    (|p| p.chars().any(char::is_uppercase), MSG_PASSWORD_NO_UPPERCASE),
    (|p| p.chars().any(char::is_lowercase), MSG_PASSWORD_NO_LOWERCASE),
];

/// Username requirement first, then the password rules in order.
pub fn validate(username: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if username.trim().is_empty() {
        errors.push(MSG_USERNAME_REQUIRED.to_string());
    }

    errors.extend(
        PASSWORD_RULES
            .iter()
            .filter(|(passes, _)| !passes(password))
            .map(|(_, message)| message.to_string()),
    );

    errors
}
