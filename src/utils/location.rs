use web_sys::window;

use crate::models::TokenError;

/// Current `window.location.pathname`
pub fn current_pathname() -> Result<String, TokenError> {
    window()
        .ok_or(TokenError::LocationUnavailable)?
        .location()
        .pathname()
        .map_err(|_| TokenError::LocationUnavailable)
}

/// Final `/`-separated segment of a path; empty when the path ends in `/`.
pub fn last_path_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_final_segment() {
        assert_eq!(last_path_segment("/abc123"), "abc123");
        assert_eq!(last_path_segment("/signup/abc123"), "abc123");
        assert_eq!(last_path_segment("abc123"), "abc123");
    }

    #[test]
    fn trailing_slash_or_root_is_empty() {
        assert_eq!(last_path_segment("/"), "");
        assert_eq!(last_path_segment("/signup/"), "");
        assert_eq!(last_path_segment(""), "");
    }
}
