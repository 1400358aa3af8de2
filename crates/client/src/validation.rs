//! Input validation helpers.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

#[allow(clippy::unwrap_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Whether the value looks like an email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Whether the value parses as an absolute URL.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Whether the password meets the strength policy: at least 8
/// characters with an uppercase letter, a lowercase letter, a digit and
/// a character that is neither.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_lowercase)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_alphanumeric())
}

/// Whether the username is 3 to 30 characters of letters, digits and
/// underscores.
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    let length = username.chars().count();

    (3..=30).contains(&length)
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Escapes HTML-significant characters so the value renders as text.
#[must_use]
pub fn sanitize_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            other => out.push(other),
        }
    }

    out
}

/// Whether the filename's extension is one of the allowed set.
/// Comparison ignores case and a leading dot on the allowed entries.
#[must_use]
pub fn is_valid_file_type(filename: &str, allowed_extensions: &[&str]) -> bool {
    let Some((_, extension)) = filename.rsplit_once('.') else {
        return false;
    };

    allowed_extensions
        .iter()
        .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(extension))
}

/// Whether the byte size fits within the given maximum.
#[must_use]
pub const fn is_valid_file_size(size: u64, max_size: u64) -> bool {
    size <= max_size
}
