//! User-facing error messages.

use crosspost_domain::api::ApiError;

/// Maps a normalized API error to a message fit for end users.
///
/// Statuses with a fixed translation always use it, regardless of the
/// error's own message. Anything else falls back to that message, or to
/// a generic line when it is empty. The mapping is total and idempotent:
/// feeding a produced message back through a same-status error returns
/// it unchanged.
#[must_use]
pub fn user_message(error: &ApiError) -> String {
    match error.status {
        400 => "Bad request. Please check your input.".to_string(),
        401 => "Unauthorized. Please log in again.".to_string(),
        403 => "Forbidden. You do not have permission to perform this action.".to_string(),
        404 => "Not found. The requested resource does not exist.".to_string(),
        429 => "Too many requests. Please try again later.".to_string(),
        500 => "Server error. Please try again later.".to_string(),
        _ if error.message.is_empty() => "An unexpected error occurred.".to_string(),
        _ => error.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn error_with(status: u16, message: &str) -> ApiError {
        let mut error = ApiError::from_status(status);
        error.message = message.to_string();
        error
    }

    #[test]
    fn translates_the_fixed_statuses() {
        let cases = [
            (400, "Bad request. Please check your input."),
            (401, "Unauthorized. Please log in again."),
            (
                403,
                "Forbidden. You do not have permission to perform this action.",
            ),
            (404, "Not found. The requested resource does not exist."),
            (429, "Too many requests. Please try again later."),
            (500, "Server error. Please try again later."),
        ];

        for (status, expected) in cases {
            let error = error_with(status, "backend detail that should not leak");
            assert_eq!(user_message(&error), expected);
        }
    }

    #[test]
    fn passes_through_other_statuses() {
        let error = error_with(418, "I'm a teapot");

        assert_eq!(user_message(&error), "I'm a teapot");
    }

    #[test]
    fn network_errors_use_their_own_message() {
        let error = ApiError::network("connection refused");

        assert_eq!(user_message(&error), "connection refused");
    }

    #[test]
    fn empty_messages_get_the_generic_line() {
        let error = error_with(599, "");

        assert_eq!(user_message(&error), "An unexpected error occurred.");
    }

    #[test]
    fn the_mapping_is_idempotent() {
        for status in [0, 400, 401, 403, 404, 418, 429, 500, 503, 599] {
            let first = user_message(&error_with(status, "original detail"));
            let second = user_message(&error_with(status, &first));

            assert_eq!(second, first);
        }
    }
}
