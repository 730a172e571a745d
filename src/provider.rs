use thiserror::Error;

/// The auth provider's enumerated error codes, with the human-readable
/// message shown for each.  Codes outside the known set fall back to
/// `Unknown` so the mapping stays total.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum ErrorCode {
    #[error("the email address or password is incorrect")]
    InvalidCredential,
    #[error("no account exists for that email address")]
    UserNotFound,
    #[error("the password is incorrect")]
    WrongPassword,
    #[error("that is not a valid email address")]
    InvalidEmail,
    #[error("an account already exists for that email address")]
    EmailAlreadyInUse,
    #[error("the password must be at least 6 characters long")]
    WeakPassword,
    #[error("too many attempts; wait a moment and try again")]
    TooManyRequests,
    #[error("the sign-in window was closed before finishing")]
    PopupClosed,
    #[error("the sign-in window was blocked")]
    PopupBlocked,
    #[error("operation failed: {0}")]
    Unknown(String),
}

impl ErrorCode {
    pub(crate) fn parse(raw: &str) -> ErrorCode {
        match raw {
            "auth/invalid-credential" => ErrorCode::InvalidCredential,
            "auth/user-not-found" => ErrorCode::UserNotFound,
            "auth/wrong-password" => ErrorCode::WrongPassword,
            "auth/invalid-email" => ErrorCode::InvalidEmail,
            "auth/email-already-in-use" => ErrorCode::EmailAlreadyInUse,
            "auth/weak-password" => ErrorCode::WeakPassword,
            "auth/too-many-requests" => ErrorCode::TooManyRequests,
            "auth/popup-closed-by-user" => ErrorCode::PopupClosed,
            "auth/popup-blocked" => ErrorCode::PopupBlocked,
            _ => ErrorCode::Unknown(raw.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_parse() {
        for (raw, code) in [
            ("auth/invalid-credential", ErrorCode::InvalidCredential),
            ("auth/user-not-found", ErrorCode::UserNotFound),
            ("auth/wrong-password", ErrorCode::WrongPassword),
            ("auth/invalid-email", ErrorCode::InvalidEmail),
            ("auth/email-already-in-use", ErrorCode::EmailAlreadyInUse),
            ("auth/weak-password", ErrorCode::WeakPassword),
            ("auth/too-many-requests", ErrorCode::TooManyRequests),
            ("auth/popup-closed-by-user", ErrorCode::PopupClosed),
            ("auth/popup-blocked", ErrorCode::PopupBlocked),
        ] {
            assert_eq!(ErrorCode::parse(raw), code);
        }
    }

    #[test]
    fn test_unknown_code_keeps_raw_message() {
        let code = ErrorCode::parse("auth/network-request-failed");
        assert_eq!(
            code,
            ErrorCode::Unknown("auth/network-request-failed".to_owned())
        );
        assert_eq!(
            code.to_string(),
            "operation failed: auth/network-request-failed"
        );
    }

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(
            ErrorCode::EmailAlreadyInUse.to_string(),
            "an account already exists for that email address"
        );
    }
}
