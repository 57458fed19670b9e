//! Error types shared by the store, the view controller and the action handlers.

use thiserror::Error;

use crate::model::view::View;

/// Failures of the key-value storage layer.
///
/// Reasons are carried as text so the errors can be kept in component state
/// and compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },

    #[error("stored value for `{key}` is malformed: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Rejected view changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot go from {from} to {to}")]
    Unreachable { from: View, to: View },

    #[error("the detail view needs a title and content")]
    MissingDetail,

    #[error("there is nothing to go back to from {0}")]
    NoWayBack(View),
}

/// Everything a user action can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("comment is empty")]
    EmptyComment,

    #[error("username and password must not be empty")]
    EmptyCredentials,

    #[error("invalid account or password")]
    InvalidLogin,

    #[error("only the admin view can change {0}")]
    AdminOnly(&'static str),

    #[error("speech synthesis is not supported")]
    SpeechUnsupported,

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ActionError {
    /// Text shown to the user in a notification.
    pub fn user_message(&self) -> String {
        match self {
            ActionError::EmptyComment => "Please enter a comment.".to_string(),
            ActionError::EmptyCredentials => {
                "Please enter both a new username and a new password.".to_string()
            }
            ActionError::InvalidLogin => "Invalid account or password. Please try again.".to_string(),
            ActionError::SpeechUnsupported => {
                "Sorry, your browser does not support text-to-speech.".to_string()
            }
            ActionError::AdminOnly(_) | ActionError::Transition(_) => {
                "That action is not available here.".to_string()
            }
            ActionError::Store(err) => format!("Could not save to this device: {err}"),
        }
    }

    /// The action took effect in memory and only persisting it failed, so
    /// repeating it would apply it twice.
    pub fn change_kept(&self) -> bool {
        matches!(self, ActionError::Store(_))
    }
}

pub type Result<T, E = ActionError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_convert_into_action_errors() {
        let err: ActionError = StoreError::Unavailable("private mode".into()).into();
        assert_eq!(err.to_string(), "storage is unavailable: private mode");
        assert!(err.user_message().contains("private mode"));
    }

    #[test]
    fn only_store_failures_keep_the_change() {
        let write = StoreError::Write {
            key: "comments".into(),
            reason: "QuotaExceededError".into(),
        };
        assert!(ActionError::Store(write).change_kept());
        assert!(!ActionError::EmptyComment.change_kept());
        assert!(!ActionError::InvalidLogin.change_kept());
    }

    #[test]
    fn transition_error_names_both_views() {
        let err = TransitionError::Unreachable {
            from: View::Admin,
            to: View::Posts,
        };
        assert_eq!(err.to_string(), "cannot go from admin to posts");
    }

    #[test]
    fn login_failure_message_matches_the_site_copy() {
        assert_eq!(
            ActionError::InvalidLogin.user_message(),
            "Invalid account or password. Please try again."
        );
    }
}
