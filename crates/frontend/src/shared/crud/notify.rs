use super::client::ApiError;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// Sink for user-facing notifications.
pub trait Notifier {
    fn notify(&self, level: NoticeLevel, message: String);

    fn success(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(NoticeLevel::Success, message.into());
    }

    fn error(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(NoticeLevel::Error, message.into());
    }

    /// The server no longer accepts the stored token.
    fn session_expired(&self) {
        self.notify(NoticeLevel::Info, SESSION_EXPIRED_MESSAGE.to_string());
    }

    /// Report a failed signed-in request; a 401 ends the session instead of
    /// showing an error.
    fn request_failed(&self, error: &ApiError, fallback: &str)
    where
        Self: Sized,
    {
        if error.is_unauthorized() {
            self.session_expired();
        } else {
            self.error(error.user_message(fallback));
        }
    }
}
