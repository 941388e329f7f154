use serde::Serialize;
use tracing::{error, info};

pub const JOINED_MESSAGE: &str = "Successfully registered for tournament!";
pub const TOURNAMENT_FULL_MESSAGE: &str = "Tournament is full";
pub const STORE_UNAVAILABLE_MESSAGE: &str = "Database not available. Please try again later.";
pub const CREATED_MESSAGE: &str = "Tournament created successfully!";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create tournament";
pub const DETAILS_COMING_SOON_MESSAGE: &str = "Tournament details view coming soon!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// A short user-facing message, shown as a toast by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Writes notices to the log. Used when no UI is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => error!("Notice: {}", notice.message),
            NoticeLevel::Success | NoticeLevel::Info => info!("Notice: {}", notice.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_serializes_for_toast() {
        let json = serde_json::to_value(Notice::error(TOURNAMENT_FULL_MESSAGE)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "level": "error", "message": "Tournament is full" })
        );
    }

    #[test]
    fn test_tracing_notifier_accepts_every_level() {
        let notifier: &dyn Notifier = &TracingNotifier;

        notifier.notify(Notice::success(JOINED_MESSAGE));
        notifier.notify(Notice::error(STORE_UNAVAILABLE_MESSAGE));
        notifier.notify(Notice::info(DETAILS_COMING_SOON_MESSAGE));
    }
}
