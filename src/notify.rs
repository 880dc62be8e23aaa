//! Notification seam between form controllers and whatever renders toasts.

pub const REVIEW_ERRORS_MESSAGE: &str = "Please review the highlighted form errors";
pub const SAVED_MESSAGE: &str = "Changes saved successfully";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, please try again";

pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }
}

/// Records notices in order. Serves as the test double and as a buffer for
/// embedders that drain notices into their own toast layer.
#[derive(Debug, Default)]
pub struct NotificationLog {
    notices: Vec<Notice>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn success_count(&self) -> usize {
        self.notices
            .iter()
            .filter(|notice| matches!(notice, Notice::Success(_)))
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.notices
            .iter()
            .filter(|notice| matches!(notice, Notice::Error(_)))
            .count()
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Notifier for NotificationLog {
    fn success(&mut self, message: &str) {
        self.notices.push(Notice::Success(message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.notices.push(Notice::Error(message.to_string()));
    }
}
