use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A transient toast: `(title, message, severity)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success".into(),
            message: message.into(),
            severity: Severity::Default,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".into(),
            message: message.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn fetch_prompts_failed() -> Self {
        Self::error("Failed to fetch prompts. Please try again.")
    }

    pub fn run_workflow_failed() -> Self {
        Self::error("Failed to run workflow. Please try again.")
    }

    pub fn run_workflow_succeeded() -> Self {
        Self::success("Workflow completed successfully.")
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Where success and error toasts end up. Display policy belongs to the implementor.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Prints toasts to stderr so they never mix with rendered results on stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: Notification) {
        let icon = match notification.severity {
            Severity::Default => "✅",
            Severity::Destructive => "❌",
        };
        eprintln!("{icon} {notification}");
    }
}
