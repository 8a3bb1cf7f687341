//! Inbound intent model.

/// Action carried by the intent that started the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentAction {
    /// Plain launch from the app drawer; no payload.
    Main,
    /// Share action carrying `EXTRA_TEXT`.
    Send,
    Other(String),
}

impl IntentAction {
    pub const MAIN: &'static str = "android.intent.action.MAIN";
    pub const SEND: &'static str = "android.intent.action.SEND";

    /// Maps a platform action string to an action.
    pub fn from_platform(action: &str) -> Self {
        match action {
            Self::MAIN => IntentAction::Main,
            Self::SEND => IntentAction::Send,
            other => IntentAction::Other(other.to_string()),
        }
    }
}

/// Intent delivered by the OS at process entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareIntent {
    pub action: IntentAction,
    /// `EXTRA_TEXT`, if any.
    pub text: Option<String>,
}

impl ShareIntent {
    pub fn launch() -> Self {
        Self {
            action: IntentAction::Main,
            text: None,
        }
    }

    pub fn send(text: impl Into<String>) -> Self {
        Self {
            action: IntentAction::Send,
            text: Some(text.into()),
        }
    }

    pub fn is_share(&self) -> bool {
        self.action == IntentAction::Send
    }

    /// Shared text; only a share action carries one.
    pub fn shared_text(&self) -> Option<&str> {
        if self.is_share() {
            self.text.as_deref()
        } else {
            None
        }
    }

    pub fn extracted_url(&self) -> Option<&str> {
        super::extract_url(self.shared_text())
    }
}
