//! Append-only vendor activity entries.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// One activity entry recorded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Backend identifier.
    #[serde(alias = "_id")]
    pub id: RecordId,
    /// Upper-case action keyword, e.g. `CATEGORY_PURCHASE`.
    pub action: String,
    /// Free-text details.
    #[serde(default)]
    pub details: String,
    /// When the action happened.
    #[serde(default, alias = "createdAt")]
    pub timestamp: String,
}

impl LogEntry {
    /// Classify the entry for display.
    pub fn kind(&self) -> LogKind {
        LogKind::classify(&self.action)
    }
}

/// Display class of an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    /// Sign-in.
    Login,
    /// Account registration.
    Register,
    /// Record creation.
    Create,
    /// Record update.
    Update,
    /// Record deletion.
    Delete,
    /// Category purchase.
    Purchase,
    /// Anything else.
    Other,
}

impl LogKind {
    /// Classify an action keyword. Earlier keywords win, so
    /// `LOGIN_UPDATE` is a login.
    pub fn classify(action: &str) -> Self {
        const ORDER: [(&str, LogKind); 6] = [
            ("LOGIN", LogKind::Login),
            ("REGISTER", LogKind::Register),
            ("CREATE", LogKind::Create),
            ("UPDATE", LogKind::Update),
            ("DELETE", LogKind::Delete),
            ("PURCHASE", LogKind::Purchase),
        ];
        ORDER
            .iter()
            .find(|(keyword, _)| action.contains(keyword))
            .map_or(Self::Other, |(_, kind)| *kind)
    }

    /// Short label used by the CLI.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Purchase => "purchase",
            Self::Other => "other",
        }
    }
}
