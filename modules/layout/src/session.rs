use crate::contract::model::{PageMessage, Severity};

/// Per-request session context, owned by the caller.
///
/// Replaces the ambient session store of the legacy GUI with an explicit
/// object: every slot the layout services read or write lives here. The
/// surrounding session store keeps one `Session` per session key and is
/// responsible for its synchronization.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Authenticated user id, absent for anonymous requests.
    pub user_id: Option<i64>,
    /// Login name of the authenticated user.
    pub username: Option<String>,
    /// Login name of the identity an operator switched from.
    pub logged_from: Option<String>,
    /// User id of the identity an operator switched from.
    pub logged_from_id: Option<i64>,
    /// Resolved GUI language, populated by `Service::begin_session`.
    pub language: Option<String>,
    /// Resolved GUI theme, populated by `Service::begin_session`.
    pub theme: Option<String>,
    page_message: Option<PageMessage>,
}

impl Session {
    /// Create a session for an authenticated user.
    pub fn authenticated(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            username: Some(username.into()),
            ..Self::default()
        }
    }

    /// An operator is acting under a delegated identity when either
    /// `logged_from` marker is present.
    pub fn is_delegated(&self) -> bool {
        self.logged_from.is_some() || self.logged_from_id.is_some()
    }

    /// Queue a message for the next page render.
    ///
    /// Text accumulates across calls, separated by `"\n<br />"`; the
    /// severity of the latest call wins.
    pub fn push_message(&mut self, text: &str, severity: Severity) {
        match &mut self.page_message {
            Some(pending) => {
                pending.text.push_str("\n<br />");
                pending.text.push_str(text);
                pending.severity = severity;
            }
            None => {
                self.page_message = Some(PageMessage {
                    text: text.to_string(),
                    severity,
                });
            }
        }
    }

    /// Take the pending page message, leaving the slot empty.
    pub fn take_message(&mut self) -> Option<PageMessage> {
        self.page_message.take()
    }

    pub fn has_message(&self) -> bool {
        self.page_message.is_some()
    }
}
