//! Transient in-app notifications ("toasts")
//!
//! One notice is active at a time: pushing a new one replaces whatever is
//! showing. Cancellation and Success notices dismiss themselves after a
//! fixed delay; Reminder and Info stay until dismissed by the user.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use shared::types::Timestamp;
use shared::util::now_millis;

/// Auto-dismiss delay for transient kinds
pub const AUTO_DISMISS_MS: i64 = 6_000;

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Reminder,
    Info,
    Cancellation,
    Success,
}

impl NoticeKind {
    /// Whether notices of this kind dismiss themselves after
    /// [`AUTO_DISMISS_MS`]
    pub fn auto_dismisses(&self) -> bool {
        match self {
            NoticeKind::Reminder => false,
            NoticeKind::Info => false,
            NoticeKind::Cancellation => true,
            NoticeKind::Success => true,
        }
    }
}

/// A single toast: kind, title, message, optional action button labels
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
    pub created_at: Timestamp,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            actions: Vec::new(),
            created_at: now_millis(),
        }
    }

    /// Attach action button labels
    pub fn with_actions(mut self, actions: Vec<String>) -> Self {
        self.actions = actions;
        self
    }

    fn expired_at(&self, now: Timestamp) -> bool {
        self.kind.auto_dismisses() && now - self.created_at >= AUTO_DISMISS_MS
    }
}

/// Holds the single active notice slot
#[derive(Clone, Default)]
pub struct NoticeCenter {
    current: Arc<Mutex<Option<Notice>>>,
}

impl NoticeCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing
    pub fn push(&self, notice: Notice) {
        *self.current.lock() = Some(notice);
    }

    /// Manual dismiss
    pub fn dismiss(&self) {
        *self.current.lock() = None;
    }

    /// The active notice, if any. Expired transient notices are pruned on
    /// read, which keeps the center free of timers.
    pub fn current(&self) -> Option<Notice> {
        self.current_at(now_millis())
    }

    fn current_at(&self, now: Timestamp) -> Option<Notice> {
        let mut guard = self.current.lock();
        if let Some(notice) = guard.as_ref()
            && notice.expired_at(now)
        {
            *guard = None;
        }
        guard.clone()
    }
}
