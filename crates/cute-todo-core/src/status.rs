use std::fmt;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Success,
    Info,
    Error,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Info => "info",
            StatusKind::Error => "error",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: StatusMessage,
    /// Set once the display period is over and the exit transition runs.
    pub leaving: bool,
}

impl Toast {
    pub fn css_class(&self) -> String {
        let mut class = format!("message message-{}", self.message.kind);
        if self.leaving {
            class.push_str(" leaving");
        }
        class
    }
}

/// Toasts currently on screen, oldest first.
///
/// Both timer transitions are idempotent: a toast that is already leaving or
/// already gone is left alone.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, message: StatusMessage) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        debug!(id = id.0, kind = %message.kind, text = %message.text, "showing toast");
        self.items.push(Toast {
            id,
            message,
            leaving: false,
        });
        id
    }

    /// Starts the exit transition. Returns false when the toast is no longer
    /// shown or is already leaving.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.items.iter_mut().find(|toast| toast.id == id) {
            Some(toast) if !toast.leaving => {
                toast.leaving = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        before != self.items.len()
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
