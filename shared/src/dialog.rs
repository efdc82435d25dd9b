//! Options for alerts, confirmations, toasts and loading popups.
//!
//! Constructors return `None` when there is nothing to show, so callers can
//! forward optional user input without checking it first.

use uuid::Uuid;

use crate::Theme;

/// Auto-close delay for toasts
pub const DEFAULT_TOAST_TIMER_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIcon {
    Success,
    Error,
    Warning,
    Info,
    Question,
}

impl DialogIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            DialogIcon::Success => "✅",
            DialogIcon::Error => "❌",
            DialogIcon::Warning => "⚠️",
            DialogIcon::Info => "ℹ️",
            DialogIcon::Question => "❓",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DialogIcon::Success => "dialog-icon success",
            DialogIcon::Error => "dialog-icon error",
            DialogIcon::Warning => "dialog-icon warning",
            DialogIcon::Info => "dialog-icon info",
            DialogIcon::Question => "dialog-icon question",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Modal with a single confirm button
    Alert,
    /// Modal with confirm and cancel buttons
    Confirm,
    /// Non-blocking notification that closes itself
    Toast,
    /// Modal without buttons, closed by the caller
    Loading,
}

impl DialogKind {
    pub fn is_modal(self) -> bool {
        !matches!(self, DialogKind::Toast)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogOptions {
    pub id: Uuid,
    pub kind: DialogKind,
    pub title: String,
    pub text: String,
    pub icon: Option<DialogIcon>,
    pub confirm_label: String,
    pub cancel_label: Option<String>,
    pub timer_ms: Option<u32>,
}

impl DialogOptions {
    fn base(kind: DialogKind, title: &str, text: &str, icon: Option<DialogIcon>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.trim().to_string(),
            text: text.trim().to_string(),
            icon,
            confirm_label: "OK".to_string(),
            cancel_label: None,
            timer_ms: None,
        }
    }

    pub fn alert(title: &str, text: &str, icon: DialogIcon) -> Option<Self> {
        if title.trim().is_empty() && text.trim().is_empty() {
            return None;
        }
        Some(Self::base(DialogKind::Alert, title, text, Some(icon)))
    }

    pub fn success(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Self::alert("Success", text, DialogIcon::Success)
    }

    pub fn error(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Self::alert("Error", text, DialogIcon::Error)
    }

    pub fn confirm(title: &str, text: &str) -> Option<Self> {
        if title.trim().is_empty() && text.trim().is_empty() {
            return None;
        }
        let mut options = Self::base(DialogKind::Confirm, title, text, Some(DialogIcon::Question));
        options.confirm_label = "Yes".to_string();
        options.cancel_label = Some("Cancel".to_string());
        Some(options)
    }

    pub fn toast(message: &str, icon: DialogIcon) -> Option<Self> {
        if message.trim().is_empty() {
            return None;
        }
        let mut options = Self::base(DialogKind::Toast, message, "", Some(icon));
        options.timer_ms = Some(DEFAULT_TOAST_TIMER_MS);
        Some(options)
    }

    pub fn loading(title: &str) -> Self {
        let title = if title.trim().is_empty() { "Loading..." } else { title };
        Self::base(DialogKind::Loading, title, "", None)
    }

    /// Override button labels; blank labels keep the defaults
    pub fn with_labels(mut self, confirm: &str, cancel: &str) -> Self {
        if !confirm.trim().is_empty() {
            self.confirm_label = confirm.trim().to_string();
        }
        if !cancel.trim().is_empty() && self.cancel_label.is_some() {
            self.cancel_label = Some(cancel.trim().to_string());
        }
        self
    }

    pub fn with_timer(mut self, timer_ms: u32) -> Self {
        self.timer_ms = Some(timer_ms);
        self
    }
}

/// Colors applied to the dialog box for the active theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogPalette {
    pub background: &'static str,
    pub color: &'static str,
    pub confirm_color: &'static str,
    pub cancel_color: &'static str,
}

impl DialogPalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: "#ffffff",
                color: "#212529",
                confirm_color: "#0d6efd",
                cancel_color: "#6c757d",
            },
            Theme::Dark => Self {
                background: "#212529",
                color: "#f8f9fa",
                confirm_color: "#3d8bfd",
                cancel_color: "#495057",
            },
        }
    }

    pub fn box_style(&self) -> String {
        format!("background: {}; color: {};", self.background, self.color)
    }

    pub fn confirm_style(&self) -> String {
        format!("background-color: {};", self.confirm_color)
    }

    pub fn cancel_style(&self) -> String {
        format!("background-color: {};", self.cancel_color)
    }
}
