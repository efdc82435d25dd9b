use std::rc::Rc;

use shared::dialog::DEFAULT_TOAST_TIMER_MS;
use shared::{DialogIcon, DialogOptions};
use uuid::Uuid;
use yew::prelude::*;

use crate::services::logging::Logger;

/// A dialog waiting to be shown, with the callback its buttons answer to
#[derive(Clone, PartialEq)]
pub struct DialogEntry {
    pub options: DialogOptions,
    pub on_result: Option<Callback<bool>>,
}

pub enum DialogAction {
    Push(DialogEntry),
    Close(Uuid),
}

/// Open dialogs in the order they were requested
#[derive(Clone, Default, PartialEq)]
pub struct DialogQueue {
    pub entries: Vec<DialogEntry>,
}

impl DialogQueue {
    /// Modals are shown one at a time, oldest first
    pub fn active_modal(&self) -> Option<&DialogEntry> {
        self.entries.iter().find(|e| e.options.kind.is_modal())
    }

    pub fn toasts(&self) -> impl Iterator<Item = &DialogEntry> {
        self.entries.iter().filter(|e| !e.options.kind.is_modal())
    }
}

impl Reducible for DialogQueue {
    type Action = DialogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut entries = self.entries.clone();
        match action {
            DialogAction::Push(entry) => entries.push(entry),
            DialogAction::Close(id) => entries.retain(|e| e.options.id != id),
        }
        Rc::new(Self { entries })
    }
}

/// Entry points for alerts, confirmations, toasts and loading popups.
///
/// Obtained from `use_dialogs()`. Outside a `DialogProvider` every call is a
/// no-op.
#[derive(Clone, PartialEq)]
pub struct DialogHandle {
    dispatcher: Option<UseReducerDispatcher<DialogQueue>>,
    toast_timer_ms: u32,
}

impl Default for DialogHandle {
    fn default() -> Self {
        Self {
            dispatcher: None,
            toast_timer_ms: DEFAULT_TOAST_TIMER_MS,
        }
    }
}

impl DialogHandle {
    pub fn new(dispatcher: UseReducerDispatcher<DialogQueue>, toast_timer_ms: u32) -> Self {
        Self {
            dispatcher: Some(dispatcher),
            toast_timer_ms,
        }
    }

    /// Queue a dialog; `None` options are ignored
    pub fn show(&self, options: Option<DialogOptions>, on_result: Option<Callback<bool>>) -> Option<Uuid> {
        let options = options?;
        let Some(dispatcher) = &self.dispatcher else {
            Logger::warn_with_component("dialogs", &format!("No dialog provider for '{}'", options.title));
            return None;
        };

        let id = options.id;
        dispatcher.dispatch(DialogAction::Push(DialogEntry { options, on_result }));
        Some(id)
    }

    pub fn alert(&self, title: &str, text: &str, icon: DialogIcon) -> Option<Uuid> {
        self.show(DialogOptions::alert(title, text, icon), None)
    }

    pub fn success(&self, text: &str) -> Option<Uuid> {
        self.show(DialogOptions::success(text), None)
    }

    pub fn error(&self, text: &str) -> Option<Uuid> {
        self.show(DialogOptions::error(text), None)
    }

    /// Ask a yes/no question; `on_result` receives `true` on confirm
    pub fn confirm(&self, title: &str, text: &str, on_result: Callback<bool>) -> Option<Uuid> {
        self.show(DialogOptions::confirm(title, text), Some(on_result))
    }

    pub fn toast(&self, message: &str, icon: DialogIcon) -> Option<Uuid> {
        let timer_ms = self.toast_timer_ms;
        self.show(DialogOptions::toast(message, icon).map(|t| t.with_timer(timer_ms)), None)
    }

    pub fn loading(&self, title: &str) -> Option<Uuid> {
        self.show(Some(DialogOptions::loading(title)), None)
    }

    pub fn close(&self, id: Uuid) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.dispatch(DialogAction::Close(id));
        }
    }
}

#[hook]
pub fn use_dialogs() -> DialogHandle {
    use_context::<DialogHandle>().unwrap_or_default()
}
