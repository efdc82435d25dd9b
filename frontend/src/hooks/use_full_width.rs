use shared::LayoutWidth;
use yew::prelude::*;

use crate::services::dom;
use crate::services::logging::Logger;
use crate::services::storage::PreferenceStore;

pub struct UseFullWidthResult {
    pub width: LayoutWidth,
    pub actions: UseFullWidthActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFullWidthActions {
    pub toggle: Callback<MouseEvent>,
    pub set_width: Callback<LayoutWidth>,
}

#[hook]
pub fn use_full_width(store: &PreferenceStore) -> UseFullWidthResult {
    let width = {
        let store = store.clone();
        use_state(move || store.load_layout_width())
    };

    use_effect_with(*width, |width| {
        dom::apply_layout_width(*width);
        || ()
    });

    let set_width = {
        let width = width.clone();
        let store = store.clone();
        Callback::from(move |next: LayoutWidth| {
            store.save_layout_width(next);
            Logger::debug_with_component("layout", &format!("Full width: {}", next.is_full()));
            width.set(next);
        })
    };

    let toggle = {
        let width = width.clone();
        let set_width = set_width.clone();
        Callback::from(move |_: MouseEvent| {
            set_width.emit((*width).toggled());
        })
    };

    UseFullWidthResult {
        width: *width,
        actions: UseFullWidthActions { toggle, set_width },
    }
}
