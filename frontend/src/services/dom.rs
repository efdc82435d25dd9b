//! Thin helpers for the few page-wide attributes and classes the app owns.

use shared::{LayoutWidth, ScrollMetrics, Theme};
use web_sys::{Element, HtmlElement};

pub const THEME_ATTRIBUTES: [&str; 2] = ["data-theme", "data-bs-theme"];
pub const FULL_WIDTH_BODY_CLASS: &str = "full-width";
pub const SCROLLBAR_CLASS: &str = "has-scrollbar";

fn document_element() -> Option<Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

fn body() -> Option<HtmlElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
}

/// Mirror the theme onto the `<html>` element
pub fn apply_theme(theme: Theme) {
    if let Some(root) = document_element() {
        for attribute in THEME_ATTRIBUTES {
            let _ = root.set_attribute(attribute, theme.as_str());
        }
    }
}

/// Theme currently applied to the page, as dialogs see it
pub fn current_theme() -> Theme {
    document_element()
        .and_then(|root| root.get_attribute(THEME_ATTRIBUTES[0]))
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

pub fn apply_layout_width(width: LayoutWidth) {
    if let Some(body) = body() {
        set_class(&body, FULL_WIDTH_BODY_CLASS, width.is_full());
    }
}

/// Add or remove a single class
pub fn set_class(element: &Element, class: &str, enabled: bool) {
    let class_list = element.class_list();
    let _ = if enabled {
        class_list.add_1(class)
    } else {
        class_list.remove_1(class)
    };
}

pub fn scroll_metrics(element: &Element) -> ScrollMetrics {
    ScrollMetrics::new(element.scroll_width() as f64, element.client_width() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_theme_round_trips_through_document() {
        apply_theme(Theme::Dark);
        assert_eq!(current_theme(), Theme::Dark);

        let root = document_element().unwrap();
        assert_eq!(root.get_attribute("data-bs-theme").as_deref(), Some("dark"));

        apply_theme(Theme::Light);
        assert_eq!(current_theme(), Theme::Light);
    }

    #[wasm_bindgen_test]
    fn test_full_width_toggles_body_class() {
        apply_layout_width(LayoutWidth::Full);
        assert!(body().unwrap().class_list().contains(FULL_WIDTH_BODY_CLASS));

        apply_layout_width(LayoutWidth::Boxed);
        assert!(!body().unwrap().class_list().contains(FULL_WIDTH_BODY_CLASS));
    }

    #[wasm_bindgen_test]
    fn test_unlaid_out_element_does_not_overflow() {
        let document = web_sys::window().unwrap().document().unwrap();
        let detached = document.create_element("div").unwrap();
        assert!(!scroll_metrics(&detached).overflows());

        set_class(&detached, SCROLLBAR_CLASS, true);
        assert_eq!(detached.class_name(), SCROLLBAR_CLASS);
        set_class(&detached, SCROLLBAR_CLASS, false);
        assert_eq!(detached.class_name(), "");
    }
}
