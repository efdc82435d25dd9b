use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::services::dom::{self, SCROLLBAR_CLASS};

/// Tracks whether the referenced element shows a horizontal scrollbar.
///
/// The element is measured on mount, on every tick of `interval_ms` and on
/// window resize; `has-scrollbar` is toggled on it to match. The timer and
/// the resize listener are dropped when the component unmounts.
#[hook]
pub fn use_scrollbar_check(node: NodeRef, interval_ms: u32) -> bool {
    let has_scrollbar = use_state_eq(|| false);

    {
        let has_scrollbar = has_scrollbar.clone();
        use_effect_with((node, interval_ms), move |(node, interval_ms)| {
            let check: Rc<dyn Fn()> = {
                let node = node.clone();
                Rc::new(move || {
                    if let Some(element) = node.cast::<Element>() {
                        let overflows = dom::scroll_metrics(&element).overflows();
                        dom::set_class(&element, SCROLLBAR_CLASS, overflows);
                        has_scrollbar.set(overflows);
                    }
                })
            };

            check();

            let interval = {
                let check = check.clone();
                Interval::new(*interval_ms, move || check())
            };

            let resize = web_sys::window().map(|window| {
                let check = check.clone();
                EventListener::new(&window, "resize", move |_| check())
            });

            move || {
                drop(interval);
                drop(resize);
            }
        });
    }

    *has_scrollbar
}

#[cfg(test)]
mod tests {
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct ScrollBoxProps {
        content_width: u32,
    }

    #[function_component(ScrollBox)]
    fn scroll_box(props: &ScrollBoxProps) -> Html {
        let node = use_node_ref();
        let has_scrollbar = use_scrollbar_check(node.clone(), 50);

        html! {
            <div
                class="scroll-box"
                ref={node}
                data-overflows={has_scrollbar.to_string()}
                style="width: 200px; overflow-x: auto;"
            >
                <div class="scroll-content" style={format!("width: {}px; height: 10px;", props.content_width)}></div>
            </div>
        }
    }

    fn mount(content_width: u32) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<ScrollBox>::with_root_and_props(root.clone(), ScrollBoxProps { content_width }).render();
        root
    }

    fn scroll_box_of(root: &web_sys::Element) -> Element {
        root.query_selector(".scroll-box").unwrap().unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_overflowing_container_gets_scrollbar_class() {
        let root = mount(1000);
        TimeoutFuture::new(20).await;

        let container = scroll_box_of(&root);
        assert!(container.class_list().contains(SCROLLBAR_CLASS));
        assert_eq!(container.get_attribute("data-overflows").as_deref(), Some("true"));
    }

    #[wasm_bindgen_test]
    async fn test_fitting_content_has_no_scrollbar_until_it_grows() {
        let root = mount(100);
        TimeoutFuture::new(20).await;

        let container = scroll_box_of(&root);
        assert!(!container.class_list().contains(SCROLLBAR_CLASS));
        assert_eq!(container.get_attribute("data-overflows").as_deref(), Some("false"));

        // Grown behind the component's back; the interval picks it up
        let content = root.query_selector(".scroll-content").unwrap().unwrap();
        content.set_attribute("style", "width: 1000px; height: 10px;").unwrap();
        TimeoutFuture::new(150).await;

        assert!(container.class_list().contains(SCROLLBAR_CLASS));
        assert_eq!(container.get_attribute("data-overflows").as_deref(), Some("true"));
    }
}
