use gloo::timers::callback::Timeout;
use shared::{DialogKind, DialogPalette};
use yew::prelude::*;

use crate::hooks::use_dialogs::{DialogEntry, DialogHandle, DialogQueue};
use crate::services::dom;

#[derive(Properties, PartialEq)]
pub struct DialogProviderProps {
    pub toast_timer_ms: u32,
    pub children: Children,
}

/// Owns the dialog queue, exposes a `DialogHandle` through context and
/// renders whatever is open on top of its children
#[function_component(DialogProvider)]
pub fn dialog_provider(props: &DialogProviderProps) -> Html {
    let queue = use_reducer(DialogQueue::default);
    let handle = DialogHandle::new(queue.dispatcher(), props.toast_timer_ms);

    // Themed from the document attribute at the time the dialog is drawn
    let palette = DialogPalette::for_theme(dom::current_theme());

    html! {
        <ContextProvider<DialogHandle> context={handle.clone()}>
            {for props.children.iter()}

            {if let Some(entry) = queue.active_modal() {
                html! { <ModalDialog entry={entry.clone()} palette={palette.clone()} handle={handle.clone()} /> }
            } else {
                html! {}
            }}

            <div class="toast-stack">
                {for queue.toasts().map(|entry| html! {
                    <Toast key={entry.options.id.to_string()} entry={entry.clone()} palette={palette.clone()} handle={handle.clone()} />
                })}
            </div>
        </ContextProvider<DialogHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct DialogProps {
    entry: DialogEntry,
    palette: DialogPalette,
    handle: DialogHandle,
}

#[function_component(ModalDialog)]
fn modal_dialog(props: &DialogProps) -> Html {
    let options = &props.entry.options;

    let answer = {
        let handle = props.handle.clone();
        let on_result = props.entry.on_result.clone();
        let id = options.id;
        move |confirmed: bool| {
            handle.close(id);
            if let Some(on_result) = &on_result {
                on_result.emit(confirmed);
            }
        }
    };

    let on_confirm = {
        let answer = answer.clone();
        Callback::from(move |_: MouseEvent| answer(true))
    };

    let on_cancel = {
        let answer = answer.clone();
        Callback::from(move |_: MouseEvent| answer(false))
    };

    // Loading popups can only be closed by their owner
    let on_backdrop_click = {
        let closable = options.kind != DialogKind::Loading;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if closable {
                answer(false);
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="dialog-backdrop" onclick={on_backdrop_click}>
            <div class="dialog" role="dialog" style={props.palette.box_style()} onclick={on_modal_click}>
                {if let Some(icon) = options.icon {
                    html! { <div class={icon.css_class()}>{icon.glyph()}</div> }
                } else {
                    html! {}
                }}
                {if !options.title.is_empty() {
                    html! { <h3 class="dialog-title">{&options.title}</h3> }
                } else {
                    html! {}
                }}
                {if !options.text.is_empty() {
                    html! {
                        <div class="dialog-text">
                            {for options.text.lines().map(|line| html! { <p>{line}</p> })}
                        </div>
                    }
                } else {
                    html! {}
                }}

                {match options.kind {
                    DialogKind::Loading => html! {
                        <div class="dialog-spinner">
                            <div class="spinner"></div>
                        </div>
                    },
                    _ => html! {
                        <div class="dialog-buttons">
                            <button class="btn btn-primary" style={props.palette.confirm_style()} onclick={on_confirm}>
                                {&options.confirm_label}
                            </button>
                            {if let Some(cancel_label) = &options.cancel_label {
                                html! {
                                    <button class="btn btn-secondary" style={props.palette.cancel_style()} onclick={on_cancel}>
                                        {cancel_label}
                                    </button>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                    },
                }}
            </div>
        </div>
    }
}

#[function_component(Toast)]
fn toast(props: &DialogProps) -> Html {
    let id = props.entry.options.id;

    {
        let handle = props.handle.clone();
        let timer_ms = props.entry.options.timer_ms;
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = timer_ms.map(|ms| Timeout::new(ms, move || handle.close(id)));
            move || drop(timeout)
        });
    }

    let on_click = {
        let handle = props.handle.clone();
        Callback::from(move |_: MouseEvent| handle.close(id))
    };

    let options = &props.entry.options;
    html! {
        <div class="toast" role="status" style={props.palette.box_style()} onclick={on_click}>
            {if let Some(icon) = options.icon {
                html! { <span class={icon.css_class()}>{icon.glyph()}</span> }
            } else {
                html! {}
            }}
            <span class="toast-message">{&options.title}</span>
        </div>
    }
}
