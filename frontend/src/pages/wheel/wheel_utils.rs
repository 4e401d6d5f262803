use yew::prelude::*;
use web_sys::{window, HtmlDocument, HtmlTextAreaElement};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use gloo_timers::callback::Timeout;
use crate::styles;

const COPIED_RESET_MS: u32 = 900;

/// Writes `text` to the clipboard, falling back to a hidden textarea and
/// `execCommand("copy")` when the async clipboard API refuses.
pub async fn copy_to_clipboard(text: String) -> bool {
    if let Some(window) = window() {
        let promise = window.navigator().clipboard().write_text(&text);
        if JsFuture::from(promise).await.is_ok() {
            return true;
        }
    }
    copy_with_textarea(&text)
}

fn copy_with_textarea(text: &str) -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Some(textarea) = document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    else {
        return false;
    };

    textarea.set_value(text);
    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false);
    textarea.remove();
    copied
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub text: String,
    pub can_copy: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let copied = use_state(|| false);

    let on_copy = {
        let copied = copied.clone();
        let text = props.text.clone();
        let can_copy = props.can_copy;
        Callback::from(move |_: MouseEvent| {
            if !can_copy {
                return;
            }
            let copied = copied.clone();
            let text = text.clone();
            spawn_local(async move {
                if copy_to_clipboard(text).await {
                    copied.set(true);
                    let copied = copied.clone();
                    Timeout::new(COPIED_RESET_MS, move || copied.set(false)).forget();
                } else {
                    log::warn!("Clipboard copy failed");
                }
            });
        })
    };

    html! {
        <div class="mt-6 flex items-center justify-center gap-3">
            <div class="px-6 py-3 rounded-xl bg-gradient-to-r from-violet-500 to-blue-500 text-white font-bold text-xl shadow-lg min-w-[10rem] text-center">
                {&props.text}
            </div>
            <button
                class={styles::BUTTON_SECONDARY}
                disabled={!props.can_copy}
                onclick={on_copy}
            >
                {if *copied { "Copied!" } else { "Copy" }}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin" };

    let button_class = if props.disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={props.disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 bg-transparent focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50"
            >
                <div class="flex items-center justify-center">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}
