use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct OptionChipsProps {
    pub labels: Vec<String>,
    pub on_add: Callback<String>,
    pub on_remove: Callback<usize>,
}

#[function_component(OptionChips)]
pub fn option_chips(props: &OptionChipsProps) -> Html {
    let input_ref = use_node_ref();

    let submit = {
        let input_ref = input_ref.clone();
        let on_add = props.on_add.clone();
        move || {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let value = input.value();
                if !value.trim().is_empty() {
                    on_add.emit(value);
                    input.set_value("");
                }
            }
        }
    };

    let onclick = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit())
    };

    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            submit();
        }
    });

    html! {
        <div class="space-y-3">
            <div class="flex gap-2">
                <input
                    ref={input_ref}
                    type="text"
                    placeholder="Add an option…"
                    class={styles::INPUT}
                    {onkeydown}
                />
                <button class={styles::BUTTON_PRIMARY} {onclick}>{"Add"}</button>
            </div>
            <div class="flex flex-wrap gap-2">
                { for props.labels.iter().enumerate().map(|(idx, label)| {
                    let on_remove = props.on_remove.clone();
                    html! {
                        <div key={format!("{}-{}", idx, label)} class={styles::CHIP}>
                            <span>{label}</span>
                            <button
                                aria-label="Remove"
                                class="ml-2 text-gray-500 hover:text-red-500"
                                onclick={Callback::from(move |_: MouseEvent| on_remove.emit(idx))}
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
