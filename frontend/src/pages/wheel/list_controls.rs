use yew::prelude::*;
use web_sys::HtmlSelectElement;
use gloo::dialogs::{confirm, prompt};
use spinpick_shared::presets::PRESETS;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ListControlsProps {
    pub saved_names: Vec<String>,
    pub can_save: bool,
    pub on_preset: Callback<String>,
    pub on_save: Callback<String>,
    pub on_load: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(ListControls)]
pub fn list_controls(props: &ListControlsProps) -> Html {
    let selected = use_state(String::new);

    let on_preset_change = {
        let on_preset = props.on_preset.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let key = select.value();
            if !key.is_empty() {
                on_preset.emit(key);
            }
            select.set_value("");
        })
    };

    let on_saved_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let on_save = {
        let on_save = props.on_save.clone();
        let can_save = props.can_save;
        Callback::from(move |_: MouseEvent| {
            if !can_save {
                return;
            }
            if let Some(name) = prompt("Name this list (e.g., 'Lunch Ideas'):", None) {
                if !name.trim().is_empty() {
                    on_save.emit(name);
                }
            }
        })
    };

    let on_load = {
        let on_load = props.on_load.clone();
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            if !selected.is_empty() {
                on_load.emit((*selected).clone());
            }
        })
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            if selected.is_empty() {
                return;
            }
            if confirm(&format!("Delete saved list \"{}\"?", *selected)) {
                on_delete.emit((*selected).clone());
                selected.set(String::new());
            }
        })
    };

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
            <select class={styles::INPUT} onchange={on_preset_change}>
                <option value="" selected=true>{"Presets…"}</option>
                { for PRESETS.iter().map(|preset| html! {
                    <option value={preset.key}>{preset.name}</option>
                }) }
            </select>
            <button class={styles::BUTTON_SECONDARY} disabled={!props.can_save} onclick={on_save}>
                {"Save list"}
            </button>
            <select class={styles::INPUT} onchange={on_saved_change}>
                <option value="" selected={selected.is_empty()}>{"Saved lists…"}</option>
                { for props.saved_names.iter().map(|name| html! {
                    <option value={name.clone()} selected={*selected == *name}>{name}</option>
                }) }
            </select>
            <div class="flex gap-2">
                <button class={styles::BUTTON_SECONDARY} onclick={on_load}>{"Load"}</button>
                <button class={styles::BUTTON_DANGER} onclick={on_delete}>{"Delete"}</button>
            </div>
        </div>
    }
}
