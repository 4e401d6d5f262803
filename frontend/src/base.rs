use yew::prelude::*;
use web_sys::window;
use spinpick_shared::Theme;
use crate::styles;

pub fn apply_theme(theme: Theme) {
    if let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        html.set_class_name(theme.as_str());
    }
}

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    {
        let theme = props.theme;
        use_effect_with(theme, move |theme| {
            apply_theme(*theme);
            || ()
        });
    }

    let icon = match props.theme {
        Theme::Dark => "☀️",
        Theme::Light => "🌙",
    };

    html! {
        <div class={styles::CONTAINER}>
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <div class={styles::NAV_CONTENT}>
                        <span class={styles::NAV_BRAND}>{"Spin-To-Pick"}</span>
                        <button
                            class={styles::BUTTON_ICON}
                            aria-label="Toggle theme"
                            onclick={props.on_toggle_theme.clone()}
                        >
                            {icon}
                        </button>
                    </div>
                </div>
            </nav>
            <main class="pt-20 pb-10">
                {props.children.clone()}
            </main>
        </div>
    }
}
