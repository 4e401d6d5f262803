use yew::prelude::*;
use spinpick_shared::constants::{EMPTY_ODDS_MESSAGE, EMPTY_RESULTS_MESSAGE};
use spinpick_shared::views::{OddsRow, ResultRow};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub odds: Vec<OddsRow>,
    pub results: Vec<ResultRow>,
    pub total_spins: u64,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let odds = if props.odds.is_empty() {
        html! { <div class={styles::TEXT_SMALL}>{EMPTY_ODDS_MESSAGE}</div> }
    } else {
        html! {
            <>{ for props.odds.iter().enumerate().map(|(idx, row)| html! {
                <div key={format!("{}-{}", idx, row.label)} class={styles::STATS_ROW}>
                    <div>{&row.label}</div>
                    <div class="font-semibold">{&row.percent}</div>
                    <div class={styles::BADGE}>{&row.badge}</div>
                </div>
            }) }</>
        }
    };

    let results = if props.results.is_empty() {
        html! { <div class={styles::TEXT_SMALL}>{EMPTY_RESULTS_MESSAGE}</div> }
    } else {
        html! {
            <>{ for props.results.iter().enumerate().map(|(idx, row)| html! {
                <div key={format!("{}-{}", idx, row.label)} class={styles::STATS_ROW}>
                    <div>{&row.label}</div>
                    <div class="font-semibold">{row.count}</div>
                    <div class={styles::BADGE}>{&row.percent}</div>
                </div>
            }) }</>
        }
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-8">
            <div class={styles::CARD}>
                <h3 class={styles::CARD_TITLE}>{"Odds"}</h3>
                <div class="mt-3 space-y-1">{odds}</div>
            </div>
            <div class={styles::CARD}>
                <div class="flex items-center justify-between">
                    <h3 class={styles::CARD_TITLE}>{"Results"}</h3>
                    <button class={styles::BUTTON_DANGER} onclick={props.on_reset.clone()}>
                        {"Reset stats"}
                    </button>
                </div>
                <div class="mt-3 space-y-1">{results}</div>
                <div class={classes!("mt-4", styles::TEXT_SMALL)}>
                    {format!("Total spins: {}", props.total_spins)}
                </div>
            </div>
        </div>
    }
}
