mod list_controls;
mod option_chips;
mod stats_panel;
mod wheel_canvas;
mod wheel_utils;

use yew::prelude::*;
use web_sys::window;
use std::rc::{Rc, Weak};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use gloo::dialogs::confirm;
use spinpick_shared::{TickOutcome, WheelSession};
use crate::base::Base;
use crate::config::{now_ms, spin_config};
use crate::storage::BrowserStore;
use crate::styles;

use list_controls::ListControls;
use option_chips::OptionChips;
use stats_panel::StatsPanel;
use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultDisplay, SpinButton};

type SharedSession = Rc<RefCell<WheelSession<BrowserStore>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

type FrameHandle = Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Handle the frame closure keeps to its own slot. Weak, so the slot is freed
/// with the page.
fn frame_handle(callback: &FrameCallback) -> FrameHandle {
    Rc::downgrade(callback)
}

fn request_frame(callback: &FrameCallback) {
    if let (Some(window), Some(closure)) = (window(), callback.borrow().as_ref()) {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

/// Ticks the session once per animation frame until the spin lands.
fn start_animation(session: SharedSession, callback: FrameCallback, redraw: UseForceUpdateHandle) {
    let next = frame_handle(&callback);
    let closure = Closure::wrap(Box::new(move |now: f64| {
        let outcome = session.borrow_mut().tick(now);
        redraw.force_update();

        match outcome {
            TickOutcome::Frame { .. } => {
                if let Some(next) = next.upgrade() {
                    request_frame(&next);
                }
            }
            TickOutcome::Completed(outcome) => {
                log::debug!("Animation finished on {:?}", outcome.winner);
            }
            TickOutcome::Idle => {}
        }
    }) as Box<dyn FnMut(f64)>);

    // The previous spin's closure has already run its last frame
    *callback.borrow_mut() = Some(closure);
    request_frame(&callback);
}

#[function_component(WheelPage)]
pub fn wheel_page() -> Html {
    let session: SharedSession = use_mut_ref(|| WheelSession::load(BrowserStore::new(), spin_config()));
    let frame_callback: FrameCallback = use_mut_ref(|| None);
    let redraw = use_force_update();

    let on_spin = {
        let session = session.clone();
        let frame_callback = frame_callback.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            let started = session.borrow_mut().spin(now_ms(), &mut rand::thread_rng());
            if started.is_ok() {
                redraw.force_update();
                start_animation(session.clone(), frame_callback.clone(), redraw.clone());
            }
        })
    };

    let on_shuffle = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            if session.borrow_mut().shuffle(&mut rand::thread_rng()) {
                redraw.force_update();
            }
        })
    };

    let on_clear = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            if session.borrow_mut().clear_options() {
                redraw.force_update();
            }
        })
    };

    let on_add = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |label: String| {
            if session.borrow_mut().add_option(&label) {
                redraw.force_update();
            }
        })
    };

    let on_remove = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |idx: usize| {
            if session.borrow_mut().remove_option(idx).is_some() {
                redraw.force_update();
            }
        })
    };

    let on_preset = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |key: String| {
            if session.borrow_mut().load_preset(&key) {
                redraw.force_update();
            }
        })
    };

    let on_save_list = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |name: String| {
            if session.borrow_mut().save_list(&name) {
                redraw.force_update();
            }
        })
    };

    let on_load_list = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |name: String| {
            if session.borrow_mut().load_list(&name) {
                redraw.force_update();
            }
        })
    };

    let on_delete_list = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |name: String| {
            if session.borrow_mut().delete_list(&name) {
                redraw.force_update();
            }
        })
    };

    let on_reset_stats = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            if confirm("Reset results tracking? This clears counts and total spins.") {
                session.borrow_mut().reset_stats();
                redraw.force_update();
            }
        })
    };

    let on_toggle_theme = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            session.borrow_mut().toggle_theme();
            redraw.force_update();
        })
    };

    let state = session.borrow();
    let labels = state.options().labels().to_vec();
    let angle = state.angle();
    let is_spinning = state.is_spinning();
    let can_spin = state.can_spin();
    let can_shuffle = state.can_shuffle();
    let can_clear = state.can_clear();
    let can_save = !state.options().is_empty();
    let result_text = state.result_text().to_string();
    let can_copy = state.can_copy();
    let theme = state.theme();
    let saved_names = state.saved_list_names();
    let odds = state.odds();
    let results = state.results();
    let total_spins = state.total_spins();
    drop(state);

    html! {
        <Base {theme} {on_toggle_theme}>
            <div class="container mx-auto px-4 py-8">
                <h1 class="text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white">
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{"Spin-To-Pick"}</span>
                </h1>

                <div class={styles::PANEL}>
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                        <div>
                            <div class="relative mx-auto mb-6 flex justify-center items-center">
                                <div class="w-full max-w-[520px] mx-auto">
                                    <WheelCanvas labels={labels.clone()} {angle} {is_spinning} />
                                </div>
                            </div>

                            <div class="flex justify-center">
                                <div class="w-full max-w-[300px]">
                                    <SpinButton {is_spinning} disabled={!can_spin} onclick={on_spin} />
                                </div>
                            </div>

                            <ResultDisplay text={result_text} {can_copy} />
                        </div>

                        <div class="space-y-6">
                            <div class="flex gap-2">
                                <button class={styles::BUTTON_SECONDARY} disabled={!can_shuffle} onclick={on_shuffle}>
                                    {"Shuffle"}
                                </button>
                                <button class={styles::BUTTON_SECONDARY} disabled={!can_clear} onclick={on_clear}>
                                    {"Clear"}
                                </button>
                            </div>

                            <OptionChips {labels} {on_add} {on_remove} />

                            <ListControls
                                {saved_names}
                                {can_save}
                                {on_preset}
                                on_save={on_save_list}
                                on_load={on_load_list}
                                on_delete={on_delete_list}
                            />
                        </div>
                    </div>

                    <StatsPanel
                        {odds}
                        {results}
                        {total_spins}
                        on_reset={on_reset_stats}
                    />
                </div>
            </div>
        </Base>
    }
}
