//! Main application component.

use flames_rs::{Config, HistoryEntry, Session, trace, validate_names};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::components::{HistoryPanel, NameForm, ResultPanel};
use crate::storage::{self, load_history};

/// How long the flames burn before the result appears, shared with the CLI.
fn animation_ms() -> u32 {
    u32::try_from(Config::default().animation_delay.as_millis()).unwrap_or(u32::MAX)
}

/// Main application state.
#[derive(Clone, PartialEq, Default)]
pub struct AppState {
    pub name1: String,
    pub name2: String,
    /// Trimmed names waiting for the animation to finish.
    pub pending: Option<(String, String)>,
    /// Result sentence of the last reading.
    pub message: Option<String>,
    /// Elimination steps of the last reading.
    pub steps: Vec<String>,
    pub history: Vec<HistoryEntry>,
}

impl AppState {
    /// State once a pending reading resolves.
    ///
    /// Only result fields change; the name inputs keep what is in `self`.
    pub fn resolved(
        &self,
        message: String,
        steps: Vec<String>,
        history: Vec<HistoryEntry>,
    ) -> AppState {
        AppState {
            pending: None,
            message: Some(message),
            steps,
            history,
            ..self.clone()
        }
    }
}

fn local_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState {
        history: load_history(),
        ..AppState::default()
    });

    let on_name1 = {
        let state = state.clone();
        Callback::from(move |text: String| {
            let mut new_state = (*state).clone();
            new_state.name1 = text;
            state.set(new_state);
        })
    };

    let on_name2 = {
        let state = state.clone();
        Callback::from(move |text: String| {
            let mut new_state = (*state).clone();
            new_state.name2 = text;
            state.set(new_state);
        })
    };

    let on_calculate = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            if state.pending.is_some() {
                return;
            }
            match validate_names(&state.name1, &state.name2) {
                Ok(names) => {
                    let mut new_state = (*state).clone();
                    new_state.pending = Some(names);
                    state.set(new_state);
                }
                Err(e) => gloo::dialogs::alert(&e.to_string()),
            }
        })
    };

    let on_clear = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            if let Err(e) = storage::history().clear() {
                log::error!("Could not clear history: {e}");
                return;
            }
            let mut new_state = (*state).clone();
            new_state.history.clear();
            state.set(new_state);
        })
    };

    // Reveal timer: a pending request burns for the animation delay, then is computed
    {
        let state = state.clone();
        let pending = state.pending.clone();

        use_effect_with(pending, move |pending| {
            let timeout_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

            if let Some((name1, name2)) = pending.clone() {
                let handle = Timeout::new(animation_ms(), move || {
                    let mut session = Session::new(storage::history());
                    let (message, steps) =
                        match session.calculate(&name1, &name2, &local_timestamp()) {
                            Ok(reading) => (reading.message(), trace(&name1, &name2).lines()),
                            Err(e) => {
                                log::error!("Reading failed: {e}");
                                (e.to_string(), Vec::new())
                            }
                        };
                    // Name inputs are disabled while pending, so the snapshot's names are current
                    state.set(state.resolved(message, steps, load_history()));
                });
                *timeout_handle.borrow_mut() = Some(handle);
            }

            let cleanup_handle = timeout_handle.clone();
            move || {
                if let Some(handle) = cleanup_handle.borrow_mut().take() {
                    handle.cancel();
                }
            }
        });
    }

    html! {
        <div class="app">
            <header class="header">
                <h1>{ "FLAMES" }</h1>
                <p class="subtitle">{ "Friends \u{00B7} Lovers \u{00B7} Affectionate \u{00B7} Marriage \u{00B7} Enemies \u{00B7} Siblings" }</p>
            </header>

            <main class="main">
                <NameForm
                    name1={state.name1.clone()}
                    name2={state.name2.clone()}
                    on_name1={on_name1}
                    on_name2={on_name2}
                    on_calculate={on_calculate}
                    busy={state.pending.is_some()}
                />

                <ResultPanel
                    calculating={state.pending.is_some()}
                    message={state.message.clone()}
                    steps={state.steps.clone()}
                />

                <HistoryPanel
                    entries={state.history.clone()}
                    on_clear={on_clear}
                />
            </main>

            <footer class="footer">
                <span class="footer-build">
                    { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                </span>
            </footer>
        </div>
    }
}
