//! UI Components for the FLAMES page.

use flames_rs::HistoryEntry;
use yew::prelude::*;

/// Name entry form.
#[derive(Properties, PartialEq)]
pub struct NameFormProps {
    pub name1: String,
    pub name2: String,
    pub on_name1: Callback<String>,
    pub on_name2: Callback<String>,
    pub on_calculate: Callback<()>,
    /// Disables the inputs and button while a result is pending.
    pub busy: bool,
}

#[function_component(NameForm)]
pub fn name_form(props: &NameFormProps) -> Html {
    let input_handler = |cb: &Callback<String>| {
        let cb = cb.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            cb.emit(target.value());
        })
    };

    let on_keydown = {
        let on_calculate = props.on_calculate.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_calculate.emit(());
            }
        })
    };

    let on_click = {
        let on_calculate = props.on_calculate.clone();
        Callback::from(move |_: MouseEvent| on_calculate.emit(()))
    };

    html! {
        <div class="panel name-form">
            <input
                id="name1"
                type="text"
                placeholder="Your name"
                value={props.name1.clone()}
                oninput={input_handler(&props.on_name1)}
                onkeydown={on_keydown.clone()}
                disabled={props.busy}
            />
            <input
                id="name2"
                type="text"
                placeholder="Their name"
                value={props.name2.clone()}
                oninput={input_handler(&props.on_name2)}
                onkeydown={on_keydown}
                disabled={props.busy}
            />
            <button id="calculate-btn" onclick={on_click} disabled={props.busy}>
                { "Calculate" }
            </button>
        </div>
    }
}

/// Flame animation while pending, then the result sentence.
#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub calculating: bool,
    pub message: Option<String>,
    pub steps: Vec<String>,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    html! {
        <div class="panel result-panel">
            if props.calculating {
                <div id="flame-animation" class="flame-animation">
                    <span class="flame f0">{ "🔥" }</span>
                    <span class="flame f1">{ "🔥" }</span>
                    <span class="flame f2">{ "🔥" }</span>
                </div>
            } else if let Some(message) = &props.message {
                <p id="result-text" class="result-text">{ message }</p>
                if !props.steps.is_empty() {
                    <details class="steps">
                        <summary>{ "How was this worked out?" }</summary>
                        <pre>{ props.steps.join("\n") }</pre>
                    </details>
                }
            }
        </div>
    }
}

/// Recent readings with a clear button.
#[derive(Properties, PartialEq)]
pub struct HistoryPanelProps {
    pub entries: Vec<HistoryEntry>,
    pub on_clear: Callback<()>,
}

#[function_component(HistoryPanel)]
pub fn history_panel(props: &HistoryPanelProps) -> Html {
    let on_clear_click = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <div class="panel history-panel">
            <div class="panel-header">
                <h2>{ "History" }</h2>
                if !props.entries.is_empty() {
                    <button id="clear-history-btn" class="clear-button" onclick={on_clear_click}>
                        { "Clear History" }
                    </button>
                }
            </div>
            <ul id="history-list">
                if props.entries.is_empty() {
                    <li>{ "No history yet. Start calculating!" }</li>
                } else {
                    { for props.entries.iter().map(|entry| html! {
                        <li>
                            <strong>{ format!("{} & {}", entry.name1, entry.name2) }</strong>
                            { format!(": {} ", entry.result.label()) }
                            <span class="timestamp">{ format!("({})", entry.timestamp) }</span>
                        </li>
                    })}
                }
            </ul>
        </div>
    }
}
