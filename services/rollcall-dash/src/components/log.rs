// services/rollcall-dash/src/components/log.rs
//
// Roll Call Dashboard - Event Log Component
// Operator-visible record of fetch failures and skipped render targets.
//

use leptos::*;
use crate::state::{DashState, LogEntry};

#[component]
pub fn EventLog(state: DashState) -> impl IntoView {
    let logs = move || state.logs.get();
    let problems = move || {
        logs()
            .iter()
            .filter(|entry| entry.level != "info")
            .count()
    };

    view! {
        <div class="log-container">
            <div class="log-summary">
                {move || match problems() {
                    0 => "No problems reported".to_string(),
                    1 => "1 problem reported".to_string(),
                    n => format!("{} problems reported", n),
                }}
            </div>
            <div class="log-scroll">
                <Show
                    when=move || !logs().is_empty()
                    fallback=|| view! { <div class="log-empty">"Waiting for events…"</div> }
                >
                    <For
                        each=move || { logs().into_iter().rev().collect::<Vec<_>>() }
                        key=|entry: &LogEntry| format!("{}-{}", entry.timestamp, entry.message)
                        children=move |entry| view! { <LogLine entry=entry /> }
                    />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn LogLine(entry: LogEntry) -> impl IntoView {
    let (level_class, level_icon) = match entry.level.as_str() {
        "error" => ("log-error", "✗"),
        "warn" => ("log-warn", "⚠"),
        _ => ("log-info", "●"),
    };

    view! {
        <div class=format!("log-entry {}", level_class)>
            <span class="log-time">{time_of_day(&entry.timestamp)}</span>
            <span class="log-icon">{level_icon}</span>
            <span class="log-message">{entry.message}</span>
        </div>
    }
}

/// `2024-09-03T14:05:09.123Z` -> `14:05:09`
fn time_of_day(timestamp: &str) -> String {
    timestamp
        .split('T')
        .nth(1)
        .and_then(|t| t.split('.').next())
        .unwrap_or(timestamp)
        .to_string()
}
