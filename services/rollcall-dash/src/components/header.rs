// services/rollcall-dash/src/components/header.rs
//
// Roll Call Dashboard - Header Component
//

use leptos::*;
use crate::state::{DashState, LoadStatus};

#[component]
pub fn Header(state: DashState, title: String) -> impl IntoView {
    let status = move || state.status.get();

    let status_text = move || match status() {
        LoadStatus::Loading => "○ Loading",
        LoadStatus::Loaded => "● Live data",
        LoadStatus::Demo => "● Demo data",
        LoadStatus::Failed => "✗ Data unavailable",
    };

    let status_class = move || match status() {
        LoadStatus::Loading => "connection-status loading",
        LoadStatus::Loaded => "connection-status connected",
        LoadStatus::Demo => "connection-status demo",
        LoadStatus::Failed => "connection-status failed",
    };

    view! {
        <header class="header">
            <div class="header-brand">
                <span class="header-icon">"📋"</span>
                <h1 class="header-title">{title}</h1>
                <span class="header-subtitle">"Attendee interactions"</span>
            </div>

            <div class="header-actions">
                <span class=status_class>{status_text}</span>
            </div>
        </header>
    }
}
