// services/rollcall-dash/src/components/panels.rs
//
// Roll Call Dashboard - Table and Chart Panels
// Static containers; their content is written by the render pipeline by element id.
//

use dashkit::{ChartSlot, Target, ViewKey};
use leptos::*;
use crate::state::DashState;

#[component]
pub fn ViewPanels(state: DashState) -> impl IntoView {
    let standard_display = move || {
        if state.current.get() == ViewKey::SpecialStudents { "none" } else { "" }
    };

    view! {
        <div class="dashboard-grid">
            <section class="panel table-panel">
                <h2 id=Target::PageTitle.element_id() class="panel-title"></h2>
                <div id=Target::InteractionTable.element_id() class="interaction-table"></div>
            </section>

            <section class="panel list-panel" style:display=standard_display>
                <h2 class="panel-title">"Non-Participants"</h2>
                <ul id=Target::NonParticipantsList.element_id() class="non-participants"></ul>
            </section>
        </div>

        <div class="dashboard-grid charts-grid" style:display=standard_display>
            <ChartPanel title="Interactions" chart=ChartSlot::Interaction />
            <ChartPanel title="Participation" chart=ChartSlot::Participation />
            <ChartPanel title="Interaction Distribution" chart=ChartSlot::HorizontalInteraction />
            <ChartPanel title="Participation Over Time" chart=ChartSlot::ParticipationOverTime />
        </div>
    }
}

#[component]
pub fn SpecialStudentsPanel(state: DashState) -> impl IntoView {
    let display = move || {
        if state.current.get() == ViewKey::SpecialStudents { "" } else { "none" }
    };

    view! {
        <div class="dashboard-grid" style:display=display>
            <ChartPanel title="Special Students" chart=ChartSlot::SpecialStudents />
        </div>
    }
}

#[component]
fn ChartPanel(title: &'static str, chart: ChartSlot) -> impl IntoView {
    view! {
        <section class="panel chart-panel">
            <h2 class="panel-title">{title}</h2>
            <canvas id=chart.canvas_id()></canvas>
        </section>
    }
}
