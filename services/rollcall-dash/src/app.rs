// services/rollcall-dash/src/app.rs
//
// Roll Call Dashboard - Main Application Component
//

use std::cell::RefCell;
use std::rc::Rc;

use dashkit::{
    list_views, query_param, resolve_current_key, resolve_data_url, Dashboard, DashboardConfig,
    DocumentSource, HttpSource, RenderState,
};
use leptos::*;

use crate::chartjs::ChartJs;
use crate::components::{EventLog, Header, NavLinks, SpecialStudentsPanel, ViewPanels};
use crate::mock::DemoSource;
use crate::state::{DashState, LoadStatus};
use crate::web::{self, WebPage};

type WebDashboard = Dashboard<WebPage, ChartJs>;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let initial = resolve_current_key(&web::current_query(), &config.page_param);
    let state = DashState::new(initial, config.max_log_entries);
    let dashboard = Rc::new(RefCell::new(Dashboard::new(WebPage::new(), ChartJs::new())));

    spawn_local(load_document(state, Rc::clone(&dashboard), config.clone()));

    // Rerun the pipeline when the document arrives and on every view change
    let title_prefix = config.title_prefix.clone();
    create_effect(move |_| {
        let key = state.current.get();
        if !state.is_ready() {
            return;
        }

        let Ok(mut dash) = dashboard.try_borrow_mut() else {
            state.log("warn", &format!("Skipped rendering {}: dashboard busy", key));
            return;
        };
        let outcome = dash.render(&key);
        drop(dash);

        web::set_document_title(&format!("{} - {}", title_prefix, outcome.title()));
        if outcome.state == RenderState::NotFound {
            state.log("warn", &format!("No view named '{}'", key));
        }
        for issue in &outcome.issues {
            state.log("warn", &issue.to_string());
        }
    });

    // Browser back/forward
    let param = config.page_param.clone();
    window_event_listener(ev::popstate, move |_| {
        state.current.set(resolve_current_key(&web::current_query(), &param));
    });

    view! {
        <div class="rollcall-app">
            <Header state=state title=config.title_prefix.clone() />
            <NavLinks state=state param=config.page_param.clone() />

            <main class="dashboard">
                <ViewPanels state=state />
                <SpecialStudentsPanel state=state />

                <section class="panel log-panel">
                    <h2 class="panel-title">"Event Log"</h2>
                    <EventLog state=state />
                </section>
            </main>

            <footer class="footer">
                <span class="footer-brand">"📋 Roll Call"</span>
                <span class="footer-tagline">"Who spoke up, and when"</span>
            </footer>
        </div>
    }
}

fn demo_requested(config: &DashboardConfig) -> bool {
    config.demo
        || matches!(
            query_param(&web::current_query(), "demo").as_deref(),
            Some("1") | Some("true")
        )
}

/// Fetches (or generates) the document once and publishes the navigation links.
// Rendering is gated on LoadStatus, so nothing else borrows the dashboard while this awaits.
#[allow(clippy::await_holding_refcell_ref)]
async fn load_document(state: DashState, dashboard: Rc<RefCell<WebDashboard>>, config: DashboardConfig) {
    let demo = demo_requested(&config);

    let source: Box<dyn DocumentSource> = if demo {
        state.log("info", "Demo mode: generating a sample document");
        Box::new(DemoSource)
    } else {
        match web::current_href().and_then(|base| resolve_data_url(&base, &config.data_url)) {
            Ok(url) => {
                state.log("info", &format!("Loading {}", url));
                Box::new(HttpSource::new(url))
            }
            Err(e) => {
                state.status.set(LoadStatus::Failed);
                state.log("error", &format!("Could not load interaction data: {}", e));
                return;
            }
        }
    };

    let loaded = {
        let mut dash = dashboard.borrow_mut();
        dash.load(&*source).await.map(list_views)
    };

    match loaded {
        Ok(links) => {
            state.log("info", &format!("Loaded {} views", links.len()));
            state.links.set(links);
            state.status.set(if demo { LoadStatus::Demo } else { LoadStatus::Loaded });
        }
        Err(e) => {
            state.status.set(LoadStatus::Failed);
            state.log("error", &format!("Could not load interaction data: {}", e));
        }
    }
}
