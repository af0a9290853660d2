// Page orchestrator: fetch once, then project and render per view key.

use tracing::{info, warn};

use crate::charts::{render_charts, render_special_students_chart, ChartBackend, ChartRegistry, ChartSlot};
use crate::errors::DashError;
use crate::page::{Page, Target};
use crate::source::DocumentSource;
use crate::tables::{interaction_rows, render_main_table, render_secondary_list, render_special_students_table};
use crate::types::Document;
use crate::view::{extract, special_student_rows, View, ViewKey};

pub const NOT_FOUND_TITLE: &str = "Page Not Found";

/// Which branch of the pipeline ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// No document yet; nothing was touched.
    NotLoaded,
    Standard,
    SpecialStudents,
    NotFound,
}

#[derive(Debug)]
pub struct RenderOutcome {
    pub key: ViewKey,
    pub state: RenderState,
    /// Contained failures (missing targets, chart errors). Siblings still rendered.
    pub issues: Vec<DashError>,
}

impl RenderOutcome {
    pub fn title(&self) -> String {
        match self.state {
            RenderState::NotFound => NOT_FOUND_TITLE.to_string(),
            _ => self.key.title(),
        }
    }
}

pub struct Dashboard<P, C: ChartBackend> {
    page: P,
    charts: C,
    registry: ChartRegistry<C::Handle>,
    document: Option<Document>,
}

impl<P: Page, C: ChartBackend> Dashboard<P, C> {
    pub fn new(page: P, charts: C) -> Self {
        Self {
            page,
            charts,
            registry: ChartRegistry::new(),
            document: None,
        }
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn charts(&self) -> &C {
        &self.charts
    }

    pub fn registry(&self) -> &ChartRegistry<C::Handle> {
        &self.registry
    }

    /// Fetches the document unless one is already held. A failure is handed
    /// back to the caller, which reports it; nothing is retried.
    pub async fn load<S>(&mut self, source: &S) -> Result<&Document, DashError>
    where
        S: DocumentSource + ?Sized,
    {
        if self.document.is_none() {
            let document = source.fetch_document().await?;
            info!(
                "Loaded interaction data: {} dates, {} special students",
                document.by_date.len(),
                document.special_students.len()
            );
            self.document = Some(document);
        }
        self.document
            .as_ref()
            .ok_or_else(|| DashError::Unknown("document missing after load".to_string()))
    }

    /// Seeds the dashboard with a document that did not come from a source.
    pub fn set_document(&mut self, document: Document) {
        self.document = Some(document);
    }

    /// Load, then render `key`. A fetch failure renders nothing.
    pub async fn start<S>(&mut self, source: &S, key: &ViewKey) -> Result<RenderOutcome, DashError>
    where
        S: DocumentSource + ?Sized,
    {
        self.load(source).await?;
        Ok(self.render(key))
    }

    /// Runs the synchronous part of the pipeline for one navigation event.
    pub fn render(&mut self, key: &ViewKey) -> RenderOutcome {
        let Self {
            page,
            charts,
            registry,
            document,
        } = self;

        let Some(document) = document.as_ref() else {
            warn!("Render of {} requested before the document loaded", key);
            return RenderOutcome {
                key: key.clone(),
                state: RenderState::NotLoaded,
                issues: Vec::new(),
            };
        };

        let mut issues = Vec::new();
        let state = match extract(document, key) {
            View::NotFound(_) => {
                info!("No view named {}", key);
                record(&mut issues, page.set_text(Target::PageTitle, NOT_FOUND_TITLE));
                record(&mut issues, page.set_html(Target::InteractionTable, ""));
                record(&mut issues, page.set_html(Target::NonParticipantsList, ""));
                registry.release_all_except(&[]);
                RenderState::NotFound
            }
            View::SpecialStudents(students) => {
                let rows = special_student_rows(students);
                record(&mut issues, page.set_text(Target::PageTitle, &key.title()));
                record(
                    &mut issues,
                    render_special_students_table(page, Target::InteractionTable, &rows),
                );
                record(
                    &mut issues,
                    render_secondary_list(page, Target::NonParticipantsList, &[""; 0]),
                );
                registry.release_all_except(&[ChartSlot::SpecialStudents]);
                record(
                    &mut issues,
                    render_special_students_chart(registry, charts, &rows),
                );
                RenderState::SpecialStudents
            }
            View::Standard { key, data } => {
                record(&mut issues, page.set_text(Target::PageTitle, &key.title()));
                record(
                    &mut issues,
                    render_main_table(
                        page,
                        Target::InteractionTable,
                        &interaction_rows(&data.interaction_counts),
                    ),
                );
                record(
                    &mut issues,
                    render_secondary_list(page, Target::NonParticipantsList, &data.non_participants),
                );
                registry.release_all_except(&ChartSlot::STANDARD);
                issues.extend(render_charts(registry, charts, &data));
                RenderState::Standard
            }
        };

        RenderOutcome {
            key: key.clone(),
            state,
            issues,
        }
    }
}

fn record(issues: &mut Vec<DashError>, result: Result<(), DashError>) {
    if let Err(e) = result {
        warn!("Render step skipped: {}", e);
        issues.push(e);
    }
}
