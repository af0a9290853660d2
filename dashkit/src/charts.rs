use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::DashError;
use crate::types::{CountMap, ViewData};
use crate::view::SpecialStudentRow;

const BLUE_FILL: &str = "rgba(54, 162, 235, 0.6)";
const BLUE_BORDER: &str = "rgba(54, 162, 235, 1)";
const TEAL_FILL: &str = "rgba(75, 192, 192, 0.6)";
const TEAL_BORDER: &str = "rgba(75, 192, 192, 1)";
const RED_FILL: &str = "rgba(255, 99, 132, 0.6)";
const RED_BORDER: &str = "rgba(255, 99, 132, 1)";

/// Named chart position on the page. Holds at most one live chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Interaction,
    Participation,
    HorizontalInteraction,
    ParticipationOverTime,
    SpecialStudents,
}

impl ChartSlot {
    pub const COUNT: usize = 5;

    pub const ALL: [ChartSlot; Self::COUNT] = [
        ChartSlot::Interaction,
        ChartSlot::Participation,
        ChartSlot::HorizontalInteraction,
        ChartSlot::ParticipationOverTime,
        ChartSlot::SpecialStudents,
    ];

    /// Slots drawn for the aggregate and per-date views.
    pub const STANDARD: [ChartSlot; 4] = [
        ChartSlot::Interaction,
        ChartSlot::Participation,
        ChartSlot::HorizontalInteraction,
        ChartSlot::ParticipationOverTime,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartSlot::Interaction => "interactionChart",
            ChartSlot::Participation => "participationChart",
            ChartSlot::HorizontalInteraction => "horizontalInteractionChart",
            ChartSlot::ParticipationOverTime => "participationOverTimeChart",
            ChartSlot::SpecialStudents => "specialStudentsChart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Pie,
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: Option<String>,
    pub data: Vec<u64>,
    pub background: Vec<&'static str>,
    pub border: Vec<&'static str>,
}

/// Everything a charting library needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    /// Bar chart over every attendee in document order.
    pub fn interactions(counts: &CountMap, kind: ChartKind) -> Self {
        Self {
            kind,
            labels: counts.keys().cloned().collect(),
            datasets: vec![Dataset {
                label: Some("Number of Interactions".to_string()),
                data: counts.values().copied().collect(),
                background: vec![BLUE_FILL],
                border: vec![BLUE_BORDER],
            }],
        }
    }

    /// Uses the totals supplied by the document, not a recount of `interaction_counts`.
    pub fn participation(data: &ViewData) -> Self {
        Self {
            kind: ChartKind::Pie,
            labels: vec!["Participants".to_string(), "Non-Participants".to_string()],
            datasets: vec![Dataset {
                label: None,
                data: vec![data.total_participants, data.total_non_participants],
                background: vec![TEAL_FILL, RED_FILL],
                border: vec![TEAL_BORDER, RED_BORDER],
            }],
        }
    }

    pub fn participation_over_time(series: &CountMap) -> Self {
        Self {
            kind: ChartKind::Line,
            labels: series.keys().cloned().collect(),
            datasets: vec![Dataset {
                label: Some("Number of Participants".to_string()),
                data: series.values().copied().collect(),
                background: vec![],
                border: vec![TEAL_BORDER],
            }],
        }
    }

    pub fn special_students(rows: &[SpecialStudentRow]) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: rows.iter().map(|row| row.name.clone()).collect(),
            datasets: vec![Dataset {
                label: Some("Total Interactions".to_string()),
                data: rows.iter().map(|row| row.total_interactions).collect(),
                background: vec![BLUE_FILL],
                border: vec![BLUE_BORDER],
            }],
        }
    }

    /// Chart.js configuration object (`new Chart(canvas, config)`).
    pub fn to_chartjs_config(&self) -> Value {
        let chart_type = match self.kind {
            ChartKind::Bar | ChartKind::HorizontalBar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
        };

        let datasets: Vec<Value> = self
            .datasets
            .iter()
            .map(|dataset| self.dataset_config(dataset))
            .collect();

        let options = match self.kind {
            ChartKind::Bar | ChartKind::Line => json!({
                "responsive": true,
                "scales": { "y": { "beginAtZero": true } }
            }),
            ChartKind::HorizontalBar => json!({
                "responsive": true,
                "indexAxis": "y",
                "scales": { "x": { "beginAtZero": true } }
            }),
            ChartKind::Pie => json!({ "responsive": true }),
        };

        json!({
            "type": chart_type,
            "data": { "labels": self.labels, "datasets": datasets },
            "options": options
        })
    }

    fn dataset_config(&self, dataset: &Dataset) -> Value {
        let mut config = json!({ "data": dataset.data });
        if let Some(label) = &dataset.label {
            config["label"] = json!(label);
        }

        if self.kind == ChartKind::Line {
            config["fill"] = json!(false);
            config["borderColor"] = color_value(&dataset.border);
            config["tension"] = json!(0.1);
        } else {
            config["backgroundColor"] = color_value(&dataset.background);
            config["borderColor"] = color_value(&dataset.border);
            config["borderWidth"] = json!(1);
        }
        config
    }
}

fn color_value(colors: &[&str]) -> Value {
    match colors {
        [single] => json!(single),
        many => json!(many),
    }
}

/// A live chart instance. Destroying it frees the library's resources
/// and detaches it from its canvas.
pub trait ChartHandle {
    fn destroy(self);
}

/// The charting library as a capability.
pub trait ChartBackend {
    type Handle: ChartHandle;

    /// Fails with `DashError::MissingTarget` when the slot's canvas is absent.
    fn create(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Result<Self::Handle, DashError>;
}

/// Slot -> at most one live handle.
pub struct ChartRegistry<H> {
    slots: [Option<H>; ChartSlot::COUNT],
}

impl<H: ChartHandle> ChartRegistry<H> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Destroys whatever occupies `slot`, then draws `spec` there. The slot
    /// stays empty when creation fails.
    pub fn replace<B>(&mut self, backend: &mut B, slot: ChartSlot, spec: &ChartSpec) -> Result<(), DashError>
    where
        B: ChartBackend<Handle = H>,
    {
        self.release(slot);
        let handle = backend.create(slot, spec)?;
        self.slots[slot.index()] = Some(handle);
        Ok(())
    }

    /// Returns whether a chart was destroyed.
    pub fn release(&mut self, slot: ChartSlot) -> bool {
        match self.slots[slot.index()].take() {
            Some(handle) => {
                debug!("Destroying chart in slot {}", slot.canvas_id());
                handle.destroy();
                true
            }
            None => false,
        }
    }

    pub fn release_all_except(&mut self, keep: &[ChartSlot]) {
        for slot in ChartSlot::ALL {
            if !keep.contains(&slot) {
                self.release(slot);
            }
        }
    }

    pub fn is_live(&self, slot: ChartSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl<H: ChartHandle> Default for ChartRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the four standard charts. A failing slot is reported and skipped;
/// the remaining slots are still drawn.
pub fn render_charts<B: ChartBackend>(
    registry: &mut ChartRegistry<B::Handle>,
    backend: &mut B,
    data: &ViewData,
) -> Vec<DashError> {
    let charts = [
        (
            ChartSlot::Interaction,
            ChartSpec::interactions(&data.interaction_counts, ChartKind::Bar),
        ),
        (ChartSlot::Participation, ChartSpec::participation(data)),
        (
            ChartSlot::HorizontalInteraction,
            ChartSpec::interactions(&data.interaction_counts, ChartKind::HorizontalBar),
        ),
        (
            ChartSlot::ParticipationOverTime,
            ChartSpec::participation_over_time(&data.participation_over_time),
        ),
    ];

    charts
        .iter()
        .filter_map(|(slot, spec)| {
            registry
                .replace(backend, *slot, spec)
                .map_err(|e| {
                    warn!("Skipping chart {}: {}", slot.canvas_id(), e);
                    e
                })
                .err()
        })
        .collect()
}

pub fn render_special_students_chart<B: ChartBackend>(
    registry: &mut ChartRegistry<B::Handle>,
    backend: &mut B,
    rows: &[SpecialStudentRow],
) -> Result<(), DashError> {
    registry.replace(
        backend,
        ChartSlot::SpecialStudents,
        &ChartSpec::special_students(rows),
    )
}
