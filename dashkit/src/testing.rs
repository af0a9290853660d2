// Recording fakes for the page, chart and document-source capabilities,
// plus an error-event counter for the logging side.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

use crate::charts::{ChartBackend, ChartHandle, ChartSlot, ChartSpec};
use crate::errors::DashError;
use crate::page::{Page, Target};
use crate::source::DocumentSource;
use crate::types::Document;

#[derive(Default)]
pub struct RecordingPage {
    pub content: HashMap<Target, String>,
    pub absent: Vec<Target>,
    pub calls: usize,
}

impl Page for RecordingPage {
    fn set_html(&mut self, target: Target, html: &str) -> Result<(), DashError> {
        self.calls += 1;
        if self.absent.contains(&target) {
            return Err(DashError::MissingTarget(target.element_id().to_string()));
        }
        self.content.insert(target, html.to_string());
        Ok(())
    }

    fn set_text(&mut self, target: Target, text: &str) -> Result<(), DashError> {
        self.set_html(target, text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    Created { slot: ChartSlot, id: u32 },
    Destroyed { slot: ChartSlot, id: u32 },
}

impl ChartEvent {
    fn slot(&self) -> ChartSlot {
        match self {
            ChartEvent::Created { slot, .. } | ChartEvent::Destroyed { slot, .. } => *slot,
        }
    }
}

#[derive(Default)]
pub struct RecordingCharts {
    events: Rc<RefCell<Vec<ChartEvent>>>,
    specs: HashMap<ChartSlot, ChartSpec>,
    missing: Vec<ChartSlot>,
    next_id: u32,
}

impl RecordingCharts {
    pub fn with_missing(missing: &[ChartSlot]) -> Self {
        Self {
            missing: missing.to_vec(),
            ..Default::default()
        }
    }

    pub fn events_for(&self, slot: ChartSlot) -> Vec<ChartEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.slot() == slot)
            .cloned()
            .collect()
    }

    pub fn created(&self, slot: ChartSlot) -> usize {
        self.events_for(slot)
            .iter()
            .filter(|event| matches!(event, ChartEvent::Created { .. }))
            .count()
    }

    pub fn destroyed(&self, slot: ChartSlot) -> usize {
        self.events_for(slot).len() - self.created(slot)
    }

    pub fn total_created(&self) -> usize {
        ChartSlot::ALL.iter().map(|slot| self.created(*slot)).sum()
    }

    pub fn live_handles(&self) -> usize {
        ChartSlot::ALL
            .iter()
            .map(|slot| self.created(*slot) - self.destroyed(*slot))
            .sum()
    }

    pub fn last_spec(&self, slot: ChartSlot) -> Option<&ChartSpec> {
        self.specs.get(&slot)
    }
}

pub struct RecordingHandle {
    slot: ChartSlot,
    id: u32,
    events: Rc<RefCell<Vec<ChartEvent>>>,
}

impl ChartHandle for RecordingHandle {
    fn destroy(self) {
        self.events.borrow_mut().push(ChartEvent::Destroyed {
            slot: self.slot,
            id: self.id,
        });
    }
}

impl ChartBackend for RecordingCharts {
    type Handle = RecordingHandle;

    fn create(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Result<RecordingHandle, DashError> {
        if self.missing.contains(&slot) {
            return Err(DashError::MissingTarget(slot.canvas_id().to_string()));
        }
        self.next_id += 1;
        self.events.borrow_mut().push(ChartEvent::Created {
            slot,
            id: self.next_id,
        });
        self.specs.insert(slot, spec.clone());
        Ok(RecordingHandle {
            slot,
            id: self.next_id,
            events: Rc::clone(&self.events),
        })
    }
}

/// Either a JSON body or a failing HTTP status.
pub struct StaticSource {
    response: Result<String, u16>,
    pub fetches: Cell<usize>,
}

impl StaticSource {
    pub fn body(json: &str) -> Self {
        Self {
            response: Ok(json.to_string()),
            fetches: Cell::new(0),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            response: Err(code),
            fetches: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl DocumentSource for StaticSource {
    async fn fetch_document(&self) -> Result<Document, DashError> {
        self.fetches.set(self.fetches.get() + 1);
        match &self.response {
            Ok(body) => Document::from_json(body),
            Err(code) => Err(DashError::HttpStatus(*code)),
        }
    }
}

/// Counts `ERROR` events seen by the current thread's subscriber.
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Installs an error counter for the current thread until the guard drops.
pub fn capture_errors() -> (Arc<AtomicUsize>, DefaultGuard) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = Registry::default().with(ErrorCounter(Arc::clone(&count)));
    (count, tracing::subscriber::set_default(subscriber))
}

mod tests {
    use super::*;

    #[test]
    fn test_capture_errors_counts_only_errors() {
        let (errors, _guard) = capture_errors();
        tracing::warn!("not counted");
        tracing::error!("counted");
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }
}
