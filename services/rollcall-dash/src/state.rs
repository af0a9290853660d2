// services/rollcall-dash/src/state.rs
//
// Roll Call Dashboard - Reactive State Management
//

use dashkit::{ViewKey, ViewLink};
use leptos::*;
use serde::{Deserialize, Serialize};

/// Where the summary document stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Demo,
    Failed,
}

impl Default for LoadStatus {
    fn default() -> Self {
        Self::Loading
    }
}

/// Log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String, // "info", "warn", "error"
    pub message: String,
}

/// Main application state
/// All fields are RwSignal which is Copy, so DashState is Copy
#[derive(Clone, Copy)]
pub struct DashState {
    // Navigation entries, known once the document has loaded
    pub links: RwSignal<Vec<ViewLink>>,

    // Currently selected view
    pub current: RwSignal<ViewKey>,

    pub status: RwSignal<LoadStatus>,

    // Event log
    pub logs: RwSignal<Vec<LogEntry>>,
    pub max_logs: StoredValue<usize>,
}

impl DashState {
    pub fn new(initial: ViewKey, max_logs: usize) -> Self {
        Self {
            links: create_rw_signal(vec![]),
            current: create_rw_signal(initial),
            status: create_rw_signal(LoadStatus::Loading),
            logs: create_rw_signal(vec![]),
            max_logs: store_value(max_logs.max(1)),
        }
    }

    /// True once a document (fetched or generated) is available.
    pub fn is_ready(&self) -> bool {
        matches!(self.status.get(), LoadStatus::Loaded | LoadStatus::Demo)
    }

    /// Add a log entry
    pub fn log(&self, level: &str, message: &str) {
        match level {
            "error" => log::error!("{}", message),
            "warn" => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }

        let entry = LogEntry {
            timestamp: js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default(),
            level: level.to_string(),
            message: message.to_string(),
        };

        let max_logs = self.max_logs.get_value();
        self.logs.update(|logs| {
            logs.push(entry);
            if logs.len() > max_logs {
                logs.remove(0);
            }
        });
    }
}
