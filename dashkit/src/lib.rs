//! Data shaping and rendering pipeline for the attendee interaction
//! dashboard. The page, the charting library and the document source are
//! capabilities behind traits so the whole pipeline runs without a browser.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod navigation;
pub mod page;
pub mod source;
pub mod tables;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use charts::{ChartBackend, ChartHandle, ChartKind, ChartRegistry, ChartSlot, ChartSpec};
pub use config::{load_config, resolve_data_url, DashboardConfig};
pub use dashboard::{Dashboard, RenderOutcome, RenderState};
pub use errors::DashError;
pub use navigation::{list_views, query_param, resolve_current_key, ViewLink};
pub use page::{Page, Target};
pub use source::{DocumentSource, HttpSource};
pub use types::{Document, ViewData};
pub use view::{extract, View, ViewKey};
