// services/rollcall-dash/src/components/mod.rs
//
// Roll Call Dashboard - UI Components
//

mod header;
mod nav;
mod panels;
mod log;

pub use header::Header;
pub use nav::NavLinks;
pub use panels::{SpecialStudentsPanel, ViewPanels};
pub use log::EventLog;
