use std::borrow::Cow;
use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};

use crate::types::{Document, SpecialStudents, ViewData};

/// Selected slice of the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Aggregate,
    SpecialStudents,
    /// A `by_date` key. Not validated; unknown dates resolve to `NotFound`.
    Date(String),
}

impl ViewKey {
    pub const AGGREGATE: &'static str = "aggregate";
    pub const SPECIAL_STUDENTS: &'static str = "special_students";

    pub fn from_param(value: &str) -> Self {
        match value {
            Self::AGGREGATE => ViewKey::Aggregate,
            Self::SPECIAL_STUDENTS => ViewKey::SpecialStudents,
            other => ViewKey::Date(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ViewKey::Aggregate => Self::AGGREGATE,
            ViewKey::SpecialStudents => Self::SPECIAL_STUDENTS,
            ViewKey::Date(date) => date,
        }
    }

    /// Navigation link text.
    pub fn label(&self) -> &str {
        match self {
            ViewKey::Aggregate => "Aggregate",
            ViewKey::SpecialStudents => "Special Students",
            ViewKey::Date(date) => date,
        }
    }

    /// Page heading shown while this view is selected.
    pub fn title(&self) -> String {
        match self {
            ViewKey::Aggregate => "Aggregate Data".to_string(),
            ViewKey::SpecialStudents => "Special Students".to_string(),
            ViewKey::Date(date) => format!("Data for {}", date),
        }
    }
}

impl Default for ViewKey {
    fn default() -> Self {
        ViewKey::Aggregate
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of projecting the document onto one view key.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Standard {
        key: ViewKey,
        data: Cow<'a, ViewData>,
    },
    SpecialStudents(&'a SpecialStudents),
    NotFound(ViewKey),
}

/// Pure projection of `document` for `key`. Never touches the page.
pub fn extract<'a>(document: &'a Document, key: &ViewKey) -> View<'a> {
    match key {
        ViewKey::Aggregate => {
            let data = match &document.aggregate {
                Some(aggregate) => Cow::Borrowed(aggregate),
                None => {
                    debug!("Document has no aggregate block, using empty view");
                    Cow::Owned(ViewData::default())
                }
            };
            View::Standard {
                key: key.clone(),
                data,
            }
        }
        ViewKey::SpecialStudents => View::SpecialStudents(&document.special_students),
        ViewKey::Date(date) => match document.by_date.get(date) {
            Some(data) => View::Standard {
                key: key.clone(),
                data: Cow::Borrowed(data),
            },
            None => View::NotFound(key.clone()),
        },
    }
}

/// One row of the special-students table and chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialStudentRow {
    pub name: String,
    pub sessions_attended: usize,
    pub total_interactions: u64,
}

/// Rows in document order. A malformed session value still counts as an
/// attended session but contributes nothing to the total.
pub fn special_student_rows(students: &SpecialStudents) -> Vec<SpecialStudentRow> {
    students
        .iter()
        .map(|(name, sessions)| match sessions {
            Value::Object(sessions) => {
                let total_interactions = sessions
                    .iter()
                    .map(|(session, count)| {
                        count.as_u64().unwrap_or_else(|| {
                            warn!(
                                "Ignoring malformed interaction count {} for {} in session {}",
                                count, name, session
                            );
                            0
                        })
                    })
                    .sum();
                SpecialStudentRow {
                    name: name.clone(),
                    sessions_attended: sessions.len(),
                    total_interactions,
                }
            }
            other => {
                warn!("Special student {} has no session mapping: {}", name, other);
                SpecialStudentRow {
                    name: name.clone(),
                    sessions_attended: 0,
                    total_interactions: 0,
                }
            }
        })
        .collect()
}
