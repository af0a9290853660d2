use std::fmt::Write;

use html_escape::encode_text;

use crate::errors::DashError;
use crate::page::{Page, Target};
use crate::types::CountMap;
use crate::view::SpecialStudentRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRow {
    pub name: String,
    pub count: u64,
}

/// Ranking shown in the interaction table: zero counts dropped, then a
/// stable sort by count descending so ties keep document order.
pub fn interaction_rows(counts: &CountMap) -> Vec<InteractionRow> {
    let mut rows: Vec<InteractionRow> = counts
        .iter()
        .filter(|&(_, &count)| count > 0)
        .map(|(name, &count)| InteractionRow {
            name: name.clone(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Header row plus body rows, all cells as display text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableModel {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    pub fn interactions(rows: &[InteractionRow]) -> Self {
        Self {
            headers: vec!["Attendee", "Interaction Count"],
            rows: rows
                .iter()
                .map(|row| vec![row.name.clone(), row.count.to_string()])
                .collect(),
        }
    }

    pub fn special_students(rows: &[SpecialStudentRow]) -> Self {
        Self {
            headers: vec!["Student", "Sessions Attended", "Total Interactions"],
            rows: rows
                .iter()
                .map(|row| {
                    vec![
                        row.name.clone(),
                        row.sessions_attended.to_string(),
                        row.total_interactions.to_string(),
                    ]
                })
                .collect(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<table><thead><tr>");
        for header in &self.headers {
            let _ = write!(html, "<th>{}</th>", encode_text(header));
        }
        html.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                let _ = write!(html, "<td>{}</td>", encode_text(cell));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        html
    }
}

pub fn list_html<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().fold(String::new(), |mut html, item| {
        let _ = write!(html, "<li>{}</li>", encode_text(item.as_ref()));
        html
    })
}

/// Replaces the whole content of `target` with the interaction table.
pub fn render_main_table(
    page: &mut impl Page,
    target: Target,
    rows: &[InteractionRow],
) -> Result<(), DashError> {
    page.set_html(target, &TableModel::interactions(rows).to_html())
}

pub fn render_secondary_list<S: AsRef<str>>(
    page: &mut impl Page,
    target: Target,
    items: &[S],
) -> Result<(), DashError> {
    page.set_html(target, &list_html(items))
}

pub fn render_special_students_table(
    page: &mut impl Page,
    target: Target,
    rows: &[SpecialStudentRow],
) -> Result<(), DashError> {
    page.set_html(target, &TableModel::special_students(rows).to_html())
}
