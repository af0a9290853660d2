use crate::errors::DashError;

/// Non-chart regions of the page the pipeline writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    PageTitle,
    InteractionTable,
    NonParticipantsList,
}

impl Target {
    pub const ALL: [Target; 3] = [
        Target::PageTitle,
        Target::InteractionTable,
        Target::NonParticipantsList,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Target::PageTitle => "page-title",
            Target::InteractionTable => "interaction-table",
            Target::NonParticipantsList => "non-participants-list",
        }
    }
}

/// The DOM as the pipeline sees it: look an element up by id and replace
/// its content. Implementations return `DashError::MissingTarget` when
/// the element is absent from the current layout.
pub trait Page {
    fn set_html(&mut self, target: Target, html: &str) -> Result<(), DashError>;

    fn set_text(&mut self, target: Target, text: &str) -> Result<(), DashError>;
}
