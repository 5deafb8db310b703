pub mod subscriptions;

use iced::widget::text_editor;
use vagdevi_core::{Field, SubmitError};

#[derive(Debug, Clone)]
pub enum Message {
    // Form input
    Edit(Field, String),
    /// Cursor movement or typing inside the message editor
    MessageAction(text_editor::Action),
    PrefillSubject(String),

    // Submission
    Submit,
    Delivered(Result<(), SubmitError>),
    DismissError,
    StartOver,

    /// Checks whether the confirmation should give way to the form again
    Tick,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Edit(_, _) => "Contact::Edit",
            Self::MessageAction(_) => "Contact::MessageAction",
            Self::PrefillSubject(_) => "Contact::PrefillSubject",
            Self::Submit => "Contact::Submit",
            Self::Delivered(_) => "Contact::Delivered",
            Self::DismissError => "Contact::DismissError",
            Self::StartOver => "Contact::StartOver",
            Self::Tick => "Contact::Tick",
        }
    }
}
