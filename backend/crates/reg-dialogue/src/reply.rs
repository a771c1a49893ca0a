use crate::Keyboard;

use std::path::PathBuf;

/// What kind of outcome a reply reports. Lets transports and tests tell
/// prompts apart from refusals without matching on text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Welcome,
    Prompt,
    /// Input did not fit the current step; the step is asked again
    Reprompt,
    Confirmed,
    AlreadyRegistered,
    PhoneAlreadyUsed,
    Cancelled,
    Info,
    NotRegistered,
    Help,
    Hint,
    AdminList,
    AdminExport,
    Unauthorized,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Plain,
    Markdown,
}

/// File attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub caption: String,
    pub bytes: Vec<u8>,
}

/// Everything the transport needs to answer one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
    pub format: TextFormat,
    /// `None` leaves whatever keyboard the client shows untouched
    pub keyboard: Option<Keyboard>,
    pub photo: Option<PathBuf>,
    pub document: Option<Document>,
}

impl Reply {
    pub fn new(kind: ReplyKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            format: TextFormat::Plain,
            keyboard: None,
            photo: None,
            document: None,
        }
    }

    pub fn markdown(mut self) -> Self {
        self.format = TextFormat::Markdown;
        self
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn with_photo(mut self, photo: impl Into<PathBuf>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.document = Some(document);
        self
    }

    pub fn failure() -> Self {
        Self::new(ReplyKind::Failure, crate::texts::FAILURE)
    }
}
