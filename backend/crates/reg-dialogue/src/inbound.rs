/// A shared phone contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub phone_number: String,
    /// Identity of the user the contact belongs to, when the transport knows it
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Contact(Contact),
}

/// One inbound user message as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    /// Identity of the sender
    pub identity: String,
    pub payload: Payload,
}

impl Inbound {
    pub fn text(identity: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            payload: Payload::Text(text.into()),
        }
    }

    pub fn contact(
        identity: impl Into<String>,
        phone_number: impl Into<String>,
        owner: Option<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            payload: Payload::Contact(Contact {
                phone_number: phone_number.into(),
                owner,
            }),
        }
    }

    /// Trimmed text, if this is a text message
    pub fn trimmed_text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(text) => Some(text.trim()),
            Payload::Contact(_) => None,
        }
    }
}
