/// Where a session stands in the registration dialogue.
///
/// Captured fields live only here and are dropped on completion or cancel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingName,
    AwaitingPhone {
        full_name: String,
    },
    AwaitingRegion {
        full_name: String,
        phone: String,
    },
    Done,
}

impl SessionState {
    /// True while a registration is being collected
    pub fn in_conversation(&self) -> bool {
        matches!(
            self,
            Self::AwaitingName | Self::AwaitingPhone { .. } | Self::AwaitingRegion { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingName => "awaiting_name",
            Self::AwaitingPhone { .. } => "awaiting_phone",
            Self::AwaitingRegion { .. } => "awaiting_region",
            Self::Done => "done",
        }
    }
}
