//! Registration dialogue: turns one inbound message into one reply.

use crate::keyboard::{BTN_ADMIN_EXPORT, BTN_ADMIN_LIST, BTN_HELP, BTN_JOIN, BTN_MY_INFO};
use crate::{Inbound, Keyboard, Payload, Reply, ReplyKind, SessionRegistry, SessionState};
use crate::{admin, texts};

use reg_config::{AdminConfig, DialogueConfig};
use reg_core::{Region, is_valid_full_name, normalize_phone};
use reg_ledger::{Ledger, LedgerError};

use log::{debug, error, warn};

const CMD_START: &str = "/start";
const CMD_CANCEL: &str = "/cancel";
const CMD_EXPORT: &str = "/export";

/// Drives each session through name, phone and region, then writes the
/// registration to the [`Ledger`].
///
/// Messages for one session are handled one at a time; different sessions
/// run concurrently and only meet inside the ledger.
pub struct DialogueController {
    ledger: Ledger,
    sessions: SessionRegistry,
    admin: AdminConfig,
    settings: DialogueConfig,
}

impl DialogueController {
    pub fn new(ledger: Ledger, admin: AdminConfig, settings: DialogueConfig) -> Self {
        Self {
            ledger,
            sessions: SessionRegistry::new(),
            admin,
            settings,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub async fn state_of(&self, session_id: &str) -> SessionState {
        self.sessions.state_of(session_id).await
    }

    /// Sessions holding state, mid-conversation or waiting for their lock
    pub async fn open_sessions(&self) -> usize {
        self.sessions.len().await
    }

    pub async fn on_user_message(&self, session_id: &str, inbound: Inbound) -> Reply {
        let session = self.sessions.session(session_id).await;
        let reply = {
            let mut state = session.lock().await;

            let before = state.name();
            let reply = self.dispatch(&mut state, &inbound).await;
            if before != state.name() {
                debug!(
                    "Session {session_id}: {before} -> {} ({:?})",
                    state.name(),
                    reply.kind
                );
            }
            reply
        };

        drop(session);
        self.sessions.evict_if_settled(session_id).await;
        reply
    }

    async fn dispatch(&self, state: &mut SessionState, inbound: &Inbound) -> Reply {
        let identity = inbound.identity.trim();

        match inbound.trimmed_text() {
            Some(CMD_CANCEL) => {
                *state = SessionState::Idle;
                return Reply::new(ReplyKind::Cancelled, texts::CANCELLED)
                    .with_keyboard(Keyboard::Welcome);
            }
            Some(CMD_START) => {
                *state = SessionState::Idle;
                return self.start(identity).await;
            }
            Some(BTN_JOIN) => return self.join(state, identity).await,
            Some(CMD_EXPORT) => {
                return admin::export(&self.ledger, &self.admin, &self.settings, identity).await;
            }
            _ => {}
        }

        match *state {
            SessionState::AwaitingName => self.on_name(state, inbound),
            SessionState::AwaitingPhone { .. } => self.on_phone(state, inbound).await,
            SessionState::AwaitingRegion { .. } => self.on_region(state, inbound).await,
            SessionState::Idle | SessionState::Done => self.on_idle(identity, inbound).await,
        }
    }

    async fn start(&self, identity: &str) -> Reply {
        match self.ledger.find_by_identity(identity).await {
            Ok(Some(_)) => {
                Reply::new(ReplyKind::AlreadyRegistered, texts::ALREADY_REGISTERED_START)
                    .with_keyboard(self.registered_keyboard(identity))
            }
            Ok(None) => {
                let reply =
                    Reply::new(ReplyKind::Welcome, texts::WELCOME).with_keyboard(Keyboard::Welcome);
                let image = &self.settings.welcome_image;
                match tokio::fs::try_exists(image).await {
                    Ok(true) => reply.with_photo(image),
                    Ok(false) => reply,
                    Err(e) => {
                        warn!("Cannot check welcome image {image}: {e}");
                        reply
                    }
                }
            }
            Err(e) => {
                error!("Lookup failed on start for {identity}: {e}");
                Reply::failure()
            }
        }
    }

    async fn join(&self, state: &mut SessionState, identity: &str) -> Reply {
        match self.ledger.find_by_identity(identity).await {
            Ok(Some(_)) => {
                *state = SessionState::Idle;
                Reply::new(ReplyKind::AlreadyRegistered, texts::ALREADY_REGISTERED_JOIN)
                    .with_keyboard(self.registered_keyboard(identity))
            }
            Ok(None) => {
                *state = SessionState::AwaitingName;
                Reply::new(ReplyKind::Prompt, texts::ASK_NAME).with_keyboard(Keyboard::Remove)
            }
            Err(e) => {
                error!("Lookup failed on join for {identity}: {e}");
                Reply::failure()
            }
        }
    }

    fn on_name(&self, state: &mut SessionState, inbound: &Inbound) -> Reply {
        match inbound.trimmed_text() {
            Some(name) if is_valid_full_name(name) => {
                *state = SessionState::AwaitingPhone {
                    full_name: name.to_string(),
                };
                Reply::new(ReplyKind::Prompt, texts::ASK_PHONE)
                    .with_keyboard(Keyboard::ContactShare)
            }
            _ => Reply::new(ReplyKind::Reprompt, texts::INVALID_NAME),
        }
    }

    async fn on_phone(&self, state: &mut SessionState, inbound: &Inbound) -> Reply {
        let SessionState::AwaitingPhone { full_name } = &mut *state else {
            return Reply::failure();
        };
        let identity = inbound.identity.trim();

        let Payload::Contact(contact) = &inbound.payload else {
            return Reply::new(ReplyKind::Reprompt, texts::PHONE_VIA_BUTTON)
                .markdown()
                .with_keyboard(Keyboard::ContactShare);
        };

        if let Some(owner) = contact.owner.as_deref().map(str::trim)
            && owner != identity
        {
            debug!("Identity {identity} shared a contact owned by {owner}");
            return Reply::new(ReplyKind::Reprompt, texts::FOREIGN_CONTACT)
                .markdown()
                .with_keyboard(Keyboard::ContactShare);
        }

        let phone = normalize_phone(&contact.phone_number);
        if phone.is_empty() {
            return Reply::new(ReplyKind::Reprompt, texts::PHONE_UNREADABLE)
                .with_keyboard(Keyboard::ContactShare);
        }

        match self.ledger.find_by_phone(&phone).await {
            Ok(Some(existing)) if existing.belongs_to(identity) => {
                *state = SessionState::Done;
                Reply::new(ReplyKind::AlreadyRegistered, texts::ALREADY_REGISTERED)
                    .with_keyboard(self.registered_keyboard(identity))
            }
            Ok(Some(_)) => {
                *state = SessionState::Done;
                Reply::new(ReplyKind::PhoneAlreadyUsed, texts::PHONE_ALREADY_USED)
                    .with_keyboard(self.registered_keyboard(identity))
            }
            Ok(None) => {
                *state = SessionState::AwaitingRegion {
                    full_name: std::mem::take(full_name),
                    phone,
                };
                Reply::new(ReplyKind::Prompt, texts::ASK_REGION).with_keyboard(Keyboard::Regions)
            }
            Err(e) => {
                error!("Phone lookup failed for {identity}: {e}");
                Reply::failure()
            }
        }
    }

    async fn on_region(&self, state: &mut SessionState, inbound: &Inbound) -> Reply {
        let SessionState::AwaitingRegion { full_name, phone } = &*state else {
            return Reply::failure();
        };
        let identity = inbound.identity.trim();

        let Some(region) = inbound
            .trimmed_text()
            .and_then(|text| text.parse::<Region>().ok())
        else {
            return Reply::new(ReplyKind::Reprompt, texts::INVALID_REGION)
                .markdown()
                .with_keyboard(Keyboard::Regions);
        };

        let written = self
            .ledger
            .add_registration(identity, full_name, phone, region)
            .await;

        match written {
            Ok(_) => {
                *state = SessionState::Done;
                Reply::new(ReplyKind::Confirmed, texts::CONFIRMED)
                    .with_keyboard(self.registered_keyboard(identity))
            }
            Err(LedgerError::DuplicateIdentity { .. }) => {
                *state = SessionState::Done;
                Reply::new(ReplyKind::AlreadyRegistered, texts::ALREADY_REGISTERED)
                    .with_keyboard(self.registered_keyboard(identity))
            }
            Err(LedgerError::DuplicatePhone { .. }) => {
                *state = SessionState::Done;
                Reply::new(ReplyKind::PhoneAlreadyUsed, texts::PHONE_ALREADY_USED)
                    .with_keyboard(self.registered_keyboard(identity))
            }
            Err(e) => {
                error!("Registration write failed for {identity}: {e}");
                Reply::failure()
            }
        }
    }

    async fn on_idle(&self, identity: &str, inbound: &Inbound) -> Reply {
        match inbound.trimmed_text() {
            Some(BTN_MY_INFO) => self.my_info(identity).await,
            Some(BTN_HELP) => Reply::new(ReplyKind::Help, texts::HELP)
                .with_keyboard(self.registered_keyboard(identity)),
            Some(BTN_ADMIN_LIST) => {
                admin::recent_list(&self.ledger, &self.admin, &self.settings, identity).await
            }
            Some(BTN_ADMIN_EXPORT) => {
                admin::export(&self.ledger, &self.admin, &self.settings, identity).await
            }
            _ => self.hint(identity).await,
        }
    }

    async fn my_info(&self, identity: &str) -> Reply {
        match self.ledger.find_by_identity(identity).await {
            Ok(Some(registration)) => Reply::new(ReplyKind::Info, texts::my_info(&registration))
                .markdown()
                .with_keyboard(self.registered_keyboard(identity)),
            Ok(None) => Reply::new(ReplyKind::NotRegistered, texts::NOT_REGISTERED)
                .with_keyboard(Keyboard::Welcome),
            Err(e) => {
                error!("Lookup failed for my info of {identity}: {e}");
                Reply::failure()
            }
        }
    }

    async fn hint(&self, identity: &str) -> Reply {
        match self.ledger.find_by_identity(identity).await {
            Ok(Some(_)) => Reply::new(ReplyKind::Hint, texts::HINT_REGISTERED)
                .with_keyboard(self.registered_keyboard(identity)),
            Ok(None) => {
                Reply::new(ReplyKind::Hint, texts::HINT_START).with_keyboard(Keyboard::Welcome)
            }
            Err(e) => {
                error!("Lookup failed for {identity}: {e}");
                Reply::failure()
            }
        }
    }

    fn registered_keyboard(&self, identity: &str) -> Keyboard {
        Keyboard::after_registration(self.admin.is_admin(identity))
    }
}
