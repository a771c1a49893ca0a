mod admin;
pub mod controller;
pub mod inbound;
pub mod keyboard;
pub mod reply;
pub mod session_registry;
pub mod session_state;
pub mod texts;


pub use controller::DialogueController;
pub use inbound::{Contact, Inbound, Payload};
pub use keyboard::{Button, Keyboard};
pub use reply::{Document, Reply, ReplyKind, TextFormat};
pub use session_registry::SessionRegistry;
pub use session_state::SessionState;
