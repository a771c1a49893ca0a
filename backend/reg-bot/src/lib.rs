pub mod dispatcher;
pub mod error;
pub mod logger;
pub mod transport;


pub use dispatcher::{Dispatcher, Outbound};
pub use error::{BotError, Result as BotErrorResult};
