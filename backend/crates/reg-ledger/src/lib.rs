pub mod error;
pub mod ledger;
pub mod ledger_sync;
pub mod migration;
pub mod schema;
pub mod store_file;
pub mod stored_row;

pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use ledger_sync::LedgerSync;
pub use migration::MigrationOutcome;
pub use schema::{CURRENT_HEADER, LEGACY_HEADER, StoreFormat};
pub use stored_row::StoredRow;
