pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::full_name::is_valid_full_name;
pub use models::phone::normalize_phone;
pub use models::region::{REGIONS, Region};
pub use models::registration::{REGISTERED_AT_FORMAT, Registration};
