pub mod full_name;
pub mod phone;
pub mod region;
pub mod registration;
