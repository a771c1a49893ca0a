mod full_name;
mod phone;
mod region;
mod registration;
