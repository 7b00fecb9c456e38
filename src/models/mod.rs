pub mod registration;
pub mod user;
pub mod view;
