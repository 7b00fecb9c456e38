pub mod auth_handlers;
pub mod register_handlers;
pub mod user_handlers;
