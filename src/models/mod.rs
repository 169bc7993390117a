// Module exports for models

pub mod error;
pub mod event;
pub mod layout;
pub mod settings;
