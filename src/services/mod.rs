// Service module exports

pub mod layout;
pub mod pool;
pub mod settings;
