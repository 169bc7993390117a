pub mod service;

pub use service::StyleService;
