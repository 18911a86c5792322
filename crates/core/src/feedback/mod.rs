//! Reply editing, rating and feedback submission

pub mod draft;
pub mod ports;
pub mod service;

pub use draft::FeedbackDraft;
pub use ports::FeedbackGateway;
pub use service::FeedbackSubmitter;
