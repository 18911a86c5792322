//! Analysis orchestration domain

pub mod dispatcher;
pub mod ports;
pub mod session;
pub mod status;

pub use dispatcher::RequestDispatcher;
pub use ports::*;
pub use session::{AnalysisOutcome, AnalysisSession, AnalysisState};
pub use status::lookup_status;
