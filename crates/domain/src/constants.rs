//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! client.

// Input limits
pub const MAX_FILE_SIZE_BYTES: u64 = 1_048_576;
pub const MIN_TEXT_CHARS: usize = 10;
pub const ALLOWED_FILE_EXTENSIONS: [&str; 2] = [".txt", ".pdf"];

// History cache
pub const HISTORY_CAPACITY: usize = 10;
pub const HISTORY_STORE_KEY: &str = "email-classifier-history";

// Feedback limits (mirrors the backend contract)
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const MAX_COMMENT_CHARS: usize = 500;

// Classification service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const PROCESS_PATH: &str = "/api/process";
pub const FEEDBACK_PATH: &str = "/api/feedback";
pub const STATUS_PATH: &str = "/api/status";
pub const HEALTH_PATH: &str = "/health";

// Multipart field names
pub const FILE_FIELD: &str = "file";
pub const TEXT_FIELD: &str = "text";

// Fallback messages when the service gives no usable `detail`
pub const PROCESS_FILE_FALLBACK: &str = "Failed to process file";
pub const PROCESS_TEXT_FALLBACK: &str = "Failed to process text";
pub const FEEDBACK_FALLBACK: &str = "Failed to submit feedback";
pub const STATUS_FALLBACK: &str = "Failed to fetch status";
