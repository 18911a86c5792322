/// Wire types private to the classification service client
use serde::Deserialize;
use serde_json::Value;

/// Error body sent with non-2xx responses.
///
/// `detail` is usually a string; request validation failures send a list of
/// `{loc, msg, type}` objects instead.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Human-readable detail, if the body carried a usable one
    pub fn message(self) -> Option<String> {
        match self.detail? {
            Value::String(text) => Some(text),
            Value::Array(items) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Parse a response body into its `detail` message; `None` for anything
/// that is not a JSON object with a usable `detail`.
pub(crate) fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(ErrorBody::message)
}
