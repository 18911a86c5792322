//! Email input as chosen by the user

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// A file picked for upload, already read into memory.
///
/// `size` is the size reported by the filesystem when the file was picked;
/// the validator checks it before the content is ever sent.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    #[serde(skip)]
    pub content: Vec<u8>,
    /// Content type to declare on upload; guessed from the name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_hint: Option<String>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        let size = content.len() as u64;
        Self { name: name.into(), size, content, mime_hint: None }
    }

    pub fn with_mime_hint(mut self, mime: impl Into<String>) -> Self {
        self.mime_hint = Some(mime.into());
        self
    }
}

// Content is omitted so logs never carry email bodies.
impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("mime_hint", &self.mime_hint)
            .finish_non_exhaustive()
    }
}

/// How the email was provided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum InputMode {
    File,
    Text,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// A validated request payload: exactly one of file or text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    File(SelectedFile),
    Text(String),
}

impl AnalysisInput {
    pub fn mode(&self) -> InputMode {
        match self {
            Self::File(_) => InputMode::File,
            Self::Text(_) => InputMode::Text,
        }
    }
}
