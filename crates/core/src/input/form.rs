//! The email form: at most one of file or text at any time

use mailtriage_domain::{AnalysisInput, InputMode, InputRejection, SelectedFile};

use super::validator::InputValidator;

/// Current content of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormInput {
    #[default]
    Empty,
    File(SelectedFile),
    Text(String),
}

/// Holds the user's pending input and enforces file/text exclusivity.
///
/// Rejections never modify the held input.
#[derive(Debug, Default)]
pub struct EmailForm {
    input: FormInput,
    validator: InputValidator,
}

impl EmailForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn mode(&self) -> Option<InputMode> {
        match self.input {
            FormInput::Empty => None,
            FormInput::File(_) => Some(InputMode::File),
            FormInput::Text(_) => Some(InputMode::Text),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.input, FormInput::Empty)
    }

    /// Text entry is disabled while a file is selected.
    pub fn is_text_locked(&self) -> bool {
        matches!(self.input, FormInput::File(_))
    }

    /// Select a file, replacing any pending text or file.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), InputRejection> {
        self.validator.validate_file(&file)?;
        self.input = FormInput::File(file);
        Ok(())
    }

    /// Replace the pending text.
    ///
    /// Refused while a file is selected; the length rule is only applied at
    /// submit time.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), InputRejection> {
        if self.is_text_locked() {
            return Err(InputRejection::TextLockedByFile);
        }

        let text = text.into();
        self.input = if text.is_empty() { FormInput::Empty } else { FormInput::Text(text) };
        Ok(())
    }

    /// Drop the selected file, re-enabling text entry. No-op otherwise.
    pub fn clear_file(&mut self) {
        if self.is_text_locked() {
            self.input = FormInput::Empty;
        }
    }

    pub fn clear(&mut self) {
        self.input = FormInput::Empty;
    }

    /// Validate the held input and build the request payload.
    pub fn submission(&self) -> Result<AnalysisInput, InputRejection> {
        match &self.input {
            FormInput::Empty => Err(InputRejection::NoInput),
            FormInput::File(file) => {
                self.validator.validate_file(file)?;
                Ok(AnalysisInput::File(file.clone()))
            }
            FormInput::Text(text) => {
                self.validator.validate_text(text)?;
                Ok(AnalysisInput::Text(text.clone()))
            }
        }
    }
}
