//! Client-side checks run before any request leaves the machine

use mailtriage_common::validation::{
    CustomValidator, FieldValidator, RangeValidator, StringValidator,
};
use mailtriage_domain::constants::{ALLOWED_FILE_EXTENSIONS, MAX_FILE_SIZE_BYTES, MIN_TEXT_CHARS};
use mailtriage_domain::{InputRejection, SelectedFile};

/// Validates candidate files and text.
///
/// File checks run in a fixed order: extension first, then size, so an
/// oversized `.docx` reports the extension problem.
#[derive(Debug)]
pub struct InputValidator {
    extension: CustomValidator<String>,
    size: RangeValidator<u64>,
    text_length: StringValidator,
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl InputValidator {
    pub fn new() -> Self {
        let extension = CustomValidator::new(|name: &String| match extension_of(name) {
            Some(ext) if ALLOWED_FILE_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            Some(ext) => Err(format!("Extension {ext} is not accepted")),
            None => Err("File name has no extension".to_string()),
        });

        Self {
            extension,
            size: RangeValidator::default().max(MAX_FILE_SIZE_BYTES),
            // Length is measured on the text as typed, surrounding spaces included
            text_length: StringValidator::new().trim(false).min_length(MIN_TEXT_CHARS),
        }
    }

    /// Check a picked file's name and size.
    pub fn validate_file(&self, file: &SelectedFile) -> Result<(), InputRejection> {
        self.extension
            .validate(&file.name)
            .map_err(|_| InputRejection::UnsupportedExtension { file_name: file.name.clone() })?;

        self.size.validate(&file.size).map_err(|_| InputRejection::file_too_large(file.size))
    }

    /// Check pasted text at submit time.
    ///
    /// Blank text is "no input", not "too short".
    pub fn validate_text(&self, text: &str) -> Result<(), InputRejection> {
        if text.trim().is_empty() {
            return Err(InputRejection::NoInput);
        }

        FieldValidator::<str>::validate(&self.text_length, text)
            .map_err(|_| InputRejection::text_too_short(text.chars().count()))
    }
}

/// Lowercased final dot-suffix of `name`, including the dot.
///
/// `None` when the name has no dot or ends with one.
pub fn extension_of(name: &str) -> Option<String> {
    let idx = name.rfind('.')?;
    let ext = &name[idx..];
    if ext.len() > 1 {
        Some(ext.to_lowercase())
    } else {
        None
    }
}
