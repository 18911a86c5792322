//! Reading email files picked on the command line

use std::path::Path;

use mailtriage_domain::constants::MAX_FILE_SIZE_BYTES;
use mailtriage_domain::{Result, SelectedFile, TriageError};
use tracing::debug;

use crate::errors::InfraError;

/// Load `path` into a [`SelectedFile`].
///
/// The size comes from filesystem metadata. A file over the upload limit is
/// returned with its real size and no content, so validation can reject it
/// without the body ever being read. The content type is guessed from the
/// extension.
pub fn read_email_file(path: &Path) -> Result<SelectedFile> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| TriageError::InvalidInput(format!("not a file path: {}", path.display())))?
        .to_string();

    let metadata = std::fs::metadata(path).map_err(InfraError::from)?;
    if !metadata.is_file() {
        return Err(TriageError::InvalidInput(format!("not a regular file: {}", path.display())));
    }

    let size = metadata.len();
    let content = if size > MAX_FILE_SIZE_BYTES {
        debug!(file = %name, size, "Email file over the upload limit, content not read");
        Vec::new()
    } else {
        let content = std::fs::read(path).map_err(InfraError::from)?;
        debug!(file = %name, size, "Read email file");
        content
    };

    let mut file = SelectedFile::new(name, content);
    file.size = size;
    if let Some(mime) = mime_guess::from_path(path).first() {
        file = file.with_mime_hint(mime.essence_str());
    }
    Ok(file)
}
