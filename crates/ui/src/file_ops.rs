//! File Operations for Haven
//!
//! Native file dialogs through the `rfd` crate. The only file the app ever
//! opens is an image about to be sent to the image host.

use std::path::{Path, PathBuf};

use haven_client::IMAGE_EXTENSIONS;
use rfd::AsyncFileDialog;

// ============================================================================
// File Filter Constants
// ============================================================================

/// Display name for the image filter
pub const IMAGE_FILTER_NAME: &str = "Images";

// ============================================================================
// File Dialog Functions
// ============================================================================

/// Open a file dialog to pick one image
///
/// Returns the selected file path, or None if the dialog was cancelled.
pub async fn pick_image() -> Option<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title("Choose an image")
        .add_filter(IMAGE_FILTER_NAME, IMAGE_EXTENSIONS)
        .pick_file()
        .await?;

    Some(file.path().to_path_buf())
}

/// Whether a path carries one of the picker's image extensions
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_path() {
        assert!(is_image_path(Path::new("/tmp/lobby.JPG")));
        assert!(is_image_path(Path::new("suite.webp")));
        assert!(!is_image_path(Path::new("notes.txt")));
        assert!(!is_image_path(Path::new("no_extension")));
    }
}
