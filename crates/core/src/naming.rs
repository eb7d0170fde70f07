//! Image reference naming rules.
//!
//! Stored image references are bare filenames, never paths. Anything with a
//! separator in it is rejected before touching the filesystem.

use crate::error::CoreError;

/// Image reference substituted when artwork generation fails outright.
pub const FALLBACK_IMAGE: &str = "fallback.png";

/// Filename for a card's artwork, derived from its set label and number.
pub fn card_image_filename(set_name: &str, card_number: i32) -> String {
    format!("{set_name}_{card_number}.png")
}

/// Validate a client-supplied image filename.
///
/// Rejects empty names, path separators, and parent-directory components.
pub fn validate_image_filename(filename: &str) -> Result<(), CoreError> {
    if filename.is_empty() {
        return Err(CoreError::Validation("Empty image filename".to_string()));
    }
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(CoreError::Validation(format!(
            "Image filename '{filename}' must not contain path components"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_set_and_number() {
        assert_eq!(card_image_filename("GEN", 42), "GEN_42.png");
    }

    #[test]
    fn plain_filenames_are_accepted() {
        assert!(validate_image_filename("GEN_1.png").is_ok());
        assert!(validate_image_filename(FALLBACK_IMAGE).is_ok());
    }

    #[test]
    fn path_components_are_rejected() {
        assert!(validate_image_filename("").is_err());
        assert!(validate_image_filename("a/b.png").is_err());
        assert!(validate_image_filename("a\\b.png").is_err());
        assert!(validate_image_filename("..png..").is_err());
        assert!(validate_image_filename("../etc/passwd").is_err());
    }
}
