//! Deck request validation.
//!
//! Raw form fields arrive as optional strings from the multipart
//! layer; [`DeckRequest::from_parts`] turns them into a validated
//! request or fails with a [`CoreError::Validation`] naming the
//! offending field. No side effects.

use crate::error::CoreError;

/// Required extension for the target presentation file.
pub const PRESENTATION_EXTENSION: &str = ".pptx";

/// Slide count used when the form omits one.
pub const DEFAULT_SLIDE_COUNT: u32 = 2;

/// Hard ceiling on slides per deck to prevent runaway plans.
pub const MAX_SLIDE_COUNT: u32 = 100;

/// A validated deck-generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckRequest {
    /// Target presentation file name, always `.pptx`-qualified.
    pub name: String,
    /// Requested number of slides, `1..=MAX_SLIDE_COUNT`.
    pub slide_count: u32,
    /// Raw bytes of the uploaded image, if one was provided.
    pub image: Option<Vec<u8>>,
}

impl DeckRequest {
    /// Validate raw form fields into a [`DeckRequest`].
    ///
    /// - `presentationName` is required and must end with `.pptx`.
    /// - `slideCount`, when present, must parse to a positive integer
    ///   no larger than [`MAX_SLIDE_COUNT`]. Absent means
    ///   [`DEFAULT_SLIDE_COUNT`] (the decorated two-page template);
    ///   the fixed-three-slide layout ignores the count entirely.
    pub fn from_parts(
        name: Option<String>,
        slide_count: Option<String>,
        image: Option<Vec<u8>>,
    ) -> Result<Self, CoreError> {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => {
                return Err(CoreError::validation(
                    "presentationName",
                    "presentation name is required",
                ))
            }
        };

        if !name.ends_with(PRESENTATION_EXTENSION) {
            return Err(CoreError::validation(
                "presentationName",
                format!("presentation name must end with {PRESENTATION_EXTENSION}"),
            ));
        }

        let slide_count = match slide_count.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_SLIDE_COUNT,
            Some(raw) => {
                let parsed: u32 = raw.parse().map_err(|_| {
                    CoreError::validation(
                        "slideCount",
                        format!("slide count must be a positive integer, got '{raw}'"),
                    )
                })?;
                if parsed == 0 {
                    return Err(CoreError::validation(
                        "slideCount",
                        "slide count must be at least 1",
                    ));
                }
                if parsed > MAX_SLIDE_COUNT {
                    return Err(CoreError::validation(
                        "slideCount",
                        format!("slide count must be at most {MAX_SLIDE_COUNT}"),
                    ));
                }
                parsed
            }
        };

        Ok(DeckRequest {
            name,
            slide_count,
            image,
        })
    }
}
