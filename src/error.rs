use thiserror::Error;

/// All errors that the crate can generate
///
/// Note that a box which cannot fit even a single character is _not_ an error
/// for the fitter: that is an empty [`FitResult`](crate::layout::FitResult).
/// Only the paginator turns it into [`LayoutError::UnfittableCharacter`], since
/// it could otherwise never make progress.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid configuration: {0}")]
    /// A font, title, extent, or pagination parameter was rejected before layout
    InvalidConfig(String),

    #[error("character {character:?} at offset {offset} cannot fit in an empty page")]
    /// Pagination cannot make progress because the next character doesn't fit
    /// even on an otherwise empty page
    UnfittableCharacter { offset: usize, character: char },

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}

impl LayoutError {
    pub(crate) fn invalid<S: Into<String>>(reason: S) -> LayoutError {
        LayoutError::InvalidConfig(reason.into())
    }
}
