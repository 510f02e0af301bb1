//! Fatal build pipeline errors.
//!
//! These abort the whole build. Recoverable conditions (asset copy
//! failures, shortcode render failures) are logged instead and never
//! reach this type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the build.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Every document must carry a `title` in its front matter.
    #[error("missing required `title` in front matter of `{0}`")]
    MissingTitle(PathBuf),

    /// A template required by the present content is absent from the theme.
    #[error("the `{name}` template must exist in the theme templates directory to process {purpose}")]
    MissingTemplate { name: String, purpose: &'static str },

    /// Posts are temporally ordered by contract, so an unparsable date
    /// blocks the entire build.
    #[error("cannot parse date `{value}` of `{path}` with format `{format}`")]
    InvalidDate {
        path: PathBuf,
        value: String,
        format: String,
    },
}
