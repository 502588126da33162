//! Error adapter for converting CollageError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use collage::{
    CollageError,
    project::{MAX_FILE_SIZE_MB, MAX_IMAGES},
};

/// Adapter for [`CollageError`] values.
///
/// Collage errors carry no source spans, so the adapter contributes a stable
/// error code and, where one exists, a hint on how to fix the input.
pub struct ErrorAdapter<'a>(pub &'a CollageError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CollageError::Io(_) => "collage::io",
            CollageError::Project(_) => "collage::project",
            CollageError::Image(_) => "collage::image",
            CollageError::Style(_) => "collage::style",
            CollageError::Export(_) => "collage::export",
            CollageError::Config(_) => "collage::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CollageError::Image(_) => format!(
                "a project holds up to {MAX_IMAGES} JPEG or PNG images of at most {MAX_FILE_SIZE_MB} MB each"
            ),
            CollageError::Style(_) => {
                "use a CSS color such as `#ffffff`, `rgb(255, 255, 255)` or `white`".to_string()
            }
            CollageError::Project(_) => {
                "project documents need `images`, `imageTransforms` and `layout` keys".to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(err: &CollageError) -> String {
        ErrorAdapter(err).code().unwrap().to_string()
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            code_of(&CollageError::Io(std::io::Error::other("disk"))),
            "collage::io"
        );
        assert_eq!(
            code_of(&CollageError::Project("bad".to_string())),
            "collage::project"
        );
        assert_eq!(
            code_of(&CollageError::Config("bad".to_string())),
            "collage::config"
        );
    }

    #[test]
    fn test_display_matches_error() {
        let err = CollageError::Style("invalid color `nope`".to_string());
        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "Style error: invalid color `nope`"
        );
    }

    #[test]
    fn test_help_only_for_user_input_errors() {
        let image = CollageError::Image("too big".to_string());
        assert!(ErrorAdapter(&image).help().is_some());

        let config = CollageError::Config("bad".to_string());
        assert!(ErrorAdapter(&config).help().is_none());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = CollageError::Image("`x.gif` is not a JPEG or PNG image".to_string());
        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();
        assert!(out.contains("collage::image"));
        assert!(out.contains("x.gif"));
    }
}
