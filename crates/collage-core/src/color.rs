//! Validated CSS colors for collage backgrounds.
//!
//! Projects store colors as the CSS text the user typed. [`Color`] checks that
//! text with the `color` crate and keeps it verbatim, so a color written back
//! to SVG or to a project file reads exactly as it was entered.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A CSS color string that is known to parse.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    css: String,
}

impl Color {
    /// Validates a CSS color string such as `"#ffffff"`, `"rgb(255, 0, 0)"`
    /// or `"teal"`. Surrounding whitespace is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use collage_core::color::Color;
    ///
    /// let teal = Color::new(" teal ").unwrap();
    /// assert_eq!(teal.as_css(), "teal");
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(css: &str) -> Result<Self, String> {
        let css = css.trim();
        match DynamicColor::from_str(css) {
            Ok(_) => Ok(Self {
                css: css.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{css}`: {err}")),
        }
    }

    /// The color as entered.
    pub fn as_css(&self) -> &str {
        &self.css
    }
}

impl Default for Color {
    fn default() -> Self {
        Self {
            css: "#ffffff".to_string(),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.css.as_str())
    }
}
