//! The closed set of layout variants.
//!
//! Variant names match the strings stored in project files
//! (`grid`, `masonry`, ..., `circlepack`, `honeycomb`, `spiral`).

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::engines::{self, Engine};

/// Available arrangement algorithms.
///
/// # Variants
///
/// - `Grid` - Uniform cells, row-major (default)
/// - `Masonry` - Shortest-column packing at fixed column width
/// - `Rows` / `Columns` - One full-width row (or full-height column) per image
/// - `Random` / `Polaroid` - Seeded scatter, polaroid adds tilt
/// - `Filmstrip` - Overlapping frames along a tilted diagonal
/// - `Geometric` - Fixed compositions with a hero image for five or more
/// - `Heart` / `CirclePack` - Rejection sampling, may leave images unplaced
/// - `Honeycomb` - Hexagonal rings around the center
/// - `Spiral` - Logarithmic spiral from the center outwards
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutVariant {
    #[default]
    Grid,
    Masonry,
    Rows,
    Columns,
    Random,
    Polaroid,
    Filmstrip,
    Geometric,
    Heart,
    CirclePack,
    Honeycomb,
    Spiral,
}

impl LayoutVariant {
    /// Every variant, in menu order.
    pub const ALL: [LayoutVariant; 12] = [
        Self::Grid,
        Self::Masonry,
        Self::Rows,
        Self::Columns,
        Self::Random,
        Self::Polaroid,
        Self::Filmstrip,
        Self::Geometric,
        Self::Heart,
        Self::CirclePack,
        Self::Honeycomb,
        Self::Spiral,
    ];

    /// Parses a variant name, falling back to [`LayoutVariant::Grid`] for
    /// names that are not recognized.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(name; "Unknown layout variant, using grid");
            Self::default()
        })
    }

    /// Returns true for variants that may place fewer images than given.
    pub fn may_drop_items(self) -> bool {
        matches!(self, Self::Heart | Self::CirclePack)
    }

    /// Returns the engine implementing this variant.
    pub(crate) fn engine(self) -> &'static dyn Engine {
        match self {
            Self::Grid => &engines::Grid,
            Self::Masonry => &engines::Masonry,
            Self::Rows => &engines::Rows,
            Self::Columns => &engines::Columns,
            Self::Random => &engines::Random,
            Self::Polaroid => &engines::Polaroid,
            Self::Filmstrip => &engines::Filmstrip,
            Self::Geometric => &engines::Geometric,
            Self::Heart => &engines::Heart,
            Self::CirclePack => &engines::CirclePack,
            Self::Honeycomb => &engines::Honeycomb,
            Self::Spiral => &engines::Spiral,
        }
    }
}

impl FromStr for LayoutVariant {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "masonry" => Ok(Self::Masonry),
            "rows" => Ok(Self::Rows),
            "columns" => Ok(Self::Columns),
            "random" => Ok(Self::Random),
            "polaroid" => Ok(Self::Polaroid),
            "filmstrip" => Ok(Self::Filmstrip),
            "geometric" => Ok(Self::Geometric),
            "heart" => Ok(Self::Heart),
            "circlepack" => Ok(Self::CirclePack),
            "honeycomb" => Ok(Self::Honeycomb),
            "spiral" => Ok(Self::Spiral),
            _ => Err("Unsupported layout variant"),
        }
    }
}

impl From<LayoutVariant> for &'static str {
    fn from(val: LayoutVariant) -> Self {
        match val {
            LayoutVariant::Grid => "grid",
            LayoutVariant::Masonry => "masonry",
            LayoutVariant::Rows => "rows",
            LayoutVariant::Columns => "columns",
            LayoutVariant::Random => "random",
            LayoutVariant::Polaroid => "polaroid",
            LayoutVariant::Filmstrip => "filmstrip",
            LayoutVariant::Geometric => "geometric",
            LayoutVariant::Heart => "heart",
            LayoutVariant::CirclePack => "circlepack",
            LayoutVariant::Honeycomb => "honeycomb",
            LayoutVariant::Spiral => "spiral",
        }
    }
}

impl Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

impl Serialize for LayoutVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str((*self).into())
    }
}

/// Deserialization is lenient: unknown names load as `grid`.
impl<'de> Deserialize<'de> for LayoutVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name_or_default(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for variant in LayoutVariant::ALL {
            let name: &'static str = variant.into();
            assert_eq!(name.parse::<LayoutVariant>(), Ok(variant));
            assert_eq!(variant.to_string(), name);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!("mosaic".parse::<LayoutVariant>().is_err());
        assert!("Grid".parse::<LayoutVariant>().is_err());
        assert_eq!(
            LayoutVariant::from_name_or_default("mosaic"),
            LayoutVariant::Grid
        );
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&LayoutVariant::CirclePack).unwrap();
        assert_eq!(json, "\"circlepack\"");

        let parsed: LayoutVariant = serde_json::from_str("\"spiral\"").unwrap();
        assert_eq!(parsed, LayoutVariant::Spiral);

        let fallback: LayoutVariant = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(fallback, LayoutVariant::Grid);
    }

    #[test]
    fn test_may_drop_items() {
        let dropping: Vec<_> = LayoutVariant::ALL
            .into_iter()
            .filter(|variant| variant.may_drop_items())
            .collect();
        assert_eq!(dropping, [LayoutVariant::Heart, LayoutVariant::CirclePack]);
    }
}
