//! Element geometry and the measurement derived from it.

use crate::options::SyncOptions;

/// Rendered outer box size of an element, border included, margin excluded.
///
/// Browsers report this as whole CSS pixels (`offsetWidth`/`offsetHeight`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OuterSize {
    pub width: i32,
    pub height: i32,
}

impl OuterSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// The pair of values published as custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub width: i32,
    pub height: i32,
}

impl Measurement {
    /// Width formatted with a `px` suffix.
    pub fn width_px(&self) -> String {
        format_px(self.width)
    }

    /// Height formatted with a `px` suffix.
    pub fn height_px(&self) -> String {
        format_px(self.height)
    }

    /// Property writes for this measurement, width first.
    pub fn declarations<'a>(&self, options: &'a SyncOptions) -> [(&'a str, String); 2] {
        [
            (options.width_property.as_str(), self.width_px()),
            (options.height_property.as_str(), self.height_px()),
        ]
    }
}

/// Derive the published measurement from an element's outer size.
///
/// The offsets are applied as given. Nothing is clamped, so an outer width of
/// zero publishes `-1px` under the default options.
pub fn measure(size: OuterSize, options: &SyncOptions) -> Measurement {
    Measurement {
        width: size.width.saturating_add(options.width_offset),
        height: size.height.saturating_add(options.height_offset),
    }
}

/// Format a pixel count as a CSS length, e.g. `200px`.
pub fn format_px(value: i32) -> String {
    format!("{}px", value)
}
