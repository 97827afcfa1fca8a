//! Synchronization options.

use crate::errors::ConfigError;

/// Which element to measure and where to publish the result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SyncOptions {
    /// Id of the element to measure.
    pub element_id: String,
    /// Custom property receiving the width.
    pub width_property: String,
    /// Custom property receiving the height.
    pub height_property: String,
    /// Pixels added to the outer width before publishing.
    pub width_offset: i32,
    /// Pixels added to the outer height before publishing.
    pub height_offset: i32,
}

impl SyncOptions {
    pub const DEFAULT_ELEMENT_ID: &'static str = "navbar";
    pub const DEFAULT_WIDTH_PROPERTY: &'static str = "--navbar-width";
    pub const DEFAULT_HEIGHT_PROPERTY: &'static str = "--navbar-height";
    /// Unexplained one-pixel width adjustment carried from the original page
    /// script. Pending product confirmation; do not remove.
    pub const DEFAULT_WIDTH_OFFSET: i32 = -1;

    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = id.into();
        self
    }

    pub fn with_width_property(mut self, name: impl Into<String>) -> Self {
        self.width_property = name.into();
        self
    }

    pub fn with_height_property(mut self, name: impl Into<String>) -> Self {
        self.height_property = name.into();
        self
    }

    pub fn with_width_offset(mut self, offset: i32) -> Self {
        self.width_offset = offset;
        self
    }

    pub fn with_height_offset(mut self, offset: i32) -> Self {
        self.height_offset = offset;
        self
    }

    /// Check that the options describe a usable target and outputs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.element_id.trim().is_empty() {
            return Err(ConfigError::EmptyElementId);
        }
        for name in [&self.width_property, &self.height_property] {
            if !name.starts_with("--") || name.len() == 2 {
                return Err(ConfigError::InvalidPropertyName { name: name.clone() });
            }
        }
        if self.width_property == self.height_property {
            return Err(ConfigError::DuplicatePropertyName {
                name: self.width_property.clone(),
            });
        }
        Ok(())
    }
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            element_id: Self::DEFAULT_ELEMENT_ID.to_string(),
            width_property: Self::DEFAULT_WIDTH_PROPERTY.to_string(),
            height_property: Self::DEFAULT_HEIGHT_PROPERTY.to_string(),
            width_offset: Self::DEFAULT_WIDTH_OFFSET,
            height_offset: 0,
        }
    }
}
