//! JavaScript-facing option types.

use navsync_core::SyncOptions;
use serde::{Deserialize, Serialize};

/// Synchronization options from JavaScript. Missing fields take defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOptionsJs {
    #[serde(default)]
    pub element_id: Option<String>,
    #[serde(default)]
    pub width_property: Option<String>,
    #[serde(default)]
    pub height_property: Option<String>,
    #[serde(default)]
    pub width_offset: Option<i32>,
    #[serde(default)]
    pub height_offset: Option<i32>,
}

impl SyncOptionsJs {
    pub fn into_core(self) -> SyncOptions {
        let mut opts = SyncOptions::default();
        if let Some(id) = self.element_id {
            opts.element_id = id;
        }
        if let Some(name) = self.width_property {
            opts.width_property = name;
        }
        if let Some(name) = self.height_property {
            opts.height_property = name;
        }
        if let Some(offset) = self.width_offset {
            opts.width_offset = offset;
        }
        if let Some(offset) = self.height_offset {
            opts.height_offset = offset;
        }
        opts
    }
}
