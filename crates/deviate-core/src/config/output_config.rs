//! Output presentation configuration.
//!
//! These flags shape adapter output only; they never change a score.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit a list of rows (true) or an object keyed by id (false). Default: true.
    pub use_list: Option<bool>,
    /// Input rows carry an id in first position. Default: false.
    pub use_id: Option<bool>,
}

impl OutputConfig {
    pub fn effective_use_list(&self) -> bool {
        self.use_list.unwrap_or(true)
    }

    pub fn effective_use_id(&self) -> bool {
        self.use_id.unwrap_or(false)
    }
}
