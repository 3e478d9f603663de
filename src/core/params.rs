use serde::{Deserialize, Serialize};

use crate::types::{ContentRule, FaviconSize};

/// Generation parameters suitable for config files and library callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaviconParams {
    /// Sizes to render, in output order
    pub sizes: Vec<FaviconSize>,
    /// Rule deciding which pixels survive the crop
    pub content_rule: ContentRule,
}

impl Default for FaviconParams {
    fn default() -> Self {
        Self {
            sizes: FaviconSize::ALL.to_vec(),
            content_rule: ContentRule::Auto,
        }
    }
}
