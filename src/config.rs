//! Editor configuration.

use crate::constants::DEFAULT_BOARD_SIZE;

/// When a forced placement is tagged with a ko marker.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum KoMarkerPolicy {
    /// Only when the placement would have failed a rule check.
    #[default]
    WhenIllegal,
    /// On every forced placement.
    Always,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    pub ko_marker: KoMarkerPolicy,
    /// Board size assumed when the root node has no size property.
    pub default_board_size: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            ko_marker: KoMarkerPolicy::default(),
            default_board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl EditorConfig {
    pub fn with_ko_marker(mut self, policy: KoMarkerPolicy) -> Self {
        self.ko_marker = policy;
        self
    }

    pub fn with_default_board_size(mut self, size: u8) -> Self {
        self.default_board_size = size;
        self
    }
}
