use std::path::PathBuf;

use crate::emotes::BILIBILI_EMOTE_API;

/// Where a run talks to and where it writes.
///
/// The binary always runs with [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Everything in the request URL before the identifiers.
    pub api_prefix: String,
    /// Directory receiving `<ids>.json` and `<ids>/`. Relative paths resolve against the current dir.
    pub output_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_prefix: BILIBILI_EMOTE_API.to_string(),
            output_root: PathBuf::new(),
        }
    }
}

impl Config {
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }
}
