use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::store;
use crate::utils::unwrap_or_def_verbose;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponderConfig {
    /// Keyword-responses resource: blocks of keyword-then-body lines.
    #[serde(default = "default_responses_file")]
    pub responses_file: PathBuf,

    /// Default-responses resource: one reply per block.
    #[serde(default = "default_default_responses_file")]
    pub default_responses_file: PathBuf,
}

fn default_responses_file() -> PathBuf {
    "responses.txt".into()
}

fn default_default_responses_file() -> PathBuf {
    "default.txt".into()
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            responses_file: default_responses_file(),
            default_responses_file: default_default_responses_file(),
        }
    }
}

impl ResponderConfig {
    /// Falls back to the defaults when the config cannot be loaded.
    pub fn load_or_default(path: &Path) -> Self {
        unwrap_or_def_verbose(store::load_config(path))
    }
}
