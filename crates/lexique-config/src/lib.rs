use serde::{Deserialize, Serialize};

use self::source::SourceConfig;

pub mod source;

#[derive(Default, Serialize, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            source: SourceConfig::new(),
        }
    }
}
