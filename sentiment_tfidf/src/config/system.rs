// Copyright 2024 Felix Engl
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::num::NonZeroUsize;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Config of the system, logging and parallelism.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename(serialize = "System"))]
pub struct SystemConfig {
    /// The log level of the application
    #[serde(default = "_default_log_level")]
    pub log_level: log::LevelFilter,

    /// Log to a file?
    #[serde(default)]
    pub log_to_file: bool,

    /// The file used when logging to a file.
    #[serde(default = "_default_log_file")]
    pub log_file: Utf8PathBuf,

    /// The number of worker threads, the number of logical cpus if not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<NonZeroUsize>,
}

const fn _default_log_level() -> log::LevelFilter {
    log::LevelFilter::Info
}

fn _default_log_file() -> Utf8PathBuf {
    Utf8PathBuf::from("sentiment_tfidf.log")
}

impl SystemConfig {
    /// The number of threads actually used.
    pub fn worker_threads(&self) -> usize {
        match self.threads {
            None => num_cpus::get(),
            Some(value) => value.get()
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_level: _default_log_level(),
            log_to_file: false,
            log_file: _default_log_file(),
            threads: None,
        }
    }
}
