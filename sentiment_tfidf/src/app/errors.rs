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

use std::io;
use camino::Utf8PathBuf;
use thiserror::Error;
use text_processing::configs::TokenizerCreationError;
use crate::app::logging::LoggingError;
use crate::corpus::CorpusError;
use crate::output::OutputError;
use crate::pipeline::errors::PipelineError;

/// Failed to turn the arguments into a runnable config.
#[derive(Debug, Error)]
pub enum ArgsError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("Failed to write the config '{path}' with:\n{source}")]
    WriteConfig {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Everything that can end a run early.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Args(#[from] ArgsError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error("No review corpus was configured, set corpus.reviews or pass a file.")]
    NoCorpus,
    #[error("The threshold {0} is not a finite number.")]
    InvalidThreshold(f64),
    #[error("Failed to open the reviews '{path}' with:\n{source}")]
    OpenCorpus {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Tokenizer(#[from] TokenizerCreationError),
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Output(#[from] OutputError),
}
