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
use thiserror::Error;

/// Why a corpus record was rejected.
#[derive(Debug, Error)]
pub enum MalformedReason {
    #[error("not a json object: {0}")]
    Json(#[from] serde_json::Error),
    #[error("the field '{0}' is missing")]
    MissingField(&'static str),
    #[error("the rating {0} is not a finite number")]
    NonFiniteRating(f64),
}

/// A corpus record that lacks the required fields.
#[derive(Debug, Error)]
#[error("The record in line {line} is malformed, {reason}")]
pub struct MalformedRecordError {
    pub line: usize,
    #[source]
    pub reason: MalformedReason,
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read the corpus: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Malformed(#[from] MalformedRecordError),
}
