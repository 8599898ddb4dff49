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

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;
use rayon::prelude::*;
use strum::Display;
use crate::pipeline::errors::{ComputationError, PipelineError};

/// The stages of the pipeline, in execution order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
pub enum StageName {
    #[strum(serialize = "word-sentiment count")]
    WordSentimentCount,
    #[strum(serialize = "sentiment totals")]
    SentimentTotals,
    #[strum(serialize = "cross-sentiment frequency")]
    CrossSentimentFrequency,
    #[strum(serialize = "tf-idf score")]
    TfIdfScore,
}

/// A single map/reduce step.
///
/// `map` turns every input into exactly one keyed value, `reduce` gets all
/// values of a key at once. Neither may depend on the order of the values,
/// both may run on any worker.
pub trait MapReduceStage: Sync {
    type Input: Send;
    type Key: Hash + Eq + Send;
    type Value: Send;
    type Output: Send;

    fn name(&self) -> StageName;

    fn map(&self, input: Self::Input) -> Result<(Self::Key, Self::Value), ComputationError>;

    fn reduce(&self, key: Self::Key, values: Vec<Self::Value>) -> Result<Vec<Self::Output>, ComputationError>;
}

/// Groups the values by key. Every worker groups its share, the partial
/// groups are merged afterwards.
pub fn shuffle<K, V>(pairs: Vec<(K, V)>) -> HashMap<K, Vec<V>>
where
    K: Hash + Eq + Send,
    V: Send
{
    pairs
        .into_par_iter()
        .fold(HashMap::new, |mut groups: HashMap<K, Vec<V>>, (key, value)| {
            groups.entry(key).or_default().push(value);
            groups
        })
        .reduce(HashMap::new, merge_groups)
}

fn merge_groups<K: Hash + Eq, V>(left: HashMap<K, Vec<V>>, right: HashMap<K, Vec<V>>) -> HashMap<K, Vec<V>> {
    let (mut larger, smaller) = if left.len() >= right.len() {
        (left, right)
    } else {
        (right, left)
    };
    for (key, values) in smaller {
        larger.entry(key).or_default().extend(values);
    }
    larger
}

/// Runs map, shuffle and reduce of `stage` on the current rayon pool.
/// Each phase completes before the next one starts.
pub fn run_stage<S: MapReduceStage>(stage: &S, inputs: Vec<S::Input>) -> Result<Vec<S::Output>, PipelineError> {
    let name = stage.name();
    let started = Instant::now();
    let input_count = inputs.len();

    let mapped = inputs
        .into_par_iter()
        .map(|input| stage.map(input))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| PipelineError::new(name, source))?;

    let groups = shuffle(mapped);
    let group_count = groups.len();

    let reduced = groups
        .into_par_iter()
        .map(|(key, values)| stage.reduce(key, values))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| PipelineError::new(name, source))?;

    let outputs = reduced.into_iter().flatten().collect::<Vec<_>>();
    log::debug!(
        "Stage '{name}': {input_count} records in {group_count} groups to {} records in {:?}.",
        outputs.len(),
        started.elapsed()
    );
    Ok(outputs)
}
