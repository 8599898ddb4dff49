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

use std::time::Instant;
use rayon::ThreadPoolBuilder;
use crate::app::errors::RunError;
use crate::config::Configs;
use crate::corpus::{load_corpus, CorpusSentimentCounts, JsonLinesReader};
use crate::output;
use crate::pipeline::{SentimentPipeline, StageStatistics};

/// What a successful run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub counts: CorpusSentimentCounts,
    pub skipped_records: usize,
    pub statistics: StageStatistics,
}

/// Loads the corpus, scores it and writes the ranked result.
pub fn run(configs: &Configs) -> Result<RunSummary, RunError> {
    let started = Instant::now();
    let path = configs.corpus.reviews.as_deref().ok_or(RunError::NoCorpus)?;
    if !configs.pipeline.threshold.is_finite() {
        return Err(RunError::InvalidThreshold(configs.pipeline.threshold))
    }

    let tokenizer = configs.text.build()?;

    let reader = JsonLinesReader::open(path).map_err(|source| RunError::OpenCorpus {
        path: path.to_path_buf(),
        source
    })?;
    let corpus = load_corpus(reader, configs.corpus.malformed_records)?;

    let threads = configs.system.worker_threads();
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|idx| format!("worker-{idx}"))
        .build()?;
    log::info!("Start scoring with {threads} threads.");

    let pipeline = SentimentPipeline::new(tokenizer, configs.pipeline.scorer());
    let mut result = pool.install(|| pipeline.run(&corpus.reviews))?;

    output::rank(&mut result.scored);
    output::write_to(configs.output.file.as_deref(), &result.scored)?;

    log::info!("Finished after {:?}.", started.elapsed());
    Ok(RunSummary {
        counts: result.counts,
        skipped_records: corpus.skipped,
        statistics: result.statistics,
    })
}
