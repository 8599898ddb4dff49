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

use std::fs::File;
use std::io::BufWriter;
use std::num::NonZeroUsize;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use text_processing::lemmatizer::LemmatizerConfig;
use text_processing::stopwords::StopWordRepository;
use crate::app::errors::ArgsError;
use crate::config::Configs;
use crate::corpus::MalformedRecordPolicy;
use crate::pipeline::score::ThresholdBasis;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
/// Ranks the words of rated hotel reviews by their TF-IDF score per sentiment.
pub struct SentimentArgs {
    /// Writes an exemplary config to ./example_config.json
    #[arg(long)]
    pub generate_example_config: bool,

    /// What to do
    #[command(subcommand)]
    pub mode: Option<RunMode>,
}

#[derive(Subcommand, Debug)]
pub enum RunMode {
    /// Scores the reviews of a json lines file.
    RUN {
        /// The json lines file with the reviews, overrides the config.
        reviews: Option<Utf8PathBuf>,
        /// A config file, layered over ./sentiment_tfidf.{json,toml,yaml}.
        #[arg(short, long)]
        config: Option<Utf8PathBuf>,
        /// A stopword file, comma separated or one word per line.
        #[arg(short, long)]
        stopwords: Option<Utf8PathBuf>,
        /// The csv file for the results, stdout if not set.
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
        /// The number of worker threads.
        #[arg(short, long)]
        threads: Option<NonZeroUsize>,
        /// Only scores strictly above the threshold are kept.
        #[arg(long)]
        threshold: Option<f64>,
        /// Compare the rounded or the unrounded score against the threshold.
        #[arg(long)]
        threshold_basis: Option<ThresholdBasis>,
        /// A dictionary of inflected words and their roots, one tab separated pair per line.
        #[arg(long, conflicts_with = "no_lemmatization")]
        lemmas: Option<Utf8PathBuf>,
        /// Use the words as they are.
        #[arg(long)]
        no_lemmatization: bool,
        /// Fail on the first malformed review instead of skipping it.
        #[arg(long)]
        abort_on_malformed: bool,
        /// overrides the log level from the config.
        #[arg(long)]
        override_log_level: Option<log::LevelFilter>,
        /// Log to file
        #[arg(long)]
        log_to_file: bool,
    },
    /// Creates the default config at ./sentiment_tfidf.json
    INIT,
}

#[derive(Debug)]
pub enum ConsumedArgs {
    RunConfig(Configs),
    Nothing,
}

/// The config written by `--generate-example-config`.
pub fn create_example_config() -> Configs {
    let mut configs = Configs::default();
    configs.corpus.reviews = Some("reviews.json".into());
    configs.text.stopwords = StopWordRepository::File { file: "stopwords-long.txt".into() };
    configs.output.file = Some("significant_words.csv".into());
    configs.system.threads = NonZeroUsize::new(4);
    configs
}

/// Writes `configs` as pretty json unless `path` already exists.
/// Returns true if the file was written.
pub fn write_config(path: &Utf8Path, configs: &Configs) -> Result<bool, ArgsError> {
    if path.exists() {
        return Ok(false)
    }
    let file = File::options()
        .create_new(true)
        .write(true)
        .open(path)
        .map_err(|source| ArgsError::WriteConfig { path: path.to_path_buf(), source })?;
    serde_json::to_writer_pretty(BufWriter::new(file), configs)?;
    Ok(true)
}

/// Consumes the args and returns everything necessary for a run.
pub fn consume_args(args: SentimentArgs) -> Result<ConsumedArgs, ArgsError> {
    if let Some(mode) = args.mode {
        match mode {
            RunMode::RUN {
                reviews,
                config,
                stopwords,
                output,
                threads,
                threshold,
                threshold_basis,
                lemmas,
                no_lemmatization,
                abort_on_malformed,
                override_log_level,
                log_to_file
            } => {
                let mut configs = match config {
                    None => Configs::discover(),
                    Some(path) => Configs::load_from(path),
                }?;

                if let Some(reviews) = reviews {
                    configs.corpus.reviews = Some(reviews);
                }
                if abort_on_malformed {
                    configs.corpus.malformed_records = MalformedRecordPolicy::Abort;
                }
                if let Some(file) = stopwords {
                    configs.text.stopwords = StopWordRepository::File { file };
                }
                if let Some(file) = lemmas {
                    configs.text.lemmatizer = LemmatizerConfig::Dictionary { file };
                } else if no_lemmatization {
                    configs.text.lemmatizer = LemmatizerConfig::Identity;
                }
                if let Some(file) = output {
                    configs.output.file = Some(file);
                }
                if let Some(threshold) = threshold {
                    configs.pipeline.threshold = threshold;
                }
                if let Some(basis) = threshold_basis {
                    configs.pipeline.threshold_basis = basis;
                }
                if threads.is_some() {
                    configs.system.threads = threads;
                }
                if let Some(log_level) = override_log_level {
                    configs.system.log_level = log_level;
                }
                if log_to_file {
                    configs.system.log_to_file = true;
                }

                Ok(ConsumedArgs::RunConfig(configs))
            }
            RunMode::INIT => {
                let path = Utf8Path::new("./sentiment_tfidf.json");
                if write_config(path, &Configs::default())? {
                    println!("Created the default config at {path}.");
                } else {
                    println!("The default config already exists in {path}.\nDelete it before regenerating.");
                }
                Ok(ConsumedArgs::Nothing)
            }
        }
    } else {
        if args.generate_example_config {
            let path = Utf8Path::new("./example_config.json");
            if write_config(path, &create_example_config())? {
                println!("Created the example config at {path}.");
            } else {
                println!("The example config already exists in {path}.");
            }
        }
        Ok(ConsumedArgs::Nothing)
    }
}
