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

use camino::Utf8Path;
use config::Config;
use serde::{Deserialize, Serialize};
use text_processing::configs::TokenizerConfig;
use crate::config::{CorpusConfig, OutputConfig, PipelineConfig, SystemConfig};

/// The name of the config file that is picked up from the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "./sentiment_tfidf";

/// The prefix of environment variables overriding the config, e.g. `SENTIMENT.PIPELINE.THRESHOLD`.
pub const ENVIRONMENT_PREFIX: &str = "SENTIMENT";

/// A collection of all config used in a run.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename(serialize = "Config"))]
pub struct Configs {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub text: TokenizerConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Configs {
    /// Layers the default config file, `file` and the environment.
    pub fn load_from<P: AsRef<Utf8Path>>(file: P) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false))
            .add_source(config::File::with_name(file.as_ref().as_str()))
            .add_source(config::Environment::with_prefix(ENVIRONMENT_PREFIX).separator("."))
            .build()?
            .try_deserialize()
    }

    /// Layers the default config file, if one exists, and the environment.
    pub fn discover() -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false))
            .add_source(config::Environment::with_prefix(ENVIRONMENT_PREFIX).separator("."))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;
    use camino_tempfile::Builder;
    use text_processing::lemmatizer::LemmatizerConfig;
    use text_processing::stopwords::StopWordRepository;
    use crate::config::Configs;
    use crate::corpus::MalformedRecordPolicy;
    use crate::pipeline::score::ThresholdBasis;

    #[test]
    fn sections_default_when_missing(){
        let config: Configs = serde_json::from_str(r#"{"pipeline": {"threshold_basis": "unrounded"}}"#).unwrap();
        assert_eq!(0.01, config.pipeline.threshold);
        assert_eq!(ThresholdBasis::Unrounded, config.pipeline.threshold_basis);
        assert_eq!(log::LevelFilter::Info, config.system.log_level);
        assert_eq!(MalformedRecordPolicy::Skip, config.corpus.malformed_records);
        assert_eq!(StopWordRepository::Empty, config.text.stopwords);
        assert!(matches!(config.text.lemmatizer, LemmatizerConfig::Stemmer { .. }));
        assert!(config.output.file.is_none());
    }

    #[test]
    fn can_create_hierarchical_config(){
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{
                "corpus": {{"reviews": "reviews.json", "malformed_records": "abort"}},
                "text": {{"stopwords": {{"file": "stopwords-long.txt"}}, "lemmatizer": {{"kind": "identity"}}}},
                "pipeline": {{"threshold": 0.05}},
                "system": {{"threads": 3}}
            }}"#
        ).unwrap();
        file.flush().unwrap();

        std::env::set_var("SENTIMENT.SYSTEM.LOG_TO_FILE", "true");
        let config = Configs::load_from(file.path());
        std::env::remove_var("SENTIMENT.SYSTEM.LOG_TO_FILE");
        let config = config.unwrap();

        assert_eq!(Some("reviews.json"), config.corpus.reviews.as_ref().map(|value| value.as_str()));
        assert_eq!(MalformedRecordPolicy::Abort, config.corpus.malformed_records);
        assert_eq!(StopWordRepository::File { file: "stopwords-long.txt".into() }, config.text.stopwords);
        assert!(matches!(config.text.lemmatizer, LemmatizerConfig::Identity));
        assert_eq!(0.05, config.pipeline.threshold);
        assert_eq!(ThresholdBasis::Rounded, config.pipeline.threshold_basis);
        assert_eq!(3, config.system.worker_threads());
        assert!(config.system.log_to_file);
    }

    #[test]
    fn missing_explicit_file_fails(){
        assert!(Configs::load_from("./not/a/config.json").is_err());
    }
}
