//Copyright 2024 Felix Engl
//
//Licensed under the Apache License, Version 2.0 (the "License");
//you may not use this file except in compliance with the License.
//You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
//Unless required by applicable law or agreed to in writing, software
//distributed under the License is distributed on an "AS IS" BASIS,
//WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//See the License for the specific language governing permissions and
//limitations under the License.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::lemmatizer::{LemmatizerConfig, LemmatizerLoadError};
use crate::stopwords::{StopWordLoadError, StopWordRepository};
use crate::tokenizer::Tokenizer;

/// The config for the text processing used by other modules.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TokenizerConfig {
    /// The source of the stopwords, no stopwords if not set.
    #[serde(default)]
    pub stopwords: StopWordRepository,
    /// The lemmatizer, a snowball stemmer for english if not set.
    #[serde(default)]
    pub lemmatizer: LemmatizerConfig,
}

#[derive(Debug, Error)]
pub enum TokenizerCreationError {
    #[error(transparent)]
    StopWords(#[from] StopWordLoadError),
    #[error(transparent)]
    Lemmatizer(#[from] LemmatizerLoadError),
}

impl TokenizerConfig {
    /// Loads the stopwords and the lemmatizer.
    pub fn build(&self) -> Result<Tokenizer, TokenizerCreationError> {
        let stop_words = self.stopwords.load()?;
        log::info!("Using {} stopwords and the lemmatizer {:?}.", stop_words.len(), self.lemmatizer);
        let lemmatizer = self.lemmatizer.build()?;
        Ok(Tokenizer::new(Arc::new(stop_words), lemmatizer))
    }
}

#[cfg(test)]
mod test {
    use crate::configs::TokenizerConfig;
    use crate::lemmatizer::LemmatizerConfig;
    use crate::stopwords::StopWordRepository;

    #[test]
    fn can_build_from_json(){
        let config: TokenizerConfig = serde_json::from_str(
            r#"{"stopwords": {"words": ["the", "was"]}, "lemmatizer": {"kind": "identity"}}"#
        ).unwrap();
        let tokenizer = config.build().unwrap();
        assert_eq!(
            vec!["rooms", "clean"],
            tokenizer.tokenize("The rooms was clean").iter().map(|value| value.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn missing_stopword_file_fails(){
        let config = TokenizerConfig {
            stopwords: StopWordRepository::File { file: "./not/there.txt".into() },
            lemmatizer: LemmatizerConfig::Identity
        };
        assert!(config.build().is_err());
    }
}
