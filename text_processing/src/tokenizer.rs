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

use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use compact_str::CompactString;
use itertools::Itertools;
use crate::lemmatizer::{IdentityLemmatizer, Lemmatizer};
use crate::stopwords::{StopWordFilter, StopWordList};

/// Splits review texts into normalized candidate words.
/// Can be shared across threads, the stopwords and the lemmatizer are read only.
#[derive(Clone)]
pub struct Tokenizer {
    stop_words: Arc<dyn StopWordFilter>,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl Tokenizer {

    pub fn new(
        stop_words: Arc<dyn StopWordFilter>,
        lemmatizer: Arc<dyn Lemmatizer>
    ) -> Self {
        Self {
            stop_words,
            lemmatizer
        }
    }

    /// A tokenizer without stopwords and without lemmatization.
    pub fn plain() -> Self {
        Self::new(Arc::new(StopWordList::default()), Arc::new(IdentityLemmatizer))
    }

    /// Preprocesses a text.
    ///
    /// Everything that is not an ascii letter separates words, the words are
    /// lowercased, stopwords are dropped and the remaining words are lemmatized.
    pub fn tokenize(&self, text: &str) -> Vec<CompactString> {
        let cleaned = text
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { c.to_ascii_lowercase() } else { ' ' })
            .collect::<String>();

        cleaned
            .split_whitespace()
            .filter(|word| !self.stop_words.is_stop_word(word))
            .filter_map(|word| {
                let lemma = self.lemmatizer.lemmatize(word);
                (!lemma.is_empty()).then(|| CompactString::from(lemma))
            })
            .collect_vec()
    }
}

impl Debug for Tokenizer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer").finish_non_exhaustive()
    }
}
