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

//! Computes per-word, per-sentiment TF-IDF scores over a corpus of rated
//! reviews and keeps the pairs that are significant for one sentiment.
//!
//! The work is done by four map/shuffle/reduce stages, see [pipeline].

pub mod app;
pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod sentiment;
