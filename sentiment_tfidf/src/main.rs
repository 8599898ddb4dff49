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

use std::process::ExitCode;
use clap::Parser;
use sentiment_tfidf::app::{exec_args, SentimentArgs};

fn main() -> ExitCode {
    match exec_args(SentimentArgs::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if log::max_level() == log::LevelFilter::Off {
                eprintln!("Failed with: {err}");
            } else {
                log::error!("Failed with: {err}");
            }
            ExitCode::FAILURE
        }
    }
}
