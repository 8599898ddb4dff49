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

//! The command line application.

mod args;
mod errors;
mod logging;
mod runner;

pub use args::{consume_args, create_example_config, write_config, ConsumedArgs, RunMode, SentimentArgs};
pub use errors::{ArgsError, RunError};
pub use logging::{configure_logging, LoggingError};
pub use runner::{run, RunSummary};

/// Consumes the args, configures the logging and runs if there is anything to run.
pub fn exec_args(args: SentimentArgs) -> Result<Option<RunSummary>, RunError> {
    match consume_args(args)? {
        ConsumedArgs::RunConfig(configs) => {
            configure_logging(&configs)?;
            let summary = run(&configs)?;
            log::info!(
                "Scored {} reviews ({}), {} significant words.",
                summary.counts.total(),
                summary.counts,
                summary.statistics.significant
            );
            Ok(Some(summary))
        }
        ConsumedArgs::Nothing => Ok(None)
    }
}
