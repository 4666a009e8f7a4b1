pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod output;
pub mod record;
pub mod triage;

pub use cli::{Cli, Command, OutputFormat, ScanArgs, SearchArgs};
pub use error::{Error, ExitCode, Result};
pub use matcher::{MatchError, Method, is_flagged};
pub use record::CommentRecord;
pub use triage::ScanOutcome;

#[cfg(test)]
pub mod test_utils;
