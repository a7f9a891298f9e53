mod utils;

#[cfg(test)]
mod test_utils;

pub mod abstractions;
pub mod analyzer;
pub mod bucketer;
pub mod constants;
pub mod jobs;
pub mod leaderboard;
pub mod logger;
pub mod models;
pub mod window;

pub use analyzer::{AnalysisOptions, CardAnalyzer};
pub use utils::{format_offset, split_pascal_case};
