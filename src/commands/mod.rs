//! Command implementations

pub mod simple;
pub mod solutions;
pub mod survey;

pub use simple::run_simple;
pub use solutions::find_solutions;
pub use survey::{SurveyStatistics, run_survey, summarize};
