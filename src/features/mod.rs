pub mod check_key;
pub mod summarize;

pub use check_key::check_api_key;
pub use summarize::{SummarizeCommand, SummarizeOutcome};
