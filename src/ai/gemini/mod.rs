pub mod assess;
pub mod client;
pub mod parse;
pub mod types;

pub use assess::{build_request, GeminiAssessmentClient, RetryPolicy};
pub use parse::parse_response;
