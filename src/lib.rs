//! Heuristic token count estimation for LLM model families.
//!
//! ```
//! use tokencount::{estimate_tokens, Model};
//!
//! assert_eq!(estimate_tokens("hello world", Model::Gpt4), 2);
//! assert_eq!(estimate_tokens("!!", Model::Claude), 2);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod segment;
pub mod tokens;

pub use model::Model;
pub use segment::SegmentClass;
pub use tokens::{
    describe_model, estimate_tokens, estimate_verbose, Estimator, Segment, TokenEstimator,
    TokenInfo,
};
