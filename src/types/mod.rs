//! Core types for highlight verification.

pub mod token;
pub mod summary;
pub mod expectation;
pub mod verification;

pub use token::{TokenType, ParseTokenTypeError};
pub use summary::Summary;
pub use expectation::{
    ExpectationSet, PartialExpectations, ThresholdCheck, TestCase, ExpectationError,
};
pub use verification::{VerificationResult, KeywordReport, shortfall_message};
