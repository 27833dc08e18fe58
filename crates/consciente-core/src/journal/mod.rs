//! Journal entry capture.

mod capture;

pub use capture::{submit, validate, Submission, MAX_TIREDNESS};
