//! Services — generation pipeline and the operations built on top of it.

pub mod cache;
pub mod generation;
pub mod page;
pub mod prompt;
pub mod response;
pub mod training;

#[cfg(test)]
pub mod test_helpers;
