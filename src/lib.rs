pub mod algorithms;
pub mod analyzer;
pub mod models;

use thiserror::Error;

use crate::models::SecurityLevel;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Unsupported key size: {0}")]
    UnsupportedKeySize(String),
    #[error("Message length out of range: {0}")]
    MessageLengthOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

// Common trait for per-algorithm cost profiles
pub trait CostModel {
    fn encryption_time_ms(&self, key_size_bits: u32, message_length_bytes: u32) -> f64;
    fn decryption_time_ms(&self, key_size_bits: u32, message_length_bytes: u32) -> f64;
    fn memory_usage_kb(&self, key_size_bits: u32, message_length_bytes: u32) -> f64;
    fn battery_factor(&self) -> f64;
    fn security_level(&self, key_size_bits: u32) -> SecurityLevel;
}
