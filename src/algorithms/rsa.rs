use crate::models::SecurityLevel;
use crate::CostModel;

pub struct RsaModel;

impl CostModel for RsaModel {
    // RSA is slower with larger keys
    fn encryption_time_ms(&self, key_size_bits: u32, message_length_bytes: u32) -> f64 {
        (key_size_bits as f64 / 2048.0) * 45.0 + (message_length_bytes as f64 / 1024.0) * 15.0
    }

    fn decryption_time_ms(&self, key_size_bits: u32, message_length_bytes: u32) -> f64 {
        (key_size_bits as f64 / 2048.0) * 180.0 + (message_length_bytes as f64 / 1024.0) * 25.0
    }

    fn memory_usage_kb(&self, key_size_bits: u32, message_length_bytes: u32) -> f64 {
        (key_size_bits as f64 / 8.0) * 2.0 + message_length_bytes as f64 * 1.2
    }

    fn battery_factor(&self) -> f64 {
        1.5
    }

    fn security_level(&self, key_size_bits: u32) -> SecurityLevel {
        if key_size_bits >= 2048 {
            SecurityLevel::High
        } else {
            SecurityLevel::Medium
        }
    }
}
