use crate::models::SecurityLevel;
use crate::CostModel;

pub struct EccModel;

impl CostModel for EccModel {
    // ECC is generally faster with smaller keys
    fn encryption_time_ms(&self, key_size_bits: u32, message_length_bytes: u32) -> f64 {
        (key_size_bits as f64 / 256.0) * 12.0 + (message_length_bytes as f64 / 1024.0) * 5.0
    }

    fn decryption_time_ms(&self, key_size_bits: u32, message_length_bytes: u32) -> f64 {
        (key_size_bits as f64 / 256.0) * 15.0 + (message_length_bytes as f64 / 1024.0) * 6.0
    }

    fn memory_usage_kb(&self, key_size_bits: u32, message_length_bytes: u32) -> f64 {
        (key_size_bits as f64 / 8.0) + message_length_bytes as f64 * 0.5
    }

    fn battery_factor(&self) -> f64 {
        0.8
    }

    fn security_level(&self, key_size_bits: u32) -> SecurityLevel {
        if key_size_bits >= 256 {
            SecurityLevel::High
        } else {
            SecurityLevel::Medium
        }
    }
}
