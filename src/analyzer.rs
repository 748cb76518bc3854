//! Efficiency estimation for asymmetric encryption on constrained devices
//!
//! Maps an algorithm choice, key size, and message length to estimated time,
//! memory, and battery figures via closed-form linear cost models. The figures
//! are illustrative approximations for teaching, not measured benchmarks.

use crate::algorithms::model_for;
use crate::models::{Algorithm, AnalysisRequest, EfficiencyReport};
use crate::{AnalyzerError, Result};
use log::{debug, info};
use std::ops::RangeInclusive;
use std::thread;
use std::time::Duration;

/// Recommended ECC key sizes, in bits
pub const ECC_KEY_SIZES: [u32; 3] = [256, 384, 521];
/// Recommended RSA key sizes, in bits
pub const RSA_KEY_SIZES: [u32; 3] = [1024, 2048, 4096];
/// Supported message length range, in bytes
pub const MESSAGE_LENGTH_RANGE: RangeInclusive<u32> = 64..=16384;

/// Estimates efficiency metrics for a single analysis request.
///
/// Deterministic: identical requests always produce identical reports. The
/// numeric fields are rounded to 2 decimal places at the output boundary;
/// intermediate arithmetic keeps full precision. Total over positive input —
/// zero or negative sizes are the caller's responsibility (see
/// [`validate_request`]).
///
/// # Arguments
/// * `request` - Algorithm, key size, and message length to analyze
///
/// # Returns
/// Estimated encryption/decryption time, memory usage, battery impact, and
/// a qualitative security level
pub fn estimate(request: &AnalysisRequest) -> EfficiencyReport {
    let model = model_for(request.algorithm);
    let bits = request.key_size_bits;
    let len = request.message_length_bytes;
    info!(
        "Analyzing {} with {} bit key and {} byte message",
        request.algorithm.as_str(),
        bits,
        len
    );

    let encryption_time = model.encryption_time_ms(bits, len);
    let decryption_time = model.decryption_time_ms(bits, len);
    let memory_usage = model.memory_usage_kb(bits, len);
    // Battery impact derives from the unrounded encryption time
    let battery_impact = encryption_time * model.battery_factor();

    debug!(
        "Raw estimates: enc={:.4}ms dec={:.4}ms mem={:.4}KB battery={:.4}mAh",
        encryption_time, decryption_time, memory_usage, battery_impact
    );

    EfficiencyReport {
        encryption_time_ms: round2(encryption_time),
        decryption_time_ms: round2(decryption_time),
        memory_usage_kb: round2(memory_usage),
        battery_impact_mah: round2(battery_impact),
        security_level: model.security_level(bits),
    }
}

/// Runs [`estimate`] after a cosmetic "analyzing..." pause.
///
/// The delay is a presentation concern only; the report is identical to an
/// immediate call with the same request.
pub fn estimate_with_simulated_latency(
    request: &AnalysisRequest,
    delay: Duration,
) -> EfficiencyReport {
    debug!("Simulating analysis latency of {:?}", delay);
    thread::sleep(delay);
    estimate(request)
}

/// Checks that a request falls inside the supported envelope.
///
/// The engine itself stays total over positive input; this helper is for
/// callers that want to reject inputs outside the recommended key sizes
/// (ECC: 256/384/521, RSA: 1024/2048/4096) or message lengths outside
/// 64..=16384 bytes before invoking [`estimate`].
pub fn validate_request(request: &AnalysisRequest) -> Result<()> {
    let supported: &[u32] = match request.algorithm {
        Algorithm::Ecc => &ECC_KEY_SIZES,
        Algorithm::Rsa => &RSA_KEY_SIZES,
    };
    if !supported.contains(&request.key_size_bits) {
        return Err(AnalyzerError::UnsupportedKeySize(format!(
            "{} bits is not a recommended {} key size (expected one of {:?})",
            request.key_size_bits,
            request.algorithm.as_str(),
            supported
        )));
    }
    if !MESSAGE_LENGTH_RANGE.contains(&request.message_length_bytes) {
        return Err(AnalyzerError::MessageLengthOutOfRange(format!(
            "{} bytes is outside the supported range {}..={}",
            request.message_length_bytes,
            MESSAGE_LENGTH_RANGE.start(),
            MESSAGE_LENGTH_RANGE.end()
        )));
    }
    Ok(())
}

// Rounding happens here and nowhere else
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
