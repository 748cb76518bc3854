use efficiency_analyzer::analyzer::{estimate, ECC_KEY_SIZES, RSA_KEY_SIZES};
use efficiency_analyzer::models::{Algorithm, AnalysisRequest, EfficiencyReport};

fn request(algorithm: Algorithm, key_size_bits: u32, message_length_bytes: u32) -> AnalysisRequest {
    AnalysisRequest {
        algorithm,
        key_size_bits,
        message_length_bytes,
    }
}

#[test]
fn test_key_size_monotonicity() {
    // For a fixed message length, a larger key never gets cheaper
    for (algorithm, key_sizes) in [
        (Algorithm::Ecc, &ECC_KEY_SIZES),
        (Algorithm::Rsa, &RSA_KEY_SIZES),
    ] {
        let message_length = 1024;
        let mut previous: Option<EfficiencyReport> = None;
        for &bits in key_sizes {
            let report = estimate(&request(algorithm, bits, message_length));
            if let Some(prev) = previous {
                assert!(
                    report.encryption_time_ms >= prev.encryption_time_ms,
                    "Encryption time decreased for {} at {} bits",
                    algorithm.as_str(),
                    bits
                );
                assert!(
                    report.decryption_time_ms >= prev.decryption_time_ms,
                    "Decryption time decreased for {} at {} bits",
                    algorithm.as_str(),
                    bits
                );
                assert!(
                    report.memory_usage_kb >= prev.memory_usage_kb,
                    "Memory usage decreased for {} at {} bits",
                    algorithm.as_str(),
                    bits
                );
            }
            previous = Some(report);
        }
    }
}

#[test]
fn test_message_length_monotonicity() {
    // For a fixed key size, a longer message never gets cheaper
    let message_lengths = [64, 256, 1024, 4096, 16384];
    for (algorithm, bits) in [(Algorithm::Ecc, 256), (Algorithm::Rsa, 2048)] {
        let mut previous: Option<EfficiencyReport> = None;
        for &len in &message_lengths {
            let report = estimate(&request(algorithm, bits, len));
            if let Some(prev) = previous {
                assert!(
                    report.encryption_time_ms >= prev.encryption_time_ms,
                    "Encryption time decreased for {} at {} bytes",
                    algorithm.as_str(),
                    len
                );
                assert!(
                    report.decryption_time_ms >= prev.decryption_time_ms,
                    "Decryption time decreased for {} at {} bytes",
                    algorithm.as_str(),
                    len
                );
                assert!(
                    report.memory_usage_kb >= prev.memory_usage_kb,
                    "Memory usage decreased for {} at {} bytes",
                    algorithm.as_str(),
                    len
                );
            }
            previous = Some(report);
        }
    }
}

#[test]
fn test_battery_impact_tracks_encryption_time() {
    // Battery impact is a fixed multiple of encryption time, up to rounding
    let cases = [
        (Algorithm::Ecc, 256, 0.8),
        (Algorithm::Ecc, 521, 0.8),
        (Algorithm::Rsa, 1024, 1.5),
        (Algorithm::Rsa, 4096, 1.5),
    ];
    for (algorithm, bits, factor) in cases {
        for len in [64, 1000, 16384] {
            let report = estimate(&request(algorithm, bits, len));
            let expected = report.encryption_time_ms * factor;
            assert!(
                (report.battery_impact_mah - expected).abs() < 0.02,
                "Battery impact {} not {}x encryption time {} for {} at {} bytes",
                report.battery_impact_mah,
                factor,
                report.encryption_time_ms,
                algorithm.as_str(),
                len
            );
        }
    }
}

#[test]
fn test_ecc_outperforms_rsa_at_comparable_security() {
    // The pedagogical point of the tool: ECC 256 vs RSA 2048
    let ecc = estimate(&request(Algorithm::Ecc, 256, 1024));
    let rsa = estimate(&request(Algorithm::Rsa, 2048, 1024));
    assert!(ecc.encryption_time_ms < rsa.encryption_time_ms);
    assert!(ecc.decryption_time_ms < rsa.decryption_time_ms);
    assert!(ecc.memory_usage_kb < rsa.memory_usage_kb);
    assert!(ecc.battery_impact_mah < rsa.battery_impact_mah);
    assert_eq!(ecc.security_level, rsa.security_level);
}

#[test]
fn test_report_json_round_trip() {
    let report = estimate(&request(Algorithm::Rsa, 2048, 1024));
    let json = serde_json::to_string(&report).expect("Failed to serialize report");
    let parsed: EfficiencyReport = serde_json::from_str(&json).expect("Failed to parse report");
    assert_eq!(parsed, report, "Report should survive a JSON round trip");
}

#[test]
fn test_request_json_uses_lowercase_algorithm_tags() {
    let req = request(Algorithm::Ecc, 256, 1024);
    let json = serde_json::to_string(&req).expect("Failed to serialize request");
    assert!(json.contains("\"ecc\""), "Expected lowercase tag in {}", json);
    let parsed: AnalysisRequest = serde_json::from_str(&json).expect("Failed to parse request");
    assert_eq!(parsed, req);
}
