use efficiency_analyzer::analyzer::{estimate_with_simulated_latency, validate_request};
use efficiency_analyzer::models::{Algorithm, AnalysisRequest};
use log::info;
use std::time::Duration;

fn main() {
    env_logger::init();
    info!("Efficiency analyzer initialized");

    let requests = vec![
        AnalysisRequest {
            algorithm: Algorithm::Ecc,
            key_size_bits: 256,
            message_length_bytes: 1024,
        },
        AnalysisRequest {
            algorithm: Algorithm::Rsa,
            key_size_bits: 2048,
            message_length_bytes: 1024,
        },
    ];

    for request in requests {
        validate_request(&request).expect("Request outside the supported envelope");
        info!(
            "Running analysis for {} ({} bit key, {} byte message)",
            request.algorithm.as_str(),
            request.key_size_bits,
            request.message_length_bytes
        );
        let report = estimate_with_simulated_latency(&request, Duration::from_millis(1500));
        let json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
        println!("{}", json);
    }
}
