#![no_main]
use hyle_core::ProofEnvelope;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(envelope) = ProofEnvelope::from_bytes(data) {
        let bytes = envelope.to_bytes().expect("sections came from a u32 prefix");
        assert_eq!(bytes, data);
    }
});
