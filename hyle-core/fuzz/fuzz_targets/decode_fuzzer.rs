#![no_main]
use hyle_core::HyleOutput;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok((output, _rest)) = HyleOutput::decode_with_remainder(&hyle_core::tokens::tokenize(s)) {
            // Anything that decodes must encode back to a decodable stream.
            let tokens = output.encode().expect("decoded strings are single-byte");
            assert_eq!(HyleOutput::from_tokens(&tokens).as_ref(), Ok(&output));
        }
    }
});
