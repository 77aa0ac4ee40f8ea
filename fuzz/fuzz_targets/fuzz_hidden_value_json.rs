#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Deserialization must not produce a value below the minimum
        if let Ok(v) = serde_json::from_str::<circle_lab::HiddenValue>(content) {
            assert!(v.get() >= circle_lab::HiddenValue::MINIMUM);
        }
    }
});
