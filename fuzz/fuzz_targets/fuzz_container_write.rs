#![no_main]

use libfuzzer_sys::fuzz_target;

use circle_lab::{HiddenValue, ValidatedContainer};

fuzz_target!(|data: &[u8]| {
    let mut c = ValidatedContainer::create(1.0);
    for chunk in data.chunks_exact(8) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        let value = f64::from_le_bytes(bytes);

        let before = c.read();
        match c.write(value) {
            Ok(()) => assert_eq!(c.read().to_bits(), value.to_bits()),
            Err(_) => assert_eq!(c.read().to_bits(), before.to_bits()),
        }
        assert!(c.read() >= HiddenValue::MINIMUM);
    }
});
