#![no_main]
use largeint::LargeInteger;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for radix in [10, 16, 36] {
            if let Ok(x) = LargeInteger::from_str_radix(s, radix) {
                let text = x.to_string_radix(radix);
                assert_eq!(LargeInteger::from_str_radix(&text, radix).ok(), Some(x));
            }
        }
    }
});
