#![no_main]

use kafka_compose::Address;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(token) = std::str::from_utf8(data) {
        if let Ok(addr) = Address::parse(token, 9092) {
            assert_eq!(addr.to_string().split(':').count(), 2);
        }
    }
});
