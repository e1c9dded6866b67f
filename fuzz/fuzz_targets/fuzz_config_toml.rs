#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing should never panic
        if let Ok(config) = toml::from_str::<emergency_banner::Config>(content) {
            let _ = config.remote.file_mode_bits();
        }
    }
});
