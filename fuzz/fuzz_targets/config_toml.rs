#![no_main]

use libfuzzer_sys::fuzz_target;
use stdbench::config::types::ConfigFile;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parsed: Option<ConfigFile> = toml::from_str(input).ok();
        let applied = stdbench::fuzzing::apply_config_from_toml(input);
        if applied.is_ok() {
            if let Some(config) = parsed {
                if let Some(target_ms) = config.target_ms {
                    debug_assert!(target_ms >= 1);
                }
                if let Some(filters) = config.filters.as_ref() {
                    debug_assert!(filters.iter().all(|filter| !filter.trim().is_empty()));
                }
            }
        }
    }
});
