#![no_main]

use libfuzzer_sys::fuzz_target;
use stdbench::config::types::ConfigFile;

fuzz_target!(|data: &[u8]| {
    let parsed: Option<ConfigFile> = serde_json::from_slice(data).ok();
    let applied = stdbench::fuzzing::apply_config_from_json(data);
    if applied.is_ok() {
        if let Some(target_ms) = parsed.and_then(|config| config.target_ms) {
            debug_assert!(target_ms >= 1);
        }
    }
});
