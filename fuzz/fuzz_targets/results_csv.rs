#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(results) = stdbench::fuzzing::parse_results_input(input) {
            let comparison = stdbench::report::compare(&results, &results, 0.0);
            debug_assert_eq!(comparison.rows.len(), results.len());
            debug_assert_eq!(comparison.unmatched, 0);
            for row in results.values() {
                debug_assert!(row.ns_per_op.is_finite() && row.ops_per_sec.is_finite());
            }
        }
    }
});
