mod support;

use std::fs;

use tempfile::tempdir;

use support::{run_stdbench, success_stdout};

#[test]
fn e2e_compare_renders_markdown() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(
        dir.path().join("system.csv"),
        "benchmark,operations,time_ns,ns_per_op,ops_per_sec\nstrlen,100,1000,10.00,100000000.00\nmemcpy,10,1000,100.00,10000000.00\n",
    )
    .map_err(|err| format!("write failed: {}", err))?;
    fs::write(
        dir.path().join("jemalloc.csv"),
        "benchmark;operations;time_ns;ns_per_op\nstrlen;100;2000;20.0\nmemcpy;10;1000;100.0\n",
    )
    .map_err(|err| format!("write failed: {}", err))?;
    fs::write(dir.path().join("header.md"), "# Allocator comparison\n")
        .map_err(|err| format!("write failed: {}", err))?;

    let output = run_stdbench(
        dir.path(),
        [
            "compare",
            "system.csv",
            "jemalloc.csv",
            "--baseline-label",
            "system",
            "--candidate-label",
            "jemalloc",
            "--header",
            "header.md",
        ],
    )?;
    let stdout = success_stdout(&output)?;

    let expected = [
        "# Allocator comparison",
        "| Benchmark | system ns/op | jemalloc ns/op | jemalloc vs system | Winner |",
        "| memcpy | 100.00 | 100.00 | +0.00% (tie ≤0.50%) | tie |",
        "| strlen | 10.00 | 20.00 | -100.00% slower | system |",
        "Overall (by count): system wins more benchmarks.",
    ];
    for line in expected {
        if !stdout.lines().any(|candidate| candidate == line) {
            return Err(format!("Missing {:?} in:\n{}", line, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_compare_writes_output_file() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let csv = "benchmark,ns_per_op\nqsort_int,5.0\n";
    fs::write(dir.path().join("a.csv"), csv).map_err(|err| format!("write failed: {}", err))?;
    fs::write(dir.path().join("b.csv"), csv).map_err(|err| format!("write failed: {}", err))?;

    let output = run_stdbench(dir.path(), ["compare", "a.csv", "b.csv", "-o", "REPORT.md"])?;
    success_stdout(&output)?;

    let report = fs::read_to_string(dir.path().join("REPORT.md"))
        .map_err(|err| format!("read report failed: {}", err))?;
    if !report.contains("- Ties (ns/op): 1") {
        return Err(format!("Unexpected report:\n{}", report));
    }
    Ok(())
}

#[test]
fn e2e_compare_missing_file_is_fatal() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_stdbench(dir.path(), ["compare", "nope.csv", "nope.csv"])?;
    if output.status.code() != Some(1) {
        return Err(format!("Expected exit code 1, got {:?}", output.status.code()));
    }
    Ok(())
}
