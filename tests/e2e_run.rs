mod support;

use std::fs;

use tempfile::tempdir;

use support::{run_stdbench, success_stdout};

const HEADER: &str = "benchmark,operations,time_ns,ns_per_op,ops_per_sec";

fn check_row(line: &str, name: &str) -> Result<(), String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 5 || fields.first().copied() != Some(name) {
        return Err(format!("Unexpected row: {}", line));
    }
    let operations: u64 = fields
        .get(1)
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| format!("Bad operations in {}", line))?;
    if operations == 0 {
        return Err(format!("Expected operations > 0 in {}", line));
    }
    for value in fields.iter().skip(3) {
        let (_, decimals) = value
            .split_once('.')
            .ok_or_else(|| format!("Expected two decimals in {}", line))?;
        if decimals.len() != 2 {
            return Err(format!("Expected two decimals in {}", line));
        }
    }
    Ok(())
}

#[test]
fn e2e_run_single_benchmark_csv() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_stdbench(dir.path(), ["-t", "1", "--filter", "strlen"])?;
    let stdout = success_stdout(&output)?;

    let lines: Vec<&str> = stdout.lines().collect();
    if lines.first().copied() != Some(HEADER) {
        return Err(format!("Missing header:\n{}", stdout));
    }
    if lines.len() != 2 {
        return Err(format!("Expected one result row:\n{}", stdout));
    }
    check_row(lines.get(1).copied().unwrap_or_default(), "strlen")
}

#[test]
fn e2e_run_group_in_registry_order() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_stdbench(dir.path(), ["-t", "1", "-g", "sort"])?;
    let stdout = success_stdout(&output)?;

    let names: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .collect();
    if names != ["qsort_int", "bsearch_int"] {
        return Err(format!("Unexpected benchmarks: {:?}", names));
    }
    Ok(())
}

#[test]
fn e2e_run_json_to_file() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let out_path = dir.path().join("results.json");
    let out_arg = out_path.to_string_lossy().into_owned();
    let output = run_stdbench(
        dir.path(),
        ["-t", "1", "-f", "memchr", "-f", "memrchr", "--output-format", "json", "-o", out_arg.as_str()],
    )?;
    let stdout = success_stdout(&output)?;
    if !stdout.is_empty() {
        return Err(format!("Expected empty stdout, got:\n{}", stdout));
    }

    let content = fs::read_to_string(&out_path).map_err(|err| format!("read failed: {}", err))?;
    let doc: serde_json::Value =
        serde_json::from_str(&content).map_err(|err| format!("invalid JSON: {}", err))?;
    let names: Vec<&str> = doc
        .get("results")
        .and_then(|results| results.as_array())
        .ok_or("Missing results array")?
        .iter()
        .filter_map(|record| record.get("benchmark").and_then(|name| name.as_str()))
        .collect();
    if names != ["memchr", "memrchr"] {
        return Err(format!("Unexpected results: {:?}", names));
    }
    if doc.get("target_ms").and_then(|value| value.as_u64()) != Some(1) {
        return Err("Unexpected target_ms".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_run_uses_default_config_file() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(
        dir.path().join("stdbench.toml"),
        "target_ms = 1\nfilters = [\"atoi\"]\noutput_format = \"jsonl\"\n",
    )
    .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_stdbench(dir.path(), Vec::<&str>::new())?;
    let stdout = success_stdout(&output)?;
    let lines: Vec<&str> = stdout.lines().collect();
    if lines.len() != 1 {
        return Err(format!("Expected one JSONL line:\n{}", stdout));
    }
    let record: serde_json::Value = serde_json::from_str(lines.first().copied().unwrap_or_default())
        .map_err(|err| format!("invalid JSONL: {}", err))?;
    if record.get("benchmark").and_then(|name| name.as_str()) != Some("atoi_parse") {
        return Err(format!("Unexpected record: {}", record));
    }
    Ok(())
}

#[test]
fn e2e_list_prints_every_benchmark() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_stdbench(dir.path(), ["list"])?;
    let stdout = success_stdout(&output)?;

    let lines: Vec<&str> = stdout.lines().collect();
    if lines.len() != 35 {
        return Err(format!("Expected 35 benchmarks, got {}", lines.len()));
    }
    if lines.first().copied() != Some("strlen,string") || lines.last().copied() != Some("vprintf_mix,format") {
        return Err(format!("Unexpected listing:\n{}", stdout));
    }
    Ok(())
}
