use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

/// Run the `stdbench` binary from `cwd` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_stdbench<I, S>(cwd: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = stdbench_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env("STDBENCH_LOG", "error")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .output()
        .map_err(|err| format!("run stdbench failed: {}", err))
}

/// Decode stdout, failing the test on a non-zero exit.
///
/// # Errors
///
/// Returns an error with stderr attached when the run failed.
pub fn success_stdout(output: &Output) -> Result<String, String> {
    if !output.status.success() {
        return Err(format!(
            "stdbench exited with {:?}: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    String::from_utf8(output.stdout.clone()).map_err(|err| format!("stdout not UTF-8: {}", err))
}

fn stdbench_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_stdbench").map_or_else(
        || Err("CARGO_BIN_EXE_stdbench missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
