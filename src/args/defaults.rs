/// Config filenames checked, in order, when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["stdbench.toml", "stdbench.json"];

pub(super) const DEFAULT_TIE_THRESHOLD_PCT: f64 = 0.5;
pub(super) const DEFAULT_BASELINE_LABEL: &str = "baseline";
pub(super) const DEFAULT_CANDIDATE_LABEL: &str = "candidate";
