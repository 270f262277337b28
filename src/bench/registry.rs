use super::suites::{alloc, format, io, memory, parse, sort, string};
use super::{BenchDef, BenchGroup};

/// Every case, in reporting order.
static BENCHMARKS: [BenchDef; 35] = [
    BenchDef::new("strlen", BenchGroup::String, string::setup_strlen),
    BenchDef::new("strcmp", BenchGroup::String, string::setup_strcmp),
    BenchDef::new("strcpy", BenchGroup::String, string::setup_strcpy),
    BenchDef::new("strcat", BenchGroup::String, string::setup_strcat),
    BenchDef::new("strchr", BenchGroup::String, string::setup_strchr),
    BenchDef::new("memcmp", BenchGroup::Memory, memory::setup_memcmp),
    BenchDef::new("memcpy", BenchGroup::Memory, memory::setup_memcpy),
    BenchDef::new("memmove", BenchGroup::Memory, memory::setup_memmove),
    BenchDef::new("memset", BenchGroup::Memory, memory::setup_memset),
    BenchDef::new("memchr", BenchGroup::Memory, memory::setup_memchr),
    BenchDef::new("memrchr", BenchGroup::Memory, memory::setup_memrchr),
    BenchDef::new("qsort_int", BenchGroup::Sort, sort::setup_qsort),
    BenchDef::new("bsearch_int", BenchGroup::Sort, sort::setup_bsearch),
    BenchDef::new("malloc_free_small", BenchGroup::Alloc, alloc::setup_malloc_small),
    BenchDef::new("malloc_free_medium", BenchGroup::Alloc, alloc::setup_malloc_medium),
    BenchDef::new("realloc_pattern", BenchGroup::Alloc, alloc::setup_realloc_pattern),
    BenchDef::new("sprintf_int", BenchGroup::Format, format::setup_sprintf_int),
    BenchDef::new("sprintf_float", BenchGroup::Format, format::setup_sprintf_float),
    BenchDef::new("snprintf_mix", BenchGroup::Format, format::setup_snprintf_mix),
    BenchDef::new("strtod_parse", BenchGroup::Parse, parse::setup_strtod),
    BenchDef::new("strtok_parse", BenchGroup::Parse, parse::setup_strtok),
    BenchDef::new("regex_match", BenchGroup::Parse, parse::setup_regex),
    BenchDef::new("atoi_parse", BenchGroup::Parse, parse::setup_atoi),
    BenchDef::new("strstr_search", BenchGroup::String, string::setup_strstr),
    BenchDef::new("strnlen", BenchGroup::String, string::setup_strnlen),
    BenchDef::new("strncmp", BenchGroup::String, string::setup_strncmp),
    BenchDef::new("strncpy", BenchGroup::String, string::setup_strncpy),
    BenchDef::new("strncat", BenchGroup::String, string::setup_strncat),
    BenchDef::new("strrchr", BenchGroup::String, string::setup_strrchr),
    BenchDef::new("strtok_r_parse", BenchGroup::Parse, parse::setup_strtok_r),
    BenchDef::new("file_io_rw", BenchGroup::Io, io::setup_file_io),
    BenchDef::new("fgets_read", BenchGroup::Io, io::setup_fgets),
    BenchDef::new("getline_read", BenchGroup::Io, io::setup_getline),
    BenchDef::new("vsnprintf_mix", BenchGroup::Format, format::setup_vsnprintf_mix),
    BenchDef::new("vprintf_mix", BenchGroup::Format, format::setup_vprintf_mix),
];

/// The full, ordered benchmark table.
#[must_use]
pub fn registry() -> &'static [BenchDef] {
    &BENCHMARKS
}

#[must_use]
pub fn find(name: &str) -> Option<&'static BenchDef> {
    BENCHMARKS.iter().find(|def| def.name == name)
}

/// Cases whose name contains any of `filters` and whose group is one of
/// `groups`. An empty list places no constraint. Table order is preserved.
#[must_use]
pub fn select(filters: &[String], groups: &[BenchGroup]) -> Vec<&'static BenchDef> {
    BENCHMARKS
        .iter()
        .filter(|def| filters.is_empty() || filters.iter().any(|f| def.name.contains(f.as_str())))
        .filter(|def| groups.is_empty() || groups.contains(&def.group))
        .collect()
}
