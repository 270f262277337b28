//! C-string style primitives mapped onto `str`, `CStr` and byte slices.

use std::cmp::Ordering;
use std::ffi::CStr;
use std::hint::black_box;

use crate::bench::buffers::{
    cycle_letter, letters_nul_terminated, try_filled, try_string_with_capacity,
};
use crate::bench::{Sink, Workload};
use crate::error::BenchResult;

const STRLEN_LEN: usize = 1024;
const STRCPY_LEN: usize = 2047;
const STRCHR_LEN: usize = 4096;
const STRNLEN_CAP: usize = 4096;
const STRNLEN_NUL_EVERY: usize = 97;
const STRNCMP_LEN: usize = 2048;
const STRNCPY_LEN: usize = 4096;
const STRNCPY_SLACK: usize = 16;
const STRRCHR_LEN: usize = 10_000;
const STRRCHR_MARK_EVERY: usize = 101;
const HAYSTACK_LEN: usize = 65_536;
const NEEDLE_COUNT: usize = 16;
/// Appends performed per iteration by the concatenation cases.
const APPENDS: u64 = 16;

const COMPARE_TEXT: &str = "The quick brown fox jumps over the lazy dog 1234567890";
const STRCAT_PIECE: &str = "segment1234567890";
const STRNCAT_PIECE: &str = "segment_data_block_";
const HAYSTACK_SEGMENT: &str = "lorem_ipsum_dolor_sit_amet_consectetur_";
const MARKERS: [&str; 3] = ["ALPHA_token_X", "BETA_token_Y", "GAMMA_token_Z"];

pub(crate) fn ordering_code(ordering: Ordering) -> u64 {
    match ordering {
        Ordering::Less => 1,
        Ordering::Equal => 2,
        Ordering::Greater => 3,
    }
}

fn index(iteration: u64, len: usize) -> usize {
    // Bounded by `len`, which is a usize.
    (iteration % len as u64) as usize
}

struct Strlen {
    text: Vec<u8>,
}

pub(crate) fn setup_strlen() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(Strlen {
        text: letters_nul_terminated(STRLEN_LEN, b'A')?,
    }))
}

impl Workload for Strlen {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            let bytes = black_box(self.text.as_slice());
            let len = CStr::from_bytes_until_nul(bytes).map_or(0, CStr::count_bytes);
            sink.fold(len as u64);
            ops += 1;
        }
        Ok(ops)
    }
}

struct Strcmp {
    left: String,
    right: String,
}

pub(crate) fn setup_strcmp() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(Strcmp {
        left: COMPARE_TEXT.to_owned(),
        right: COMPARE_TEXT.to_owned(),
    }))
}

impl Workload for Strcmp {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            let left = black_box(self.left.as_str());
            sink.fold(ordering_code(left.cmp(self.right.as_str())));
            ops += 1;
        }
        Ok(ops)
    }
}

struct Strcpy {
    src: String,
    dst: String,
}

fn letters(len: usize, first: u8) -> BenchResult<String> {
    let mut text = try_string_with_capacity(len)?;
    text.extend((0..len).map(|i| char::from(cycle_letter(first, i))));
    Ok(text)
}

pub(crate) fn setup_strcpy() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(Strcpy {
        src: letters(STRCPY_LEN, b'a')?,
        dst: try_string_with_capacity(STRCPY_LEN.saturating_add(1))?,
    }))
}

impl Workload for Strcpy {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            self.dst.clear();
            self.dst.push_str(black_box(self.src.as_str()));
            sink.consume(self.dst.as_ptr());
            ops += 1;
        }
        Ok(ops)
    }
}

struct Concat {
    piece: &'static str,
    buf: String,
}

pub(crate) fn setup_strcat() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(Concat {
        piece: STRCAT_PIECE,
        buf: try_string_with_capacity(1024)?,
    }))
}

impl Workload for Concat {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            self.buf.clear();
            for _ in 0..APPENDS {
                self.buf.push_str(black_box(self.piece));
                sink.consume(self.buf.len());
                ops += 1;
            }
        }
        Ok(ops)
    }
}

struct Strchr {
    text: String,
}

pub(crate) fn setup_strchr() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(Strchr {
        text: letters(STRCHR_LEN, b'a')?,
    }))
}

impl Workload for Strchr {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        let mut acc: i64 = 0;
        for i in 0..iterations {
            let target = char::from(cycle_letter(b'a', index(i, 26)));
            match black_box(self.text.as_str()).find(black_box(target)) {
                Some(offset) => acc = acc.wrapping_add(offset as i64),
                None => acc = acc.wrapping_sub(1),
            }
            ops += 1;
        }
        sink.fold(acc as u64);
        Ok(ops)
    }
}

struct Strnlen {
    text: Vec<u8>,
}

pub(crate) fn setup_strnlen() -> BenchResult<Box<dyn Workload>> {
    let mut text = try_filled(STRNLEN_CAP, 0_u8)?;
    for (i, byte) in text.iter_mut().enumerate().take(STRNLEN_CAP - 1) {
        if i == 0 || i % STRNLEN_NUL_EVERY != 0 {
            *byte = cycle_letter(b'a', i);
        }
    }
    Ok(Box::new(Strnlen { text }))
}

impl Workload for Strnlen {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for i in 0..iterations {
            let limit = (16 + index(i, STRNLEN_CAP)).min(self.text.len());
            let bounded = black_box(&self.text[..limit]);
            let len = bounded.iter().position(|b| *b == 0).unwrap_or(limit);
            sink.fold(len as u64);
            ops += 1;
        }
        Ok(ops)
    }
}

struct Strncmp {
    left: Vec<u8>,
    right: Vec<u8>,
}

pub(crate) fn setup_strncmp() -> BenchResult<Box<dyn Workload>> {
    let left = letters(STRNCMP_LEN, b'a')?.into_bytes();
    let mut right = left.clone();
    if let Some(byte) = right.get_mut(STRNCMP_LEN / 2) {
        *byte = b'Z';
    }
    Ok(Box::new(Strncmp { left, right }))
}

impl Workload for Strncmp {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for i in 0..iterations {
            let n = (8 + index(i.wrapping_mul(13), STRNCMP_LEN)).min(STRNCMP_LEN);
            let left = black_box(&self.left[..n]);
            sink.fold(ordering_code(left.cmp(&self.right[..n])));
            ops += 1;
        }
        Ok(ops)
    }
}

struct Strncpy {
    src: Vec<u8>,
    dst: Vec<u8>,
}

pub(crate) fn setup_strncpy() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(Strncpy {
        src: letters(STRNCPY_LEN, b'A')?.into_bytes(),
        dst: try_filled(STRNCPY_LEN + STRNCPY_SLACK, 0_u8)?,
    }))
}

impl Workload for Strncpy {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for i in 0..iterations {
            let n = (32 + index(i, STRNCPY_LEN)).min(self.dst.len());
            let copied = n.min(self.src.len());
            let (head, tail) = self.dst.split_at_mut(copied);
            head.copy_from_slice(black_box(&self.src[..copied]));
            // Zero padding up to `n`, like the bounded C copy.
            tail[..n - copied].fill(0);
            sink.consume(self.dst.as_ptr());
            ops += 1;
        }
        Ok(ops)
    }
}

struct Strncat {
    piece: &'static str,
    buf: String,
}

pub(crate) fn setup_strncat() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(Strncat {
        piece: STRNCAT_PIECE,
        buf: try_string_with_capacity(8192)?,
    }))
}

impl Workload for Strncat {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for i in 0..iterations {
            self.buf.clear();
            let take = (8 + index(i, 8)).min(self.piece.len());
            for _ in 0..APPENDS {
                self.buf.push_str(black_box(&self.piece[..take]));
                ops += 1;
            }
            sink.fold(self.buf.len() as u64);
        }
        Ok(ops)
    }
}

struct Strrchr {
    text: Vec<u8>,
}

pub(crate) fn setup_strrchr() -> BenchResult<Box<dyn Workload>> {
    let mut text = try_filled(STRRCHR_LEN, 0_u8)?;
    for (i, byte) in text.iter_mut().enumerate() {
        *byte = if i % STRRCHR_MARK_EVERY == 0 {
            b'X'
        } else {
            cycle_letter(b'a', i)
        };
    }
    Ok(Box::new(Strrchr { text }))
}

impl Workload for Strrchr {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        let len = self.text.len();
        for i in 0..iterations {
            // Move the last 'X' around so the search result changes.
            let idx = index(i.wrapping_mul(131), len);
            let replacement = if self.text[idx] == b'X' {
                cycle_letter(b'a', index(i, 26))
            } else {
                b'X'
            };
            self.text[idx] = replacement;

            if let Some(offset) = black_box(self.text.as_slice())
                .iter()
                .rposition(|b| *b == b'X')
            {
                sink.fold(offset as u64);
            }
            ops += 1;
        }
        Ok(ops)
    }
}

struct SubstringSearch {
    haystack: String,
    needles: Vec<String>,
}

fn build_haystack() -> BenchResult<String> {
    let segment = HAYSTACK_SEGMENT.as_bytes();
    let mut bytes = try_filled(HAYSTACK_LEN, 0_u8)?;
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = segment[i % segment.len()];
    }
    let stride = HAYSTACK_LEN / (MARKERS.len() + 1);
    for (m, marker) in MARKERS.iter().enumerate() {
        let pos = stride * (m + 1);
        if let Some(slot) = bytes.get_mut(pos..pos + marker.len()) {
            slot.copy_from_slice(marker.as_bytes());
        }
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub(crate) fn setup_strstr() -> BenchResult<Box<dyn Workload>> {
    let needles = (0..NEEDLE_COUNT)
        .map(|i| match i {
            0..5 => MARKERS[i % MARKERS.len()].to_owned(),
            5..8 => "ipsum_dolor_sit".to_owned(),
            8..11 => "consectetur_lorem".to_owned(),
            _ => format!("no_such_substring_{}", i),
        })
        .collect();
    Ok(Box::new(SubstringSearch {
        haystack: build_haystack()?,
        needles,
    }))
}

impl Workload for SubstringSearch {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        let count = self.needles.len();
        if count == 0 {
            return Ok(0);
        }
        for i in 0..iterations {
            let start = index(i, count);
            for k in 0..count {
                let needle = &self.needles[(start + k) % count];
                let found = black_box(self.haystack.as_str()).find(needle.as_str());
                sink.fold(found.map_or(u64::MAX, |pos| pos as u64));
                ops += 1;
            }
        }
        Ok(ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::suites::test_support::{expect_ops, run_workload};

    #[test]
    fn single_op_cases_report_one_op_per_iteration() -> Result<(), String> {
        let cases: [(&str, fn() -> BenchResult<Box<dyn Workload>>); 8] = [
            ("strlen", setup_strlen),
            ("strcmp", setup_strcmp),
            ("strcpy", setup_strcpy),
            ("strchr", setup_strchr),
            ("strnlen", setup_strnlen),
            ("strncmp", setup_strncmp),
            ("strncpy", setup_strncpy),
            ("strrchr", setup_strrchr),
        ];
        for (name, setup) in cases {
            expect_ops(setup, 37, 37).map_err(|err| format!("{}: {}", name, err))?;
        }
        Ok(())
    }

    #[test]
    fn concatenation_cases_append_sixteen_times() -> Result<(), String> {
        expect_ops(setup_strcat, 3, 48)?;
        expect_ops(setup_strncat, 3, 48)?;
        Ok(())
    }

    #[test]
    fn substring_search_runs_every_needle() -> Result<(), String> {
        expect_ops(setup_strstr, 2, 32)?;
        Ok(())
    }

    #[test]
    fn zero_iterations_perform_no_work() -> Result<(), String> {
        let (ops, sink) = run_workload(setup_strlen, 0)?;
        if ops != 0 || sink.consumed() != 0 {
            return Err("Expected no work for zero iterations".to_owned());
        }
        Ok(())
    }

    #[test]
    fn strlen_reports_buffer_length() -> Result<(), String> {
        let text = letters_nul_terminated(STRLEN_LEN, b'A').map_err(|err| err.to_string())?;
        let len = CStr::from_bytes_until_nul(&text).map_or(0, CStr::count_bytes);
        if len != STRLEN_LEN {
            return Err(format!("Unexpected length: {}", len));
        }
        Ok(())
    }

    #[test]
    fn haystack_contains_every_marker() -> Result<(), String> {
        let haystack = build_haystack().map_err(|err| err.to_string())?;
        if haystack.len() != HAYSTACK_LEN {
            return Err(format!("Unexpected haystack length: {}", haystack.len()));
        }
        for marker in MARKERS {
            if !haystack.contains(marker) {
                return Err(format!("Missing marker {}", marker));
            }
        }
        if haystack.contains("no_such_substring_") {
            return Err("Unexpected match for absent needle".to_owned());
        }
        Ok(())
    }

    #[test]
    fn strnlen_stops_at_embedded_nul() -> Result<(), String> {
        let (_, sink) = run_workload(setup_strnlen, 1)?;
        let mut expected = Sink::new();
        expected.fold(16);
        if sink.checksum() != expected.checksum() {
            return Err("Expected first bounded length to equal the limit".to_owned());
        }
        Ok(())
    }
}
