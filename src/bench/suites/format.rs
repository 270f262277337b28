//! Number and mixed formatting through `core::fmt`.

use std::fmt::{self, Write as _};
use std::hint::black_box;

use crate::bench::buffers::{try_filled, try_from_fn, try_string_with_capacity};
use crate::bench::{Sink, Workload};
use crate::error::BenchResult;

const INT_VALUES: usize = 256;
const FLOAT_VALUES: usize = 128;
const MIX_VALUES: usize = 128;
const MIX_CAPACITY: usize = 256;
const ARGS_CAPACITY: usize = 512;

/// Fixed-capacity output buffer with `snprintf` semantics: output past the
/// capacity is dropped, and the untruncated length is still reported.
pub(crate) struct BoundedBuf {
    bytes: Vec<u8>,
    written: usize,
    wanted: usize,
}

impl BoundedBuf {
    pub(crate) fn with_capacity(capacity: usize) -> BenchResult<Self> {
        Ok(Self {
            bytes: try_filled(capacity, 0_u8)?,
            written: 0,
            wanted: 0,
        })
    }

    /// Format `args` from the start of the buffer and return the length the
    /// full output would have had.
    pub(crate) fn format(&mut self, args: fmt::Arguments<'_>) -> BenchResult<usize> {
        self.written = 0;
        self.wanted = 0;
        self.write_fmt(args)?;
        Ok(self.wanted)
    }

    #[cfg(test)]
    fn as_bytes(&self) -> &[u8] {
        self.bytes.get(..self.written).unwrap_or_default()
    }
}

impl fmt::Write for BoundedBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.wanted = self.wanted.saturating_add(s.len());
        let room = self.bytes.len().saturating_sub(self.written);
        let take = s.len().min(room);
        if let (Some(dst), Some(src)) = (
            self.bytes.get_mut(self.written..self.written + take),
            s.as_bytes().get(..take),
        ) {
            dst.copy_from_slice(src);
            self.written += take;
        }
        Ok(())
    }
}

struct FormatInts {
    values: Vec<i32>,
    buf: String,
}

pub(crate) fn setup_sprintf_int() -> BenchResult<Box<dyn Workload>> {
    let values = try_from_fn(INT_VALUES, |i| (i * i + 12_345) as i32)?;
    Ok(Box::new(FormatInts {
        values,
        buf: try_string_with_capacity(32)?,
    }))
}

impl Workload for FormatInts {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            for value in &self.values {
                self.buf.clear();
                write!(self.buf, "{}", black_box(value))?;
                sink.fold(self.buf.len() as u64);
                ops += 1;
            }
        }
        Ok(ops)
    }
}

struct FormatFloats {
    values: Vec<f64>,
    buf: String,
}

pub(crate) fn setup_sprintf_float() -> BenchResult<Box<dyn Workload>> {
    let values = try_from_fn(FLOAT_VALUES, |i| i as f64 / std::f64::consts::PI)?;
    Ok(Box::new(FormatFloats {
        values,
        buf: try_string_with_capacity(64)?,
    }))
}

impl Workload for FormatFloats {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            for value in &self.values {
                self.buf.clear();
                write!(self.buf, "{:.6}", black_box(value))?;
                sink.fold(self.buf.len() as u64);
                ops += 1;
            }
        }
        Ok(ops)
    }
}

struct FormatMix {
    ints: Vec<i32>,
    floats: Vec<f64>,
    buf: BoundedBuf,
}

pub(crate) fn setup_snprintf_mix() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(FormatMix {
        ints: try_from_fn(MIX_VALUES, |i| (i * 37) as i32)?,
        floats: try_from_fn(MIX_VALUES, |i| i as f64 * 0.125 + 0.333)?,
        buf: BoundedBuf::with_capacity(MIX_CAPACITY)?,
    }))
}

impl Workload for FormatMix {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            for (k, (int, float)) in self.ints.iter().zip(&self.floats).enumerate() {
                let int = black_box(*int);
                let len = self.buf.format(format_args!(
                    "idx={} iv={} dv={:.4} hex={:x}",
                    k, int, float, int
                ))?;
                sink.fold(len as u64);
                ops += 1;
            }
        }
        Ok(ops)
    }
}

/// Formatting through a helper that receives pre-captured `fmt::Arguments`.
struct FormatArgs {
    buf: BoundedBuf,
    style: ArgsStyle,
}

#[derive(Clone, Copy)]
enum ArgsStyle {
    Tagged,
    Lettered,
}

fn format_into(buf: &mut BoundedBuf, args: fmt::Arguments<'_>) -> BenchResult<usize> {
    buf.format(args)
}

pub(crate) fn setup_vsnprintf_mix() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(FormatArgs {
        buf: BoundedBuf::with_capacity(ARGS_CAPACITY)?,
        style: ArgsStyle::Tagged,
    }))
}

pub(crate) fn setup_vprintf_mix() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(FormatArgs {
        buf: BoundedBuf::with_capacity(ARGS_CAPACITY)?,
        style: ArgsStyle::Lettered,
    }))
}

impl Workload for FormatArgs {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for i in 0..iterations {
            let i = black_box(i);
            let len = match self.style {
                ArgsStyle::Tagged => format_into(
                    &mut self.buf,
                    format_args!(
                        "val={} hex={:x} str={} dbl={:.3}",
                        i as i32,
                        i.wrapping_mul(17) as u32,
                        "token",
                        i as f64 / 3.0
                    ),
                )?,
                ArgsStyle::Lettered => format_into(
                    &mut self.buf,
                    format_args!(
                        "A:{} B:{} C:{} D:{:.2}",
                        i as i32,
                        i as u32,
                        i.wrapping_mul(i) as i64,
                        i as f64 / 7.0
                    ),
                )?,
            };
            sink.fold(len as u64);
            ops += 1;
        }
        Ok(ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::suites::test_support::expect_ops;

    #[test]
    fn formatting_cases_count_each_value() -> Result<(), String> {
        expect_ops(setup_sprintf_int, 2, 2 * INT_VALUES as u64)?;
        expect_ops(setup_sprintf_float, 2, 2 * FLOAT_VALUES as u64)?;
        expect_ops(setup_snprintf_mix, 2, 2 * MIX_VALUES as u64)?;
        expect_ops(setup_vsnprintf_mix, 5, 5)?;
        expect_ops(setup_vprintf_mix, 5, 5)?;
        Ok(())
    }

    #[test]
    fn bounded_buf_truncates_but_reports_full_length() -> Result<(), String> {
        let mut buf = BoundedBuf::with_capacity(8).map_err(|err| err.to_string())?;
        let len = buf
            .format(format_args!("{}-{}", "abcdef", 12_345))
            .map_err(|err| err.to_string())?;
        if len != 12 {
            return Err(format!("Unexpected wanted length: {}", len));
        }
        if buf.as_bytes() != b"abcdef-1" {
            return Err(format!(
                "Unexpected contents: {}",
                String::from_utf8_lossy(buf.as_bytes())
            ));
        }
        Ok(())
    }

    #[test]
    fn bounded_buf_restarts_each_format() -> Result<(), String> {
        let mut buf = BoundedBuf::with_capacity(32).map_err(|err| err.to_string())?;
        buf.format(format_args!("first line"))
            .map_err(|err| err.to_string())?;
        buf.format(format_args!("x={:.2}", 1.5_f64))
            .map_err(|err| err.to_string())?;
        if buf.as_bytes() != b"x=1.50" {
            return Err("Expected buffer to restart".to_owned());
        }
        Ok(())
    }
}
