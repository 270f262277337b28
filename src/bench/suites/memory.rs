//! Raw byte-buffer primitives: compare, copy, move, fill and search.

use std::hint::black_box;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bench::buffers::{try_filled, try_from_fn};
use crate::bench::{Sink, Workload};
use crate::error::BenchResult;

use super::string::ordering_code;

const MEMCMP_LEN: usize = 8192;
const MEMCPY_LEN: usize = 16_384;
const MEMMOVE_LEN: usize = 16_384;
const MEMMOVE_SHIFT: usize = 32;
const MEMMOVE_SLACK: usize = 64;
const MEMSET_LEN: usize = 1 << 15;
const MEMCHR_LEN: usize = 1 << 14;
/// Seed shared by every case that fills buffers with pseudo-random data.
pub(crate) const DATA_SEED: u64 = 1234;

fn low_byte(value: u64) -> u8 {
    (value & 0xFF) as u8
}

struct Memcmp {
    left: Vec<u8>,
    right: Vec<u8>,
}

pub(crate) fn setup_memcmp() -> BenchResult<Box<dyn Workload>> {
    let left = try_from_fn(MEMCMP_LEN, |i| low_byte(i as u64))?;
    let right = try_from_fn(MEMCMP_LEN, |i| low_byte(i as u64))?;
    Ok(Box::new(Memcmp { left, right }))
}

impl Workload for Memcmp {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            let left = black_box(self.left.as_slice());
            sink.fold(ordering_code(left.cmp(self.right.as_slice())));
            ops += 1;
        }
        Ok(ops)
    }
}

struct Memcpy {
    src: Vec<u8>,
    dst: Vec<u8>,
}

pub(crate) fn setup_memcpy() -> BenchResult<Box<dyn Workload>> {
    let mut rng = StdRng::seed_from_u64(DATA_SEED);
    let src = try_from_fn(MEMCPY_LEN, |_| rng.r#gen::<u8>())?;
    Ok(Box::new(Memcpy {
        src,
        dst: try_filled(MEMCPY_LEN, 0_u8)?,
    }))
}

impl Workload for Memcpy {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            self.dst.copy_from_slice(black_box(self.src.as_slice()));
            sink.consume(self.dst.as_ptr());
            ops += 1;
        }
        Ok(ops)
    }
}

struct Memmove {
    buf: Vec<u8>,
}

pub(crate) fn setup_memmove() -> BenchResult<Box<dyn Workload>> {
    let buf = try_from_fn(MEMMOVE_LEN + MEMMOVE_SLACK, |i| low_byte(i as u64))?;
    Ok(Box::new(Memmove { buf }))
}

impl Workload for Memmove {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            // Overlapping ranges.
            black_box(self.buf.as_mut_slice()).copy_within(..MEMMOVE_LEN, MEMMOVE_SHIFT);
            sink.consume(self.buf.as_ptr());
            ops += 1;
        }
        Ok(ops)
    }
}

struct Memset {
    area: Vec<u8>,
}

pub(crate) fn setup_memset() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(Memset {
        area: try_filled(MEMSET_LEN, 0_u8)?,
    }))
}

impl Workload for Memset {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for i in 0..iterations {
            let value = low_byte(i);
            black_box(self.area.as_mut_slice()).fill(value);
            sink.fold(u64::from(value));
            ops += 1;
        }
        Ok(ops)
    }
}

/// Byte search forwards or backwards through the same block.
struct ByteSearch {
    block: Vec<u8>,
    reverse: bool,
}

fn search_block() -> BenchResult<Vec<u8>> {
    try_from_fn(MEMCHR_LEN, |i| low_byte((i as u64).wrapping_mul(17)))
}

pub(crate) fn setup_memchr() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(ByteSearch {
        block: search_block()?,
        reverse: false,
    }))
}

pub(crate) fn setup_memrchr() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(ByteSearch {
        block: search_block()?,
        reverse: true,
    }))
}

impl Workload for ByteSearch {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for i in 0..iterations {
            let block = black_box(self.block.as_slice());
            let found = if self.reverse {
                let needle = low_byte(i.wrapping_mul(3));
                block.iter().rposition(|b| *b == needle)
            } else {
                let needle = low_byte(i);
                block.iter().position(|b| *b == needle)
            };
            sink.fold(found.map_or(u64::MAX, |pos| pos as u64));
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
    fn memory_cases_report_one_op_per_iteration() -> Result<(), String> {
        let cases: [(&str, fn() -> BenchResult<Box<dyn Workload>>); 6] = [
            ("memcmp", setup_memcmp),
            ("memcpy", setup_memcpy),
            ("memmove", setup_memmove),
            ("memset", setup_memset),
            ("memchr", setup_memchr),
            ("memrchr", setup_memrchr),
        ];
        for (name, setup) in cases {
            expect_ops(setup, 9, 9).map_err(|err| format!("{}: {}", name, err))?;
        }
        Ok(())
    }

    #[test]
    fn memmove_shifts_overlapping_prefix() -> Result<(), String> {
        let mut workload = Memmove {
            buf: (0..(MEMMOVE_LEN + MEMMOVE_SLACK))
                .map(|i| low_byte(i as u64))
                .collect(),
        };
        let mut sink = Sink::new();
        workload.run(1, &mut sink).map_err(|err| err.to_string())?;
        if workload.buf.get(MEMMOVE_SHIFT) != Some(&0) || workload.buf.get(MEMMOVE_SHIFT + 1) != Some(&1) {
            return Err("Expected prefix to move by the shift".to_owned());
        }
        Ok(())
    }

    #[test]
    fn memchr_finds_first_occurrence() -> Result<(), String> {
        let mut workload = ByteSearch {
            block: search_block().map_err(|err| err.to_string())?,
            reverse: false,
        };
        let mut sink = Sink::new();
        workload.run(1, &mut sink).map_err(|err| err.to_string())?;
        let mut expected = Sink::new();
        expected.fold(0);
        if sink.checksum() != expected.checksum() {
            return Err("Expected needle 0 at offset 0".to_owned());
        }
        Ok(())
    }
}
