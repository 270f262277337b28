//! Sorting and binary search over integer arrays.

use std::hint::black_box;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bench::buffers::{try_filled, try_from_fn};
use crate::bench::{Sink, Workload};
use crate::error::BenchResult;

use super::memory::DATA_SEED;

const SORT_LEN: usize = 4096;
const SEARCH_LEN: usize = 4096;
const SEARCH_KEYS: usize = 128;

struct SortInts {
    original: Vec<i32>,
    work: Vec<i32>,
}

pub(crate) fn setup_qsort() -> BenchResult<Box<dyn Workload>> {
    let mut rng = StdRng::seed_from_u64(DATA_SEED);
    let original = try_from_fn(SORT_LEN, |_| rng.gen_range(0..i32::MAX))?;
    Ok(Box::new(SortInts {
        original,
        work: try_filled(SORT_LEN, 0_i32)?,
    }))
}

impl Workload for SortInts {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            self.work.copy_from_slice(&self.original);
            black_box(self.work.as_mut_slice()).sort_unstable();
            if let Some(median) = self.work.get(self.work.len() / 2) {
                sink.fold(u64::from(median.unsigned_abs()));
            }
            ops += 1;
        }
        Ok(ops)
    }
}

struct SearchInts {
    sorted: Vec<i32>,
    keys: Vec<i32>,
}

pub(crate) fn setup_bsearch() -> BenchResult<Box<dyn Workload>> {
    let sorted = try_from_fn(SEARCH_LEN, |i| (i * 2) as i32)?;
    let keys = try_from_fn(SEARCH_KEYS, |i| ((i * 7) % (SEARCH_LEN * 2)) as i32)?;
    Ok(Box::new(SearchInts { sorted, keys }))
}

impl Workload for SearchInts {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            for key in &self.keys {
                let found = black_box(self.sorted.as_slice()).binary_search(key);
                sink.fold(found.map_or(u64::MAX, |pos| pos as u64));
                ops += 1;
            }
        }
        Ok(ops)
    }
}
