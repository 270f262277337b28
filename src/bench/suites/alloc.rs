//! Heap allocation patterns through the global allocator.
//!
//! Every allocation goes through `try_reserve_exact`, so running out of
//! memory ends the run with [`BenchError::OutOfMemory`] instead of an abort.

use std::hint::black_box;

use crate::bench::buffers::try_vec_with_capacity;
use crate::bench::{Sink, Workload};
use crate::error::{BenchError, BenchResult};

const SMALL_BLOCKS: usize = 256;
const SMALL_BLOCK_SIZE: usize = 32;
const MEDIUM_BLOCKS: usize = 64;
const MEDIUM_BLOCK_SIZE: usize = 4096;
const REALLOC_START: usize = 16;
const REALLOC_MAX: usize = 1024;
const REALLOC_STEPS: usize = 64;

fn allocate_block(size: usize) -> BenchResult<Vec<u8>> {
    let mut block = Vec::new();
    block
        .try_reserve_exact(size)
        .map_err(|_err| BenchError::OutOfMemory { bytes: size })?;
    Ok(block)
}

/// Allocate `blocks` blocks of `size` bytes, then free them all.
struct AllocFree {
    blocks: usize,
    size: usize,
}

pub(crate) fn setup_malloc_small() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(AllocFree {
        blocks: SMALL_BLOCKS,
        size: SMALL_BLOCK_SIZE,
    }))
}

pub(crate) fn setup_malloc_medium() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(AllocFree {
        blocks: MEDIUM_BLOCKS,
        size: MEDIUM_BLOCK_SIZE,
    }))
}

impl Workload for AllocFree {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        let mut live: Vec<Vec<u8>> = try_vec_with_capacity(self.blocks)?;
        for _ in 0..iterations {
            for _ in 0..self.blocks {
                let block = allocate_block(black_box(self.size))?;
                sink.consume(block.as_ptr());
                live.push(block);
                ops += 1;
            }
            black_box(&mut live).clear();
        }
        Ok(ops)
    }
}

/// Grow a block by doubling up to 1 KiB, then shrink back to 16 bytes.
struct ReallocPattern;

pub(crate) fn setup_realloc_pattern() -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(ReallocPattern))
}

impl Workload for ReallocPattern {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            let mut size = REALLOC_START;
            let mut block = allocate_block(size)?;
            for _ in 0..REALLOC_STEPS {
                size = if size < REALLOC_MAX {
                    size * 2
                } else {
                    REALLOC_START
                };
                if size > block.capacity() {
                    block
                        .try_reserve_exact(size)
                        .map_err(|_err| BenchError::OutOfMemory { bytes: size })?;
                } else {
                    block.shrink_to(size);
                }
                sink.consume(block.as_ptr());
                ops += 1;
            }
            sink.fold(block.capacity() as u64);
        }
        Ok(ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::suites::test_support::expect_ops;

    #[test]
    fn small_allocations_count_every_block() -> Result<(), String> {
        expect_ops(setup_malloc_small, 2, 2 * SMALL_BLOCKS as u64)?;
        Ok(())
    }

    #[test]
    fn medium_allocations_count_every_block() -> Result<(), String> {
        expect_ops(setup_malloc_medium, 2, 2 * MEDIUM_BLOCKS as u64)?;
        Ok(())
    }

    #[test]
    fn realloc_pattern_counts_every_resize() -> Result<(), String> {
        expect_ops(setup_realloc_pattern, 3, 3 * REALLOC_STEPS as u64)?;
        Ok(())
    }

    #[test]
    fn allocation_failure_is_reported() -> Result<(), String> {
        match allocate_block(usize::MAX) {
            Err(BenchError::OutOfMemory { bytes }) if bytes == usize::MAX => Ok(()),
            Err(err) => Err(format!("Unexpected error: {}", err)),
            Ok(_) => Err("Expected allocation failure".to_owned()),
        }
    }
}
