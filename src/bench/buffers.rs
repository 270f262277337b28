//! Fallible allocation helpers.
//!
//! Benchmark inputs are allocated through `try_reserve_exact` so that an
//! allocation failure becomes [`BenchError::OutOfMemory`] and terminates the
//! run with a diagnostic instead of aborting inside the allocator.

use crate::error::{BenchError, BenchResult};

pub fn try_vec_with_capacity<T>(len: usize) -> BenchResult<Vec<T>> {
    let mut values = Vec::new();
    values.try_reserve_exact(len).map_err(|_err| BenchError::OutOfMemory {
        bytes: len.saturating_mul(std::mem::size_of::<T>()),
    })?;
    Ok(values)
}

pub fn try_filled<T: Clone>(len: usize, value: T) -> BenchResult<Vec<T>> {
    let mut values = try_vec_with_capacity(len)?;
    values.resize(len, value);
    Ok(values)
}

pub fn try_from_fn<T, F>(len: usize, mut make: F) -> BenchResult<Vec<T>>
where
    F: FnMut(usize) -> T,
{
    let mut values = try_vec_with_capacity(len)?;
    values.extend((0..len).map(&mut make));
    Ok(values)
}

pub fn try_string_with_capacity(len: usize) -> BenchResult<String> {
    let mut text = String::new();
    text.try_reserve_exact(len)
        .map_err(|_err| BenchError::OutOfMemory { bytes: len })?;
    Ok(text)
}

/// Byte buffer of `len` letters cycling from `first`, terminated by NUL.
pub fn letters_nul_terminated(len: usize, first: u8) -> BenchResult<Vec<u8>> {
    let mut bytes = try_vec_with_capacity(len.saturating_add(1))?;
    bytes.extend((0..len).map(|i| cycle_letter(first, i)));
    bytes.push(0);
    Ok(bytes)
}

/// The `i`-th letter of the alphabet starting at `first`, wrapping every 26.
#[must_use]
pub fn cycle_letter(first: u8, i: usize) -> u8 {
    // `i % 26` fits in u8.
    first.wrapping_add((i % 26) as u8)
}
