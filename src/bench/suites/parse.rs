//! Text parsing: numbers, tokenizing and regular expressions.

use std::hint::black_box;

use regex::Regex;

use crate::bench::buffers::{try_string_with_capacity, try_vec_with_capacity};
use crate::bench::{Sink, Workload};
use crate::error::{BenchError, BenchResult};

const FLOAT_INPUTS: usize = 256;
const INT_INPUTS: usize = 512;
const EMAIL_INPUTS: usize = 128;
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,3}$";
const GREEK_LIST: &str = "alpha,beta,gamma,delta,epsilon,zeta,eta,theta,iota,kappa,lambda,mu,nu,xi,omicron,pi,rho,sigma,tau,upsilon,phi,chi,psi,omega";
const GREEK_REPEAT: usize = 8;
const PAIR_LIST: &str = "aa,bb,cc,dd,ee,ff,gg,hh,ii,jj,kk,ll,mm,nn,oo,pp,qq";
const PAIR_REPEAT: usize = 16;

fn strings<F>(count: usize, mut make: F) -> BenchResult<Vec<String>>
where
    F: FnMut(usize) -> String,
{
    let mut values = try_vec_with_capacity(count)?;
    values.extend((0..count).map(&mut make));
    Ok(values)
}

struct ParseFloats {
    inputs: Vec<String>,
}

pub(crate) fn setup_strtod() -> BenchResult<Box<dyn Workload>> {
    let inputs = strings(FLOAT_INPUTS, |i| {
        format!("{}.{:03}E-{}", i + 1, i % 1000, (i % 10) + 1)
    })?;
    Ok(Box::new(ParseFloats { inputs }))
}

impl Workload for ParseFloats {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            for input in &self.inputs {
                let value = black_box(input.as_str()).parse::<f64>().unwrap_or(0.0);
                sink.fold(value.to_bits());
                ops += 1;
            }
        }
        Ok(ops)
    }
}

struct ParseInts {
    inputs: Vec<String>,
}

pub(crate) fn setup_atoi() -> BenchResult<Box<dyn Workload>> {
    let inputs = strings(INT_INPUTS, |i| ((i * 37) % 1_000_000).to_string())?;
    Ok(Box::new(ParseInts { inputs }))
}

impl Workload for ParseInts {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            for input in &self.inputs {
                // Unparseable input counts as zero.
                let value = black_box(input.as_str()).parse::<i32>().unwrap_or(0);
                sink.fold(u64::from(value.unsigned_abs()));
                ops += 1;
            }
        }
        Ok(ops)
    }
}

#[derive(Clone, Copy)]
enum Splitter {
    /// `str::split` on a char separator.
    Split,
    /// Byte-slice split with a predicate, the reentrant-style tokenizer.
    Bytes,
}

/// Copy a comma-separated list into a scratch buffer and walk its tokens,
/// skipping empty ones.
struct Tokenize {
    source: String,
    scratch: String,
    splitter: Splitter,
}

fn repeated(list: &str, times: usize) -> BenchResult<String> {
    let mut text = try_string_with_capacity(list.len().saturating_mul(times))?;
    for _ in 0..times {
        text.push_str(list);
    }
    Ok(text)
}

fn tokenize(source: String, splitter: Splitter) -> BenchResult<Box<dyn Workload>> {
    let scratch = try_string_with_capacity(source.len())?;
    Ok(Box::new(Tokenize {
        source,
        scratch,
        splitter,
    }))
}

pub(crate) fn setup_strtok() -> BenchResult<Box<dyn Workload>> {
    tokenize(repeated(GREEK_LIST, GREEK_REPEAT)?, Splitter::Split)
}

pub(crate) fn setup_strtok_r() -> BenchResult<Box<dyn Workload>> {
    tokenize(repeated(PAIR_LIST, PAIR_REPEAT)?, Splitter::Bytes)
}

impl Workload for Tokenize {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            self.scratch.clear();
            self.scratch.push_str(black_box(self.source.as_str()));
            match self.splitter {
                Splitter::Split => {
                    for token in self.scratch.split(',').filter(|token| !token.is_empty()) {
                        sink.consume(token.as_ptr());
                        ops += 1;
                    }
                }
                Splitter::Bytes => {
                    for token in self
                        .scratch
                        .as_bytes()
                        .split(|byte| *byte == b',')
                        .filter(|token| !token.is_empty())
                    {
                        sink.consume(token.as_ptr());
                        ops += 1;
                    }
                }
            }
        }
        Ok(ops)
    }
}

struct RegexMatch {
    pattern: Regex,
    lines: Vec<String>,
}

pub(crate) fn setup_regex() -> BenchResult<Box<dyn Workload>> {
    let pattern = Regex::new(EMAIL_PATTERN).map_err(|err| BenchError::Regex {
        pattern: EMAIL_PATTERN,
        source: err,
    })?;
    let lines = strings(EMAIL_INPUTS, |i| {
        format!("user{}_{}@example{}.com", i, i * i, i % 7)
    })?;
    Ok(Box::new(RegexMatch { pattern, lines }))
}

impl Workload for RegexMatch {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            for line in &self.lines {
                let matched = self.pattern.is_match(black_box(line.as_str()));
                sink.fold(u64::from(matched));
                ops += 1;
            }
        }
        Ok(ops)
    }
}
