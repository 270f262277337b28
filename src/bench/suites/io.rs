//! File and buffered-reader throughput.

use std::fs::File;
use std::hint::black_box;
use std::io::{BufRead, Cursor, Read, Seek, SeekFrom, Write};

use crate::bench::buffers::{try_filled, try_from_fn, try_string_with_capacity, try_vec_with_capacity};
use crate::bench::{Sink, Workload};
use crate::error::{BenchError, BenchResult};

const FILE_LEN: usize = 1 << 20;
const LINE_COUNT: usize = 5000;
/// Bytes reserved per generated line when building the input text.
const LINE_RESERVE: usize = 32;
/// Line buffer size for the bounded reader; one byte is kept for the C
/// terminator, so at most 127 bytes are read per call.
const BOUNDED_LINE: usize = 128;

fn io_error(context: &'static str) -> impl FnOnce(std::io::Error) -> BenchError {
    move |source| BenchError::Io { context, source }
}

struct FileRoundTrip {
    data: Vec<u8>,
    readback: Vec<u8>,
}

pub(crate) fn setup_file_io() -> BenchResult<Box<dyn Workload>> {
    let data = try_from_fn(FILE_LEN, |i| (i.wrapping_mul(31) & 0xFF) as u8)?;
    Ok(Box::new(FileRoundTrip {
        data,
        readback: try_filled(FILE_LEN, 0_u8)?,
    }))
}

impl Workload for FileRoundTrip {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            let mut file: File = tempfile::tempfile().map_err(io_error("temp file creation"))?;
            file.write_all(black_box(&self.data))
                .map_err(io_error("temp file write"))?;
            file.seek(SeekFrom::Start(0))
                .map_err(io_error("temp file seek"))?;
            file.read_exact(&mut self.readback)
                .map_err(io_error("temp file read"))?;
            sink.fold((self.data.len() + self.readback.len()) as u64);
            ops += 1;
        }
        Ok(ops)
    }
}

#[derive(Clone, Copy)]
enum LineReader {
    /// Fixed-size line buffer, reads stop after 127 bytes or a newline.
    Bounded,
    /// Growable line buffer, one fresh buffer per pass.
    Growable,
}

struct ReadLines {
    text: String,
    reader: LineReader,
    line: Vec<u8>,
}

fn line_text() -> BenchResult<String> {
    use std::fmt::Write as _;

    let mut text = try_string_with_capacity(LINE_COUNT * LINE_RESERVE)?;
    for i in 0..LINE_COUNT {
        writeln!(text, "line_{} value={}", i, i * i)?;
    }
    Ok(text)
}

fn read_lines(reader: LineReader) -> BenchResult<Box<dyn Workload>> {
    Ok(Box::new(ReadLines {
        text: line_text()?,
        reader,
        line: try_vec_with_capacity(BOUNDED_LINE)?,
    }))
}

pub(crate) fn setup_fgets() -> BenchResult<Box<dyn Workload>> {
    read_lines(LineReader::Bounded)
}

pub(crate) fn setup_getline() -> BenchResult<Box<dyn Workload>> {
    read_lines(LineReader::Growable)
}

impl ReadLines {
    fn bounded_pass(&mut self, sink: &mut Sink) -> BenchResult<u64> {
        let mut lines = 0;
        let mut cursor = Cursor::new(black_box(self.text.as_bytes()));
        loop {
            self.line.clear();
            let limit = (BOUNDED_LINE - 1) as u64;
            let read = (&mut cursor)
                .take(limit)
                .read_until(b'\n', &mut self.line)
                .map_err(io_error("bounded line read"))?;
            if read == 0 {
                break;
            }
            sink.fold(self.line.first().copied().map_or(0, u64::from));
            lines += 1;
        }
        Ok(lines)
    }

    fn growable_pass(&self, sink: &mut Sink) -> BenchResult<u64> {
        let mut lines = 0;
        let mut cursor = Cursor::new(black_box(self.text.as_bytes()));
        let mut line = String::new();
        loop {
            line.clear();
            let read = cursor
                .read_line(&mut line)
                .map_err(io_error("line read"))?;
            if read == 0 {
                break;
            }
            sink.fold(line.bytes().next().map_or(0, u64::from));
            lines += 1;
        }
        Ok(lines)
    }
}

impl Workload for ReadLines {
    fn run(&mut self, iterations: u64, sink: &mut Sink) -> BenchResult<u64> {
        let mut ops = 0;
        for _ in 0..iterations {
            ops += match self.reader {
                LineReader::Bounded => self.bounded_pass(sink)?,
                LineReader::Growable => self.growable_pass(sink)?,
            };
        }
        Ok(ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::suites::test_support::expect_ops;

    #[test]
    fn line_readers_count_every_line() -> Result<(), String> {
        expect_ops(setup_fgets, 2, 2 * LINE_COUNT as u64)?;
        expect_ops(setup_getline, 2, 2 * LINE_COUNT as u64)?;
        Ok(())
    }

    #[test]
    fn bounded_reader_splits_long_lines() -> Result<(), String> {
        let mut workload = ReadLines {
            text: format!("{}\nshort\n", "x".repeat(200)),
            reader: LineReader::Bounded,
            line: Vec::with_capacity(BOUNDED_LINE),
        };
        let mut sink = Sink::new();
        let lines = workload.run(1, &mut sink).map_err(|err| err.to_string())?;
        // 127 + 73 bytes of the long line, then "short".
        if lines != 3 {
            return Err(format!("Unexpected line count: {}", lines));
        }
        Ok(())
    }

    #[test]
    fn file_round_trip_reads_back_written_bytes() -> Result<(), String> {
        let mut workload = FileRoundTrip {
            data: (0..4096_usize).map(|i| (i % 251) as u8).collect(),
            readback: vec![0; 4096],
        };
        let mut sink = Sink::new();
        let ops = workload.run(2, &mut sink).map_err(|err| err.to_string())?;
        if ops != 2 {
            return Err(format!("Unexpected ops: {}", ops));
        }
        if workload.readback != workload.data {
            return Err("Readback does not match written data".to_owned());
        }
        Ok(())
    }
}
