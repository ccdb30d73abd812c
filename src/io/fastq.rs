// src/io/fastq.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::info;

use crate::error::{AssemblyError, Result};

#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub header: String,
    pub sequence: String,
    pub plus: String,
    pub quality: String,
}

/// Opens a FASTQ file, decompressing transparently when the name ends in `.gz`.
pub fn open_fastq<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let gzipped = path.extension().map_or(false, |ext| ext == "gz");
    if gzipped {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Stream FASTQ records without holding the whole file in memory.
pub fn stream_fastq_records<R: BufRead>(reader: R) -> FastqStreamParser<io::Lines<R>> {
    FastqStreamParser {
        lines: reader.lines(),
        record: 0,
    }
}

/// Iterator adaptor grouping lines into four-line records.
pub struct FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    lines: I,
    record: usize,
}

impl<I> FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    fn next_line(&mut self, field: &str) -> Result<String> {
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(AssemblyError::MalformedFastq(format!(
                "record {} is truncated, missing {} line",
                self.record + 1,
                field
            ))),
        }
    }

    fn read_record(&mut self, header: String) -> Result<FastqRecord> {
        if !header.starts_with('@') {
            return Err(AssemblyError::MalformedFastq(format!(
                "record {} header does not start with '@': {}",
                self.record + 1,
                header
            )));
        }
        let sequence = self.next_line("sequence")?.trim().to_string();
        let plus = self.next_line("separator")?;
        let quality = self.next_line("quality")?;
        self.record += 1;
        Ok(FastqRecord {
            header,
            sequence,
            plus,
            quality,
        })
    }
}

impl<I> Iterator for FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        // Blank lines between records (usually a trailing newline) are skipped
        let header = loop {
            match self.lines.next()? {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => break line,
                Err(e) => return Some(Err(e.into())),
            }
        };
        Some(self.read_record(header))
    }
}

/// Collects the sequence line of up to `max_reads` records (0 reads all).
/// Quality strings are ignored.
pub fn read_sequences<R: BufRead>(reader: R, max_reads: usize) -> Result<Vec<String>> {
    // Records past the limit are never parsed
    let limit = if max_reads == 0 { usize::MAX } else { max_reads };
    stream_fastq_records(reader)
        .take(limit)
        .map(|record| record.map(|r| r.sequence))
        .collect()
}

/// Opens `path` and reads up to `max_reads` sequences from it.
pub fn read_fastq<P: AsRef<Path>>(path: P, max_reads: usize) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reads = read_sequences(open_fastq(path)?, max_reads)?;
    info!("Read {} sequences from {}", reads.len(), path.display());
    Ok(reads)
}
