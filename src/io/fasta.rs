// src/io/fasta.rs
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Result;

/// Header line (without `>`) of the 1-indexed contig `index`.
pub fn fasta_header(index: usize, organism: &str) -> String {
    format!("Contig {} [organism={}] [moltype=DNA]", index, organism)
}

/// Formats contigs as two-line FASTA records, numbered from 1.
pub fn write_fasta<S: AsRef<str>>(contigs: &[S], organism: &str) -> String {
    let mut out = String::new();
    for (i, contig) in contigs.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = writeln!(out, ">{}", fasta_header(i + 1, organism));
        let _ = writeln!(out, "{}", contig.as_ref());
    }
    out
}

pub enum FastaWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

impl FastaWriter {
    /// Creates `path`, gzip-compressing when it ends in `.gz`.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        if path.extension().map_or(false, |ext| ext == "gz") {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(FastaWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(FastaWriter::Plain(BufWriter::new(file)))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            FastaWriter::Plain(writer) => writer,
            FastaWriter::Compressed(writer) => writer,
        }
    }

    pub fn write_record(&mut self, header: &str, sequence: &str) -> io::Result<()> {
        let writer = self.writer();
        writeln!(writer, ">{}", header)?;
        writeln!(writer, "{}", sequence)
    }

    pub fn write_contigs<S: AsRef<str>>(&mut self, contigs: &[S], organism: &str) -> io::Result<()> {
        for (i, contig) in contigs.iter().enumerate() {
            self.write_record(&fasta_header(i + 1, organism), contig.as_ref())?;
        }
        Ok(())
    }

    /// Flushes buffered output and writes the gzip trailer if compressing.
    pub fn finish(self) -> io::Result<()> {
        match self {
            FastaWriter::Plain(mut writer) => writer.flush(),
            FastaWriter::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}

/// Open a FASTA file for reading, handles gzipped files automatically
pub fn open_fasta<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Parses FASTA records, joining wrapped sequence lines. Records with an
/// empty sequence are dropped.
pub fn parse_fasta_sequences<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut sequences = Vec::new();
    let mut current = String::new();
    let mut in_sequence = false;

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            if in_sequence && !current.is_empty() {
                sequences.push(std::mem::take(&mut current));
            }
            in_sequence = true;
        } else if in_sequence {
            current.push_str(line.trim());
        }
    }

    if in_sequence && !current.is_empty() {
        sequences.push(current);
    }
    Ok(sequences)
}

pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    parse_fasta_sequences(open_fasta(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_write_fasta_format() {
        let text = write_fasta(&["ATGGCG", "TTTAAA"], "Mus musculus");
        assert_eq!(
            text,
            ">Contig 1 [organism=Mus musculus] [moltype=DNA]\nATGGCG\n\
             >Contig 2 [organism=Mus musculus] [moltype=DNA]\nTTTAAA\n"
        );
    }

    #[test]
    fn test_write_fasta_empty() {
        let contigs: Vec<String> = vec![];
        assert_eq!(write_fasta(&contigs, "E. coli"), "");
    }

    #[test]
    fn test_parse_wrapped_records() {
        let text = ">a\nACGT\nAC\n>b\n\n>c\nGG\n";
        let seqs = parse_fasta_sequences(Cursor::new(text)).unwrap();
        assert_eq!(seqs, vec!["ACGTAC", "GG"]);
    }

    #[test]
    fn test_writer_round_trip_gz() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contigs.fasta.gz");

        let mut writer = FastaWriter::create(&path).unwrap();
        writer.write_contigs(&["ACGTACGT", "GGCC"], "Danio rerio").unwrap();
        writer.finish().unwrap();

        assert_eq!(read_fasta_sequences(&path).unwrap(), vec!["ACGTACGT", "GGCC"]);
    }

    #[test]
    fn test_writer_plain_matches_formatter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contigs.fasta");

        let contigs = vec!["ACGT".to_string(), "TTGA".to_string()];
        let mut writer = FastaWriter::create(&path).unwrap();
        writer.write_contigs(&contigs, "Mus musculus").unwrap();
        writer.finish().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, write_fasta(&contigs, "Mus musculus"));
    }
}
