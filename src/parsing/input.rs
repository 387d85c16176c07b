//! Opening reports and splitting them into lines.
//!
//! Reports are read as bytes and decoded lossily, since descriptions copied
//! from sequence databases are not always valid UTF-8. Gzip input is detected
//! from its magic bytes, so compressed reports work from files and stdin alike.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::bufread::MultiGzDecoder;

use crate::parsing::summary::ParseError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Open a report file, decompressing it if it is gzipped
///
/// # Errors
///
/// Returns `ParseError::Open` if the file cannot be opened or its first
/// bytes cannot be read.
pub fn open_report(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let open_error = |source| ParseError::Open {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(open_error)?;
    decompress_if_gzipped(BufReader::new(file)).map_err(open_error)
}

/// Wrap `reader` in a gzip decoder when its content starts with the gzip magic bytes
///
/// # Errors
///
/// Returns any error raised while peeking at the first bytes.
pub fn decompress_if_gzipped<R>(mut reader: R) -> io::Result<Box<dyn BufRead>>
where
    R: BufRead + 'static,
{
    if reader.fill_buf()?.starts_with(&GZIP_MAGIC) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

/// Lines of a report without their terminators, decoded lossily
#[derive(Debug)]
pub struct ReportLines<R> {
    reader: R,
    buf: Vec<u8>,
}

pub fn report_lines<R: BufRead>(reader: R) -> ReportLines<R> {
    ReportLines {
        reader,
        buf: Vec::new(),
    }
}

impl<R: BufRead> Iterator for ReportLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Read, Write};

    #[test]
    fn test_report_lines_strips_terminators() {
        let lines: Vec<String> = report_lines(Cursor::new(b"a\r\nb\n\nc".to_vec()))
            .map(Result::unwrap)
            .collect();
        assert_eq!(lines, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_report_lines_keeps_invalid_utf8() {
        let lines: Vec<String> = report_lines(Cursor::new(b"sp|P1|caf\xe9 42 1e-3\n".to_vec()))
            .map(Result::unwrap)
            .collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("sp|P1|caf"));
    }

    #[test]
    fn test_decompress_if_gzipped_plain_text() {
        let mut reader = decompress_if_gzipped(Cursor::new(b"plain text\n".to_vec())).unwrap();
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!(text, "plain text\n");
    }

    #[test]
    fn test_decompress_if_gzipped_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"compressed text\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut reader = decompress_if_gzipped(Cursor::new(compressed)).unwrap();
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!(text, "compressed text\n");
    }

    #[test]
    fn test_open_report_missing_file() {
        let result = open_report(Path::new("/nonexistent/report.txt"));
        assert!(matches!(result, Err(ParseError::Open { .. })));
    }
}
