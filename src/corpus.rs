//! Training corpus readers.
//!
//! A corpus is a sequence of labeled samples. The plain-text format carries
//! one sample per line: a category label, a whitespace run, then the document
//! text. Blank lines are skipped; a line with a label but no text is a
//! corpus error reported with its line number. A JSON format
//! (an array of `{"category", "text"}` objects) is also supported and holds
//! each record to the same non-empty rule.
//!
//! [`LineSampleReader`] streams samples lazily so training can consume a
//! corpus without holding every line in memory; the eager helpers collect
//! into a `Vec` for convenience.
//!
//! # Examples
//!
//! ```
//! use taxon::corpus::samples_from_str;
//!
//! let corpus = "\
//! COFFEE dark roast with chocolate notes
//! BEER hazy ipa with juicy grapefruit";
//!
//! let samples = samples_from_str(corpus).unwrap();
//! assert_eq!(samples.len(), 2);
//! assert_eq!(samples[0].category, "COFFEE");
//! assert_eq!(samples[1].document.tokens()[0], "hazy");
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{Result, TaxonError};

/// A training sample: a document paired with its category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    /// Category label.
    pub category: String,
    /// Document text, tokenized.
    pub document: Document,
}

impl LabeledSample {
    /// Create a new labeled sample.
    pub fn new<C: Into<String>>(category: C, document: Document) -> Self {
        LabeledSample {
            category: category.into(),
            document,
        }
    }
}

/// On-disk JSON form of a sample.
#[derive(Debug, Deserialize)]
struct JsonSample {
    category: String,
    text: String,
}

/// A streaming reader for the one-sample-per-line corpus format.
///
/// Yields one `Result<LabeledSample>` per non-blank line. I/O failures and
/// malformed lines surface as [`TaxonError::CorpusUnavailable`]; iteration
/// after an error is not meaningful.
pub struct LineSampleReader<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> LineSampleReader<R> {
    /// Create a reader over any buffered source.
    pub fn new(reader: R) -> Self {
        LineSampleReader {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for LineSampleReader<R> {
    type Item = Result<LabeledSample>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;

            let line = match line {
                Ok(line) => line,
                Err(err) => return Some(Err(err.into())),
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            // The label runs up to the first whitespace; the rest is text.
            let (category, text) = match trimmed.split_once(char::is_whitespace) {
                Some(parts) => parts,
                None => {
                    return Some(Err(TaxonError::corpus(format!(
                        "line {}: expected a category label followed by document text",
                        self.line_no
                    ))));
                }
            };

            return Some(Ok(LabeledSample::new(category, Document::from_text(text))));
        }
    }
}

/// Read all samples from a buffered source, failing on the first bad line.
pub fn read_samples<R: BufRead>(reader: R) -> Result<Vec<LabeledSample>> {
    LineSampleReader::new(reader).collect()
}

/// Read all samples from an in-memory corpus string.
pub fn samples_from_str(text: &str) -> Result<Vec<LabeledSample>> {
    read_samples(text.as_bytes())
}

/// Load samples from a plain-text corpus file.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledSample>> {
    let file = File::open(path)?;
    read_samples(BufReader::new(file))
}

/// Load samples from a JSON corpus file.
///
/// Every record must carry a non-empty category and non-empty text; a
/// degenerate record fails the load with its record number, as a text-less
/// line does in the plain-text format.
pub fn load_json_samples<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledSample>> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<JsonSample> = serde_json::from_str(&content)?;

    let mut samples = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        if record.category.trim().is_empty() || record.text.trim().is_empty() {
            return Err(TaxonError::corpus(format!(
                "record {}: expected a non-empty category and document text",
                index + 1
            )));
        }
        samples.push(LabeledSample::new(
            record.category,
            Document::from_text(&record.text),
        ));
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_samples_from_str() {
        let samples = samples_from_str("COFFEE of coffee\nBEER Yuengling Lager").unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].category, "COFFEE");
        assert_eq!(samples[0].document.tokens(), &["of", "coffee"]);
        assert_eq!(samples[1].category, "BEER");
        assert_eq!(samples[1].document.tokens(), &["Yuengling", "Lager"]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let samples = samples_from_str("COFFEE dark roast\n\n   \nBEER pale ale\n").unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_label_splits_at_first_whitespace_run() {
        let samples = samples_from_str("COFFEE\tmedium   roast").unwrap();

        assert_eq!(samples[0].category, "COFFEE");
        assert_eq!(samples[0].document.tokens(), &["medium", "roast"]);
    }

    #[test]
    fn test_missing_text_reports_line_number() {
        let err = samples_from_str("COFFEE dark roast\n\nBEER").unwrap_err();

        match err {
            TaxonError::CorpusUnavailable(msg) => assert!(msg.contains("line 3")),
            other => panic!("Expected corpus error, got {other:?}"),
        }
    }

    #[test]
    fn test_reader_is_lazy_after_error_free_prefix() {
        let mut reader = LineSampleReader::new("COFFEE roast\nBEER".as_bytes());

        assert!(reader.next().unwrap().is_ok());
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_load_samples() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "COFFEE medium roast of coffee").unwrap();
        writeln!(file, "BEER juicy grapefruit ipa").unwrap();

        let samples = load_samples(file.path()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].category, "BEER");
    }

    #[test]
    fn test_load_samples_missing_file() {
        let err = load_samples("/nonexistent/corpus.txt").unwrap_err();

        match err {
            TaxonError::CorpusUnavailable(_) => {}
            other => panic!("Expected corpus error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_json_samples() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"category": "COFFEE", "text": "medium roast"}},
                {{"category": "BEER", "text": "pale ale"}}
            ]"#
        )
        .unwrap();

        let samples = load_json_samples(file.path()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].category, "COFFEE");
        assert_eq!(samples[0].document.tokens(), &["medium", "roast"]);
    }

    #[test]
    fn test_load_json_samples_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_json_samples(file.path()).unwrap_err();
        match err {
            TaxonError::CorpusUnavailable(_) => {}
            other => panic!("Expected corpus error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_json_samples_rejects_degenerate_records() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"category": "COFFEE", "text": "medium roast"}},
                {{"category": "", "text": "dark roast"}}
            ]"#
        )
        .unwrap();

        let err = load_json_samples(file.path()).unwrap_err();
        match err {
            TaxonError::CorpusUnavailable(msg) => assert!(msg.contains("record 2")),
            other => panic!("Expected corpus error, got {other:?}"),
        }

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"category": "COFFEE", "text": "  "}}]"#).unwrap();

        let err = load_json_samples(file.path()).unwrap_err();
        match err {
            TaxonError::CorpusUnavailable(msg) => assert!(msg.contains("record 1")),
            other => panic!("Expected corpus error, got {other:?}"),
        }
    }
}
