use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::PipelineError;

use super::model::{FrequencyRecord, FrequencyTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a frequency table from a tab-separated `word<TAB>count` file.
///
/// The file handle lives only for the duration of this call and is closed on
/// every return path, including a malformed count.
pub fn load_file(path: &Path) -> Result<FrequencyTable, PipelineError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PipelineError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => PipelineError::Io(e),
    })?;
    read_table(file)
}

// ---------------------------------------------------------------------------
// TSV reader
// ---------------------------------------------------------------------------

/// Parse `word<TAB>count` lines from any reader.
///
/// * Surrounding whitespace (tabs included) is stripped from each line before
///   it is split, so `grace\t45\t` is a two-field line.
/// * Lines with a field count other than two are skipped. After stripping, the
///   word of a two-field line is never empty.
/// * A count that is not a non-negative integer aborts the whole read with
///   [`PipelineError::MalformedCount`].
/// * Records keep input-line order; duplicate words are not merged.
pub fn read_table<R: Read>(reader: R) -> Result<FrequencyTable, PipelineError> {
    let mut records = Vec::new();

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = idx as u64 + 1;

        let fields: Vec<&str> = line.trim().split('\t').collect();
        let [word, raw_count] = fields[..] else {
            log::debug!("skipping line {line_no} with {} fields", fields.len());
            continue;
        };

        let count = raw_count
            .trim()
            .parse::<u64>()
            .map_err(|_| PipelineError::MalformedCount {
                line: line_no,
                value: raw_count.to_string(),
            })?;

        records.push(FrequencyRecord::new(word, count));
    }

    Ok(FrequencyTable::from_records(records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn words(table: &FrequencyTable) -> Vec<(&str, u64)> {
        table.iter().map(|r| (r.word.as_str(), r.count)).collect()
    }

    #[test]
    fn test_reads_records_in_input_order() {
        let input = "grace\t45\nthe\t9000\nlove\t30\nthou\t500\n";
        let table = read_table(input.as_bytes()).unwrap();

        assert_eq!(
            words(&table),
            vec![("grace", 45), ("the", 9000), ("love", 30), ("thou", 500)]
        );
    }

    #[test]
    fn test_skips_lines_with_wrong_field_count() {
        let input = "grace\t45\nbroken\nthree\tfields\there\nlove\t30\n\n";
        let table = read_table(input.as_bytes()).unwrap();

        assert_eq!(words(&table), vec![("grace", 45), ("love", 30)]);
    }

    #[test]
    fn test_strips_surrounding_tabs() {
        let input = "grace\t45\t\nlove\t30\n\tmercy\t12\n";
        let table = read_table(input.as_bytes()).unwrap();

        assert_eq!(
            words(&table),
            vec![("grace", 45), ("love", 30), ("mercy", 12)]
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let table = read_table("\n   \nhope\t3\n".as_bytes()).unwrap();
        assert_eq!(words(&table), vec![("hope", 3)]);
    }

    #[test]
    fn test_count_without_word_is_skipped() {
        let table = read_table("\t\t7\nhope\t3\n".as_bytes()).unwrap();
        assert_eq!(words(&table), vec![("hope", 3)]);
    }

    #[test]
    fn test_keeps_duplicate_words() {
        let table = read_table("sin\t4\nsin\t6\n".as_bytes()).unwrap();
        assert_eq!(words(&table), vec![("sin", 4), ("sin", 6)]);
    }

    #[test]
    fn test_handles_crlf_and_padding() {
        let table = read_table("faith\t 12 \r\nhope\t3\r\n".as_bytes()).unwrap();
        assert_eq!(words(&table), vec![("faith", 12), ("hope", 3)]);
    }

    #[test]
    fn test_malformed_count_is_fatal() {
        let input = "grace\t45\nlove\tmany\nhope\t3\n";
        let err = read_table(input.as_bytes()).unwrap_err();

        match err {
            PipelineError::MalformedCount { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "many");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_count_is_malformed() {
        let err = read_table("grace\t-1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedCount { .. }));
    }

    #[test]
    fn test_load_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "God\t4472").unwrap();
        writeln!(file, "love\t310").unwrap();

        let table = load_file(file.path()).unwrap();
        assert_eq!(words(&table), vec![("God", 4472), ("love", 310)]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, PipelineError::InputNotFound { .. }));
    }
}
