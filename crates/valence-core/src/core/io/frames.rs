use super::TableLoadError;
use std::io::{Read, Write};
use std::path::Path;

/// Reads coordinate frames from a CSV file with a header row, one frame per record.
pub fn read_frames(path: &Path) -> Result<Vec<Vec<f64>>, TableLoadError> {
    let file = std::fs::File::open(path).map_err(|e| TableLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    read_frames_from(file, &path.to_string_lossy())
}

pub fn read_frames_from<R: Read>(
    reader: R,
    origin: &str,
) -> Result<Vec<Vec<f64>>, TableLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut frames = Vec::new();
    for result in reader.deserialize::<Vec<f64>>() {
        let frame = result.map_err(|e| TableLoadError::Csv {
            path: origin.to_string(),
            source: e,
        })?;
        frames.push(frame);
    }
    Ok(frames)
}

/// Writes one row per frame under the given column names.
pub fn write_frames<W: Write>(
    writer: W,
    columns: &[String],
    rows: &[Vec<f64>],
    origin: &str,
) -> Result<(), TableLoadError> {
    let to_error = |e: csv::Error| TableLoadError::Csv {
        path: origin.to_string(),
        source: e,
    };

    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(columns).map_err(to_error)?;
    for row in rows {
        writer
            .write_record(row.iter().map(|v| v.to_string()))
            .map_err(to_error)?;
    }
    writer.flush().map_err(|e| TableLoadError::Io {
        path: origin.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn read_frames_parses_each_record_as_one_frame() {
        let content = "r0, a1, d2\n1.0, 2.0, 3.0\n1.5, 2.5, 3.5\n";
        let frames = read_frames_from(content.as_bytes(), "inline").unwrap();
        assert_eq!(frames, vec![vec![1.0, 2.0, 3.0], vec![1.5, 2.5, 3.5]]);
    }

    #[test]
    fn read_frames_with_only_a_header_is_empty() {
        let frames = read_frames_from("r0,r1\n".as_bytes(), "inline").unwrap();
        assert!(frames.is_empty());
    }

    #[test]
    fn read_frames_rejects_ragged_rows() {
        let content = "a,b\n1.0,2.0\n3.0\n";
        let result = read_frames_from(content.as_bytes(), "inline");
        assert!(matches!(result, Err(TableLoadError::Csv { .. })));
    }

    #[test]
    fn read_frames_rejects_non_numeric_fields() {
        let content = "a\nfoo\n";
        let result = read_frames_from(content.as_bytes(), "inline");
        assert!(matches!(result, Err(TableLoadError::Csv { .. })));
    }

    #[test]
    fn read_frames_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_frames(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(TableLoadError::Io { .. })));
    }

    #[test]
    fn written_frames_can_be_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grad.csv");
        let columns = vec!["g0".to_string(), "g1".to_string()];
        let rows = vec![vec![0.25, -1.0], vec![3.5, 0.0]];

        write_frames(fs::File::create(&path).unwrap(), &columns, &rows, "grad.csv").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("g0,g1\n"));
        assert_eq!(read_frames(&path).unwrap(), rows);
    }
}
