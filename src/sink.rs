use crate::error::SinkError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Destination for report lines.
pub trait LineSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), SinkError>;

    /// Human readable name of the destination, used in diagnostics.
    fn destination(&self) -> String;
}

/// Writes each line, newline terminated, to a file. Existing content is replaced.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: std::io::Error) -> SinkError {
        SinkError::Unavailable {
            path: self.path.clone(),
            source,
        }
    }
}

impl LineSink for FileSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), SinkError> {
        let file = File::create(&self.path).map_err(|e| self.unavailable(e))?;
        let mut wtr = BufWriter::new(file);
        for line in lines {
            writeln!(wtr, "{line}").map_err(|e| self.unavailable(e))?;
        }
        wtr.flush().map_err(|e| self.unavailable(e))?;
        Ok(())
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory sink, appends the lines.
impl LineSink for Vec<String> {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), SinkError> {
        self.extend_from_slice(lines);
        Ok(())
    }

    fn destination(&self) -> String {
        "memory".to_owned()
    }
}

/// Hands the report to the sink. Failures are logged and reported as `false`, never propagated.
pub fn save_report<S: LineSink + ?Sized>(sink: &mut S, lines: &[String]) -> bool {
    match sink.write_lines(lines) {
        Ok(()) => {
            info!(destination = %sink.destination(), lines = lines.len(), "Report successfully saved");
            true
        }
        Err(err) => {
            error!(
                ?err,
                destination = %sink.destination(),
                "Saving report failed: {err}. Check permissions or choose a different output path"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn lines() -> Vec<String> {
        vec!["first".to_owned(), "second".to_owned()]
    }

    #[test]
    fn test_file_sink_writes_each_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path().join("report.txt"));
        sink.write_lines(&lines()).unwrap();

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents, format!("{}\n", lines().iter().join("\n")));
    }

    #[test]
    fn test_file_sink_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale stale stale stale\n").unwrap();

        FileSink::new(&path)
            .write_lines(&["fresh".to_owned()])
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_file_sink_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        let mut sink = FileSink::new(&path);

        let err = sink.write_lines(&lines()).unwrap_err();
        assert!(matches!(&err, SinkError::Unavailable { path: p, .. } if *p == path));
        assert!(err.to_string().contains("report.txt"));
        assert!(!save_report(&mut sink, &lines()));
    }

    #[test]
    fn test_save_report_to_memory() {
        let mut sink: Vec<String> = Vec::new();
        assert!(save_report(&mut sink, &lines()));
        assert!(save_report(&mut sink, &lines()));
        assert_eq!(sink, vec!["first", "second", "first", "second"]);
    }
}
