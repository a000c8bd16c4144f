//! Loading of tournament result documents from disk.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::record::TournamentRecord;

/// Read and parse a tournament result JSON document.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid JSON. Both
/// are fatal for the analysis run; there is nothing to recover.
pub fn load_document(path: impl AsRef<Path>) -> anyhow::Result<TournamentRecord> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read tournament results '{}'", path.display()))?;
    let record: TournamentRecord = serde_json::from_str(&text)
        .with_context(|| format!("'{}' is not a valid tournament JSON document", path.display()))?;
    info!(
        agents = record.agents().len(),
        games = record.games().len(),
        "loaded tournament document"
    );
    Ok(record)
}

#[cfg(test)]
mod loader_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_an_error() {
        let err = load_document("/nonexistent/results.json").unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        let err = load_document(file.path()).unwrap_err();
        assert!(err.to_string().contains("not a valid tournament JSON"));
    }

    #[test]
    fn loads_a_valid_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"agents": ["a"], "games": []}"#).unwrap();
        let record = load_document(file.path()).unwrap();
        assert_eq!(record.agents(), ["a".to_string()]);
    }
}
