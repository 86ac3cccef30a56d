//! Loading of statistics snapshots from JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::Stats;

/// Error returned when a snapshot file cannot be loaded.
#[derive(Debug)]
pub enum SnapshotError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not a valid snapshot.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            SnapshotError::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io { source, .. } => Some(source),
            SnapshotError::Parse { source, .. } => Some(source),
        }
    }
}

/// Loads any statistics category (or a full [`Stats`]) from a JSON file.
pub fn load_category<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "loaded snapshot file");
    serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Stats {
    /// Parses a full snapshot from JSON. Missing categories default to empty.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        load_category(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlkioStats, MemoryStats};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNAPSHOT: &str = r#"{
        "cpu_stats": {
            "throttling_data": { "periods": 2000, "throttled_periods": 200, "throttled_time": 42 }
        },
        "memory_stats": {
            "usage": { "usage": 2048, "max_usage": 4096, "failcnt": 100, "limit": 8192 },
            "page_usage_by_numa": {
                "total": { "total": 44611, "nodes": [32631, 11980] },
                "hierarchical": { "anon": { "total": 46096, "nodes": [12597, 33499] } }
            },
            "use_hierarchy": true,
            "stats": { "cache": 1024, "rss": 512 }
        },
        "blkio_stats": {
            "io_service_bytes_recursive": [
                { "major": 8, "minor": 0, "op": "Read", "value": 1024 },
                { "major": 8, "minor": 0, "op": "Write", "value": 2048 }
            ],
            "sectors_recursive": [ { "major": 8, "minor": 0, "value": 6000 } ]
        },
        "hugetlb_stats": { "2MB": { "usage": 128, "max_usage": 256, "failcnt": 100 } }
    }"#;

    #[test]
    fn test_from_json_str() {
        let stats = Stats::from_json_str(SNAPSHOT).unwrap();
        assert_eq!(stats.cpu_stats.throttling_data.periods, 2000);
        assert_eq!(stats.memory_stats.usage.limit, 8192);
        assert_eq!(stats.memory_stats.swap_usage.limit, 0);
        assert_eq!(stats.memory_stats.page_usage_by_numa.total.nodes, vec![32631, 11980]);
        assert_eq!(
            stats.memory_stats.page_usage_by_numa.hierarchical.anon.total,
            46096
        );
        assert!(stats.memory_stats.use_hierarchy);
        assert_eq!(stats.memory_stats.stats.get("rss"), Some(&512));
        assert_eq!(stats.blkio_stats.io_service_bytes_recursive.len(), 2);
        assert_eq!(stats.blkio_stats.sectors_recursive[0].op, "");
        assert_eq!(stats.hugetlb_stats["2MB"].max_usage, 256);
    }

    #[test]
    fn test_empty_object_is_default() {
        let stats = Stats::from_json_str("{}").unwrap();
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let stats = Stats::load(file.path()).unwrap();
        assert_eq!(stats.blkio_stats.io_service_bytes_recursive[1].value, 2048);
    }

    #[test]
    fn test_load_single_category() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "use_hierarchy": true, "stats": { "cache": 1 } }"#)
            .unwrap();

        let memory: MemoryStats = load_category(file.path()).unwrap();
        assert!(memory.use_hierarchy);
        assert_eq!(memory.stats.len(), 1);

        let blkio: BlkioStats = load_category(file.path()).unwrap();
        assert_eq!(blkio, BlkioStats::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Stats::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read"));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = Stats::load(file.path()).unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
