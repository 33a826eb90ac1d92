use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};
use tracing::{debug, instrument};

use crate::error::{LookupError, Result};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Finds the most recently modified workbook in `dir` whose file name starts
/// with `prefix` and ends in `.xlsx` or `.xls`.
#[instrument(level = "info", skip_all, fields(dir = %dir.display(), prefix = %prefix))]
pub fn find_latest_workbook(dir: &Path, prefix: &str) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(LookupError::MissingInput(dir.to_path_buf()));
    }

    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.starts_with(prefix) || !(name.ends_with(".xlsx") || name.ends_with(".xls")) {
            continue;
        }
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified()?;
        debug!(file = name, "candidate workbook");
        if latest.as_ref().is_none_or(|(newest, _)| modified > *newest) {
            latest = Some((modified, entry.path()));
        }
    }

    latest
        .map(|(_, path)| path)
        .ok_or_else(|| LookupError::SourceNotFound {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
        })
}

/// Load-time metadata of a source file, used for freshness warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceInfo {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl SourceInfo {
    /// Reads the modification time of `path`.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LookupError::MissingInput(path.to_path_buf()));
        }
        let modified = fs::metadata(path)?.modified()?;
        Ok(Self {
            path: path.to_path_buf(),
            modified,
        })
    }

    /// Local timestamp formatted as `%Y-%m-%d %H:%M:%S`.
    pub fn modified_label(&self) -> String {
        DateTime::<Local>::from(self.modified)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }

    /// Whole days elapsed between the modification time and `now`.
    pub fn age_days(&self, now: SystemTime) -> u64 {
        now.duration_since(self.modified)
            .unwrap_or(Duration::ZERO)
            .as_secs()
            / SECONDS_PER_DAY
    }

    /// True when the file is more than `max_days` whole days old.
    pub fn is_stale(&self, now: SystemTime, max_days: u64) -> bool {
        self.age_days(now) > max_days
    }
}
