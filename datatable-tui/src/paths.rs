//! Where settings and logs live.
//!
//! Settings go in the platform config directory, logs in the cache
//! directory. Both are `None` when no home directory can be found.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "norpie";
const APPLICATION: &str = "datatable";

const SETTINGS_FILE: &str = "settings.json";
const LATEST_LOG: &str = "latest.log";

/// Archived logs kept besides `latest.log`.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// `settings.json` in the config directory.
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Log file of the running session.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous session's log and prune old archives.
///
/// Runs before the logger opens a fresh `latest.log`.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache, Local::now(), MAX_OLD_LOGS);
    }
}

fn rotate_logs_in(dir: &Path, now: DateTime<Local>, keep: usize) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let archived = dir.join(archive_name(now));
        if let Err(e) = fs::rename(&latest, &archived) {
            // Logging is not up yet.
            eprintln!("Could not archive {}: {}", latest.display(), e);
        }
    }
    cleanup_old_logs(dir, keep);
}

fn archive_name(now: DateTime<Local>) -> String {
    format!("{}.log", now.format("%Y%m%d_%H%M%S"))
}

/// Delete all but the `keep` newest archived logs.
fn cleanup_old_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut archives: Vec<(Option<std::time::SystemTime>, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .map(|entry| {
            let modified = entry.metadata().and_then(|m| m.modified()).ok();
            (modified, entry.path())
        })
        .collect();
    if archives.len() <= keep {
        return;
    }

    archives.sort();
    let excess = archives.len() - keep;
    for (_, path) in archives.into_iter().take(excess) {
        let _ = fs::remove_file(path);
    }
}
