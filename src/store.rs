//! Read-modify-write protocol for the version file.
//!
//! The file is rewritten with a plain in-place overwrite: no temporary file,
//! no atomic rename, no fsync. A crash in the middle of the write can leave
//! the file truncated; callers that need crash-safety must provide it
//! themselves.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::bump::{BumpFlags, BumpPlan};
use crate::version::{self, ParseError, Version};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unable to find `{}`", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Version file `{}` is empty", path.display())]
    EmptyFileContent { path: PathBuf },
    #[error("Increment plan and version disagree on the extra component")]
    ComponentMismatch,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads and parses the version currently stored at `path`.
///
/// Strips a single trailing newline before parsing. An empty file is a hard
/// error here: where a concrete version is required, the parser's empty
/// sentinel means the file holds nothing usable.
pub fn read_current(path: impl AsRef<Path>, dashed: bool) -> Result<Version, StoreError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(StoreError::FileNotFound { path: path.to_path_buf() });
    }

    let contents = fs::read_to_string(path)?;
    let data = contents.strip_suffix('\n').unwrap_or(&contents);

    match version::parse(data, dashed)? {
        Some(current) => {
            debug!("Current version in {}: {}", path.display(), current);
            Ok(current)
        }
        None => Err(StoreError::EmptyFileContent { path: path.to_path_buf() }),
    }
}

/// Applies one update to the version file at `path`.
///
/// A non-empty `replace` string is parsed under the effective dashed flag
/// and used verbatim as the new version; the file content is never read in
/// that path. Otherwise the stored version is read and stepped according to
/// the resolved plan. The result is serialized with a single trailing
/// newline and written back. Under `dry_run` the write is skipped, but every
/// parse and computation step still runs and can still fail.
///
/// Returns the new version so the caller can report it.
pub fn update(
    path: impl AsRef<Path>,
    flags: BumpFlags,
    dashed: bool,
    replace: &str,
    dry_run: bool,
) -> Result<Version, StoreError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(StoreError::FileNotFound { path: path.to_path_buf() });
    }

    let plan = flags.resolve(dashed);

    let new_version = match version::parse(replace, plan.dashed)? {
        Some(replacement) => {
            debug!("Using replacement version {} verbatim", replacement);
            replacement
        }
        None => {
            let current = read_current(path, plan.dashed)?;
            let bumped = step(current, &plan)?;
            debug!("Incrementing version from {} -> {}", current, bumped);
            bumped
        }
    };

    let line = format!("{new_version}\n");
    if dry_run {
        info!(
            "Dry run: would write {} to {}",
            new_version,
            path.display()
        );
    } else {
        fs::write(path, line)?;
        info!("Updated {} to {}", path.display(), new_version);
    }

    Ok(new_version)
}

/// Steps each flagged component of `current` by one.
fn step(current: Version, plan: &BumpPlan) -> Result<Version, StoreError> {
    // The parse above used the plan's dashed flag, so the shapes agree
    // unless something upstream went badly wrong.
    if plan.dashed != current.is_dashed() {
        return Err(StoreError::ComponentMismatch);
    }

    let bump = |value: u64, on: bool| if on { value + 1 } else { value };
    Ok(Version {
        major: bump(current.major, plan.steps[0]),
        minor: bump(current.minor, plan.steps[1]),
        patch: bump(current.patch, plan.steps[2]),
        extra: current.extra.map(|extra| bump(extra, plan.steps[3])),
    })
}
