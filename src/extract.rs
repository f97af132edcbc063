//! Unpacking of gzip-compressed tar archives
//!
//! Only directory and regular-file entries are materialized. Every other
//! entry type (symlinks, hard links, devices, fifos) is skipped and counted.
//! Entry names are checked before anything is written: absolute names and
//! names with `..` segments abort the extraction with `UnsafeArchiveEntry`,
//! so nothing is ever created outside the extraction root.
//!
//! Stripping leading components may consume a whole entry name. Directories
//! that vanish this way (the release's top-level directory) are counted in
//! `stripped`; a regular file that would vanish aborts the extraction with
//! `StrippedArchiveEntry` instead of being dropped.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tar::{Archive, Entry, EntryType};
use tracing::{debug, trace};

use crate::common::fs::ensure_dir;
use crate::error::{self, Result};

/// What an extraction produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Directory entries processed (created or already present)
    pub directories: usize,
    /// Regular-file entries written
    pub files: usize,
    /// Entries of any other type
    pub skipped: usize,
    /// Directory entries whose whole name was removed by stripping
    pub stripped: usize,
}

/// Extract the `.tar.gz` at `archive` into `destination`.
///
/// `strip_components` leading path components are removed from every entry
/// name, like `tar --strip-components`.
pub fn extract(archive: &Path, destination: &Path, strip_components: usize) -> Result<ExtractSummary> {
    let file = File::open(archive).map_err(|e| error::fs::read_failed(archive, e))?;
    debug!(
        archive = %archive.display(),
        destination = %destination.display(),
        strip_components,
        "extracting"
    );
    unpack(BufReader::new(file), archive, destination, strip_components)
}

/// Extract a gzip-compressed tar stream. `source` only labels errors.
pub fn unpack<R: Read>(
    reader: R,
    source: &Path,
    destination: &Path,
    strip_components: usize,
) -> Result<ExtractSummary> {
    ensure_dir(destination)?;

    let mut archive = Archive::new(GzDecoder::new(reader));
    let entries = archive
        .entries()
        .map_err(|e| error::archive::malformed(source, e))?;

    let mut summary = ExtractSummary::default();
    for entry in entries {
        let mut entry = entry.map_err(|e| error::archive::malformed(source, e))?;
        let name = entry
            .path()
            .map_err(|e| error::archive::malformed(source, e))?
            .into_owned();
        let entry_type = entry.header().entry_type();

        let Some(relative) = entry_destination(&name, strip_components)? else {
            match entry_type {
                EntryType::Directory => {
                    trace!(entry = %name.display(), "directory stripped");
                    summary.stripped += 1;
                }
                kind if kind.is_file() => {
                    return Err(error::archive::stripped_file(&name, strip_components));
                }
                other => {
                    trace!(entry = %name.display(), kind = ?other, "skipping stripped entry");
                    summary.skipped += 1;
                }
            }
            continue;
        };
        let target = destination.join(relative);

        match entry_type {
            EntryType::Directory => {
                ensure_dir(&target)?;
                summary.directories += 1;
            }
            kind if kind.is_file() => {
                write_file(&mut entry, &target)?;
                summary.files += 1;
            }
            other => {
                trace!(entry = %name.display(), kind = ?other, "skipping entry");
                summary.skipped += 1;
            }
        }
    }

    debug!(?summary, "extraction finished");
    Ok(summary)
}

/// Map an entry name to its path relative to the extraction root.
///
/// Returns `None` when stripping consumes the whole name.
fn entry_destination(name: &Path, strip_components: usize) -> Result<Option<PathBuf>> {
    let mut relative = PathBuf::new();
    let mut stripped = 0;

    for component in name.components() {
        match component {
            Component::Normal(part) => {
                if stripped < strip_components {
                    stripped += 1;
                } else {
                    relative.push(part);
                }
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(error::archive::unsafe_entry(name));
            }
        }
    }

    if relative.as_os_str().is_empty() {
        Ok(None)
    } else {
        Ok(Some(relative))
    }
}

/// Write a regular-file entry to the already sanitized `target`.
///
/// `tar` replaces an existing file (read-only ones included) and applies the
/// entry's permission bits masked to `0o777`.
fn write_file<R: Read>(entry: &mut Entry<'_, R>, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        ensure_dir(parent)?;
    }

    entry
        .unpack(target)
        .map_err(|e| error::fs::write_failed(target, e))?;
    Ok(())
}
