use std::{fs::File, io::{ErrorKind, Write}, path::{Path, PathBuf}};

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;

/// Write-then-rename wrapper so a failed render never leaves a partial page behind.
pub(crate) struct PendingWrite {
    target: PathBuf,
    tmp: NamedTempFile,
    force: bool,
}

impl PendingWrite {
    /// Open a temp file next to `target`. Refuses to clobber an existing file unless `force`.
    pub(crate) fn open(target: &Path, force: bool) -> Result<Self> {
        let parent = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .with_context(|| format!("[io::fs] create dir {}", parent.display()))?;
        if !force && target.exists() {
            bail!(refusal(target));
        }
        let tmp = NamedTempFile::new_in(parent)
            .context("[io::fs] create temp file")?;

        Ok(Self { target: target.to_path_buf(), tmp, force })
    }

    /// Flush and move the temp file into place. Without `force` the rename
    /// itself refuses to replace a file that appeared after `open`.
    pub(crate) fn finalize(mut self) -> Result<()> {
        self.tmp.flush()
            .with_context(|| format!("[io::fs] flush {}", self.target.display()))?;
        self.tmp.as_file().sync_all().ok(); // best-effort fsync file
        let persisted = if self.force {
            self.tmp.persist(&self.target)
        } else {
            self.tmp.persist_noclobber(&self.target)
        };
        match persisted {
            Ok(_) => {}
            Err(err) if err.error.kind() == ErrorKind::AlreadyExists => bail!(refusal(&self.target)),
            Err(err) => {
                return Err(err.error)
                    .with_context(|| format!("[io::fs] rename to {}", self.target.display()));
            }
        }
        if let Some(dir) = self.target.parent() {
            let _ = File::open(dir).and_then(|f| f.sync_all());
        }
        Ok(())
    }
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.tmp.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.tmp.flush() }
}

fn refusal(target: &Path) -> String {
    format!("[io::fs] Refusing to overwrite existing file: {} (use --force)", target.display())
}

/// Atomically write `contents` to `path`.
pub(crate) fn write_atomic(path: &Path, contents: &[u8], force: bool) -> Result<()> {
    let mut sink = PendingWrite::open(path, force)?;
    sink.write_all(contents)
        .with_context(|| format!("[io::fs] write {}", path.display()))?;
    sink.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/plot.html");

        write_atomic(&path, b"first", false).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"first");

        let err = write_atomic(&path, b"second", false).unwrap_err();
        assert!(err.to_string().contains("--force"), "{err}");
        assert_eq!(std::fs::read(&path).unwrap(), b"first");

        write_atomic(&path, b"second", true).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn dropped_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.html");

        let mut sink = PendingWrite::open(&path, false).unwrap();
        sink.write_all(b"partial").unwrap();
        drop(sink);

        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn file_created_after_open_is_not_clobbered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.html");

        let mut sink = PendingWrite::open(&path, false).unwrap();
        sink.write_all(b"ours").unwrap();
        std::fs::write(&path, b"theirs").unwrap();

        let err = sink.finalize().unwrap_err();
        assert!(err.to_string().contains("--force"), "{err}");
        assert_eq!(std::fs::read(&path).unwrap(), b"theirs");
    }
}
