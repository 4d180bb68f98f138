//! Scoped resource management.
//!
//! The same guarantee shown two ways: a handle type that releases its file
//! on drop, and a closure scope that releases on every exit path, error
//! included.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// A file handle released when the value goes out of scope.
///
/// Buffered bytes are flushed on drop, so lines written before an early
/// exit still reach the file.
#[derive(Debug)]
pub struct ManagedFile {
    file: File,
}

impl ManagedFile {
    /// Opens (creating or truncating) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(ManagedFile { file: File::create(path)? })
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.file, "{}", line)
    }
}

impl Drop for ManagedFile {
    fn drop(&mut self) {
        // The handle closes itself; flushing is the only cleanup we owe.
        let _ = self.file.flush();
    }
}

/// Opens the file at `path`, runs `body` on it, and releases the handle on
/// every exit path. An error from `body` propagates after release.
pub fn with_file<P, F>(path: P, body: F) -> io::Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = File::create(path)?;
    let result = body(&mut file);
    file.flush()?;
    result
}

/// Runs its closure when dropped, unless disarmed. Makes "the cleanup ran"
/// observable from the outside.
pub struct CleanupGuard<F: FnOnce()> {
    cleanup: Option<F>,
}

impl<F: FnOnce()> CleanupGuard<F> {
    pub fn new(cleanup: F) -> Self {
        CleanupGuard { cleanup: Some(cleanup) }
    }

    /// Cancels the cleanup; nothing runs on drop.
    pub fn disarm(mut self) {
        self.cleanup = None;
    }
}

impl<F: FnOnce()> Drop for CleanupGuard<F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::ErrorKind;
    use std::rc::Rc;

    #[test]
    fn managed_file_writes_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.txt");

        {
            let mut f = ManagedFile::create(&path).unwrap();
            f.write_line("Hey").unwrap();
            f.write_line("Hey!").unwrap();
        } // handle released here

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Hey\nHey!\n");
    }

    #[test]
    fn with_file_runs_the_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.txt");

        with_file(&path, |f| {
            writeln!(f, "h")?;
            writeln!(f, "g")
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "h\ng\n");
    }

    #[test]
    fn with_file_propagates_body_errors_after_release() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.txt");

        let err = with_file(&path, |f| {
            writeln!(f, "written before the failure")?;
            Err(io::Error::new(ErrorKind::Other, "boom"))
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "boom");

        // The handle was released and the partial write survived.
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "written before the failure\n");
    }

    #[test]
    fn cleanup_runs_even_when_the_scope_errors() {
        let released = Rc::new(Cell::new(false));

        fn failing_scope(released: Rc<Cell<bool>>) -> Result<(), &'static str> {
            let _guard = CleanupGuard::new(move || released.set(true));
            let partway: Result<(), &'static str> = Err("partway failure");
            partway?; // early exit; guard still drops
            Ok(())
        }

        assert!(failing_scope(Rc::clone(&released)).is_err());
        assert!(released.get(), "cleanup must run on the error path");
    }

    #[test]
    fn disarmed_guard_skips_cleanup() {
        let ran = Rc::new(Cell::new(false));
        let guard = CleanupGuard::new({
            let ran = Rc::clone(&ran);
            move || ran.set(true)
        });
        guard.disarm();
        assert!(!ran.get());
    }
}
