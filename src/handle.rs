use std::fmt;
use std::fs::File;

// =============================================================================
// UniqueHandle: exclusive ownership plus a caller-supplied release function
// =============================================================================

/// Owns at most one `T` and hands it to `release` when the handle goes away.
///
/// The release function runs exactly once for every handle the wrapper
/// adopted: on normal scope exit, on an early `?` return, and while a panic
/// unwinds through the owning scope. A handle constructed empty (for example
/// from a failed `File::open(..).ok()`) is never released.
pub struct UniqueHandle<T, F>
where
    F: FnMut(T),
{
    handle: Option<T>,
    release: F,
}

impl<T, F> UniqueHandle<T, F>
where
    F: FnMut(T),
{
    pub fn new(handle: Option<T>, release: F) -> Self {
        UniqueHandle { handle, release }
    }

    pub fn is_valid(&self) -> bool {
        self.handle.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.handle.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.handle.as_mut()
    }

    /// Release the current handle (if any), then adopt `handle`.
    pub fn reset(&mut self, handle: Option<T>) {
        if let Some(old) = self.handle.take() {
            (self.release)(old);
        }
        self.handle = handle;
    }

    /// Give up ownership without running the release function.
    pub fn into_inner(mut self) -> Option<T> {
        self.handle.take()
    }
}

impl<T, F> Drop for UniqueHandle<T, F>
where
    F: FnMut(T),
{
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            (self.release)(handle);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for UniqueHandle<T, F>
where
    F: FnMut(T),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueHandle")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

/// Named release function for file handles.
pub fn close_file(file: File) {
    drop(file);
}

pub type FileHandle = UniqueHandle<File, fn(File)>;

pub fn file_handle(file: Option<File>) -> FileHandle {
    UniqueHandle::new(file, close_file as fn(File))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DemoError, Result};
    use std::cell::{Cell, RefCell};
    use std::io::{Read, Write};
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_release_on_normal_exit() {
        let released = Cell::new(0);
        {
            let handle = UniqueHandle::new(Some(5), |_| released.set(released.get() + 1));
            assert!(handle.is_valid());
            assert_eq!(handle.get(), Some(&5));
            assert_eq!(released.get(), 0);
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_release_on_early_error_return() {
        let released = Cell::new(0);

        let fails = || -> Result<()> {
            let _handle = UniqueHandle::new(Some("stock"), |_| released.set(released.get() + 1));
            Err::<(), _>(DemoError::simulated("Simulated error"))?;
            Ok(())
        };

        let result = fails();
        assert!(matches!(result, Err(DemoError::Simulated(_))));
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_release_during_panic_unwind() {
        let released = Cell::new(0);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let _handle = UniqueHandle::new(Some(1u8), |_| released.set(released.get() + 1));
            panic!("Simulated error");
        }));

        assert!(outcome.is_err());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_empty_handle_never_released() {
        let released = Cell::new(0);
        {
            let handle = UniqueHandle::<i32, _>::new(None, |_| released.set(released.get() + 1));
            assert!(!handle.is_valid());
            assert!(handle.get().is_none());
        }
        assert_eq!(released.get(), 0);
    }

    #[test]
    fn test_moved_handle_releases_once() {
        let released = Cell::new(0);
        let first = UniqueHandle::new(Some(9), |_| released.set(released.get() + 1));
        let second = first;
        assert!(second.is_valid());
        drop(second);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_reset_releases_previous_handle() {
        let released = RefCell::new(Vec::new());
        {
            let mut handle = UniqueHandle::new(Some(1), |value| released.borrow_mut().push(value));
            handle.reset(Some(2));
            assert_eq!(*released.borrow(), vec![1]);
            assert_eq!(handle.get(), Some(&2));

            handle.reset(None);
            assert!(!handle.is_valid());
            handle.reset(Some(3));
        }
        assert_eq!(*released.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_into_inner_skips_release() {
        let released = Cell::new(0);
        let handle = UniqueHandle::new(Some(String::from("kept")), |_| {
            released.set(released.get() + 1)
        });
        let value = handle.into_inner();
        assert_eq!(value.as_deref(), Some("kept"));
        assert_eq!(released.get(), 0);
    }

    #[test]
    fn test_release_sees_handle_before_storage_is_gone() {
        let seen = RefCell::new(None);
        {
            let _handle = UniqueHandle::new(Some(vec![1, 2, 3]), |value: Vec<i32>| {
                *seen.borrow_mut() = Some(value.iter().sum::<i32>());
            });
        }
        assert_eq!(*seen.borrow(), Some(6));
    }

    #[test]
    fn test_file_handle_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.txt");
        File::create(&path).unwrap().write_all(b"x").unwrap();

        let mut handle = file_handle(File::open(&path).ok());
        let file = handle.get_mut().unwrap();
        let mut byte = [0u8; 1];
        file.read_exact(&mut byte).unwrap();
        assert_eq!(byte[0], b'x');
    }

    #[test]
    fn test_close_file_runs_once_per_opened_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.txt");
        File::create(&path).unwrap().write_all(b"x").unwrap();
        let closed = Cell::new(0);
        let counting_close = |file: File| {
            closed.set(closed.get() + 1);
            close_file(file);
        };

        {
            let mut handle = UniqueHandle::new(File::open(&path).ok(), counting_close);
            assert!(handle.is_valid());
            handle.reset(File::open(&path).ok());
            assert_eq!(closed.get(), 1);
        }
        assert_eq!(closed.get(), 2);

        {
            let missing = File::open(dir.path().join("missing.txt")).ok();
            let _handle = UniqueHandle::new(missing, counting_close);
        }
        assert_eq!(closed.get(), 2);
    }

    #[test]
    fn test_file_handle_for_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let handle = file_handle(File::open(dir.path().join("missing.txt")).ok());
        assert!(!handle.is_valid());
    }
}
