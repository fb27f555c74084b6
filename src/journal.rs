use colored::Colorize;
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Journal: the progress log every demo and resource writes into
// =============================================================================

/// Shared, single-threaded log of progress lines.
///
/// Cloning a `Journal` gives another handle onto the same log, so a resource
/// can keep one and record its own teardown long after the demo that created
/// it has moved it elsewhere. An echoing journal also prints each line to
/// stdout as it is recorded.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: Vec<String>,
    echo: bool,
}

impl Journal {
    /// Quiet journal: records lines, never prints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Journal that mirrors every line to stdout.
    pub fn echoing() -> Self {
        Journal {
            inner: Rc::new(RefCell::new(Inner {
                entries: Vec::new(),
                echo: true,
            })),
        }
    }

    pub fn record(&self, line: impl Into<String>) {
        let line = line.into();
        let mut inner = self.inner.borrow_mut();
        if inner.echo {
            println!("{line}");
        }
        inner.entries.push(line);
    }

    /// Record the title line of a numbered demo.
    pub fn heading(&self, index: usize, title: &str) {
        let line = format!("{index}) {title}");
        let mut inner = self.inner.borrow_mut();
        if inner.echo {
            if !inner.entries.is_empty() {
                println!();
            }
            println!("{}", line.bold());
        }
        inner.entries.push(line);
    }

    /// Record an error that a demo reported instead of completing.
    pub fn failure(&self, line: impl Into<String>) {
        let line = line.into();
        let mut inner = self.inner.borrow_mut();
        if inner.echo {
            println!("{}", line.red());
        }
        inner.entries.push(line);
    }

    pub fn entries(&self) -> Vec<String> {
        self.inner.borrow().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// How many recorded lines equal `line` exactly.
    pub fn count(&self, line: &str) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.as_str() == line)
            .count()
    }

    /// Index of the first recorded line equal to `line`.
    pub fn position(&self, line: &str) -> Option<usize> {
        self.inner
            .borrow()
            .entries
            .iter()
            .position(|entry| entry.as_str() == line)
    }
}

// =============================================================================
// Tests
// =============================================================================
