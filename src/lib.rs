//! Exclusive ownership in practice: moving boxes in and out of functions,
//! dispatching through `Box<dyn Trait>`, releasing resources with
//! caller-supplied functions on every exit path, owning arrays, and tearing
//! down a long linked list without recursion.

pub mod config;
pub mod demos;
pub mod error;
pub mod handle;
pub mod journal;
pub mod list;
pub mod shop;

pub use config::DemoConfig;
pub use error::{DemoError, Result};
pub use handle::{close_file, file_handle, FileHandle, UniqueHandle};
pub use journal::Journal;
pub use list::LinkedList;
pub use shop::{pass_through, Base, Derived, Shop};
