//! An in-memory shell namespace: a virtual directory tree plus the classic
//! navigation and mutation commands (`touch`, `ls`, `rm`, `mv`, `mkdir`,
//! `cd`, `pwd`, `chmod`) that operate on it.
//!
//! ### Overview
//!
//! `memshell` keeps a whole filesystem-like hierarchy in process memory and
//! never touches the host disk. A [`Session`] owns one tree together with a
//! current-directory cursor; each command is a method returning a typed
//! result the caller must inspect.
//!
//! **Key ideas**:
//! - **Isolation**: state exists only for the lifetime of the [`Session`];
//!   nothing is persisted and no host paths are involved.
//! - **Bounded containers**: every directory holds at most a fixed number of
//!   files and sub-directories ([`Limits`], default 16 each); the ceiling is
//!   part of the observable contract, not an implementation accident.
//! - **Typed failures**: every failure is a [`ShellError`] value; no command
//!   panics or aborts the session.
//! - **Explicit teardown**: subtrees are released children-before-parent and
//!   the release order is observable, so the lifecycle can be tested.

mod engine;
mod error;
mod shell;
mod tree;

pub use engine::Session;
pub use error::{Result, ShellError};
pub use shell::{Outcome, eval_line};
pub use tree::{DirId, DirectoryNode, FileEntry, Limits, Tree};
