mod arena;
mod node;

pub use arena::{DirId, Tree};
pub use node::{DirectoryNode, FileEntry, Limits};

pub(crate) use node::clip;
