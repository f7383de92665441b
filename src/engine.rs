//! The command engine: one [`Session`] per logical user, holding the tree
//! plus the current-directory cursor, with one method per shell command.
//!
//! Commands take their arguments as `Option<&str>` exactly as the dispatch
//! layer hands them over; a missing argument is an ordinary `Usage` failure,
//! not a panic. Successful mutations answer with the human-readable outcome
//! line; every failure leaves the tree untouched.

use log::trace;

use crate::error::{Result, ShellError};
use crate::tree::{DirId, FileEntry, Limits, Tree};

mod msg {
    pub const TOUCH: &str = "touch <name>";
    pub const RM: &str = "rm <name>";
    pub const MV: &str = "mv <old> <new>";
    pub const MKDIR: &str = "mkdir <name>";
    pub const CD: &str = "cd <dir>";
    pub const CHMOD: &str = "chmod <mode> <filename>";
}

/// One interactive session over its own private namespace tree.
///
/// The current directory is the only engine-level state that changes across
/// calls; it moves only via [`Session::cd`] and only to the root, itself,
/// its parent or a direct child, so it can never dangle (no command releases
/// directories while a session runs).
#[derive(Debug)]
pub struct Session {
    tree: Tree,
    root: DirId,
    cwd: DirId,
}

impl Session {
    /// Fresh session with the default [`Limits`].
    pub fn new() -> Result<Self> {
        Self::with_limits(Limits::default())
    }

    /// Fresh session over an empty tree bounded by `limits`; the current
    /// directory starts at the root.
    pub fn with_limits(limits: Limits) -> Result<Self> {
        let tree = Tree::new("/", limits)?;
        let root = tree.root();
        Ok(Self {
            tree,
            root,
            cwd: root,
        })
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root(&self) -> DirId {
        self.root
    }

    /// Handle of the current directory.
    pub fn cwd(&self) -> DirId {
        self.cwd
    }

    /// Creates an empty file in the current directory: default tag, size 0.
    pub fn touch(&mut self, name: Option<&str>) -> Result<String> {
        let name = self.file_name(name, msg::TOUCH)?;

        if self.tree.name_taken(self.cwd, &name) {
            return Err(ShellError::NameCollision(name));
        }
        if self.tree[self.cwd].files().len() >= self.tree.limits().max_files {
            return Err(ShellError::CapacityExceeded("file"));
        }

        trace!("touch '{name}' in {:?}", self.cwd);
        self.tree[self.cwd].push_file(FileEntry::new(name.clone()));
        Ok(format!("file '{name}' created"))
    }

    /// Lists the current directory: sub-directories first (suffixed `/`),
    /// then files, both in insertion order. The long format prefixes a fixed
    /// placeholder for directories and the real tag and size for files.
    pub fn ls(&self, long_format: bool) -> Vec<String> {
        let dir = &self.tree[self.cwd];
        let mut lines = Vec::with_capacity(dir.subdirs().len() + dir.files().len());

        for &subdir in dir.subdirs() {
            let name = self.tree[subdir].name();
            lines.push(if long_format {
                format!("drwx ---- {name}/")
            } else {
                format!("{name}/")
            });
        }
        for file in dir.files() {
            lines.push(if long_format {
                format!("-{} {:4} {}", file.permission_tag(), file.size(), file.name())
            } else {
                file.name().to_string()
            });
        }
        lines
    }

    /// Removes a file from the current directory, keeping the remaining
    /// entries contiguous and in order. A name that exists only as a
    /// directory is `NotFound` here: directory deletion is not a command.
    pub fn rm(&mut self, name: Option<&str>) -> Result<String> {
        let name = self.file_name(name, msg::RM)?;

        let index = self
            .tree
            .find_child_file(self.cwd, &name)
            .ok_or_else(|| ShellError::NotFound(name.clone()))?;

        trace!("rm '{name}' in {:?}", self.cwd);
        self.tree[self.cwd].remove_file(index);
        Ok(format!("file '{name}' removed"))
    }

    /// Renames a file in place; size, tag and content are untouched.
    pub fn mv(&mut self, old: Option<&str>, new: Option<&str>) -> Result<String> {
        let old = self.file_name(old, msg::MV)?;
        let new = self.file_name(new, msg::MV)?;

        let index = self
            .tree
            .find_child_file(self.cwd, &old)
            .ok_or_else(|| ShellError::NotFound(old.clone()))?;
        if self.tree.name_taken(self.cwd, &new) {
            return Err(ShellError::NameCollision(new));
        }

        trace!("mv '{old}' -> '{new}' in {:?}", self.cwd);
        self.tree[self.cwd].file_mut(index).set_name(new.clone());
        Ok(format!("renamed '{old}' -> '{new}'"))
    }

    /// Creates a sub-directory of the current directory.
    pub fn mkdir(&mut self, name: Option<&str>) -> Result<String> {
        let name = self.file_name(name, msg::MKDIR)?;
        self.tree.create_dir(self.cwd, &name)?;
        Ok(format!("directory '{name}' created"))
    }

    /// Overwrites a file's permission tag, clipped to the tag width.
    pub fn chmod(&mut self, tag: Option<&str>, name: Option<&str>) -> Result<String> {
        let tag = tag
            .filter(|t| !t.is_empty())
            .ok_or(ShellError::Usage(msg::CHMOD))?;
        let name = self.file_name(name, msg::CHMOD)?;

        let index = self
            .tree
            .find_child_file(self.cwd, &name)
            .ok_or_else(|| ShellError::NotFound(name.clone()))?;

        let tag = crate::tree::clip(tag, self.tree.limits().tag_width).to_string();
        trace!("chmod '{name}' to '{tag}' in {:?}", self.cwd);
        let file = self.tree[self.cwd].file_mut(index);
        file.set_permission_tag(tag.clone());
        Ok(format!("permissions of '{name}' changed to '{tag}'"))
    }

    /// Moves the current directory. Accepts the root token, `.`, `..` (a
    /// no-op at the root) or the name of a direct child directory; on any
    /// failure the current directory is unchanged.
    pub fn cd(&mut self, token: Option<&str>) -> Result<()> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(ShellError::Usage(msg::CD))?;

        let next = match token {
            "/" => self.root,
            "." => self.cwd,
            ".." => self.tree[self.cwd].parent().unwrap_or(self.cwd),
            name => {
                let index = self
                    .tree
                    .find_child_dir(self.cwd, name)
                    .ok_or_else(|| ShellError::NotFound(name.to_string()))?;
                self.tree[self.cwd].subdirs()[index]
            }
        };

        trace!("cd {:?} -> {next:?}", self.cwd);
        self.cwd = next;
        Ok(())
    }

    /// Absolute path of the current directory: the separator alone for the
    /// root, otherwise segments joined by the separator with no trailing
    /// one.
    pub fn pwd(&self) -> Result<String> {
        let chain = self.tree.ancestor_chain(self.cwd)?;
        if chain.len() == 1 {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for &id in &chain[1..] {
            path.push('/');
            path.push_str(self.tree[id].name());
        }
        Ok(path)
    }

    /// Tears the whole tree down, children before parents, and returns the
    /// release-order trace.
    pub fn destroy(mut self) -> Vec<DirId> {
        let root = self.root;
        self.tree.destroy_subtree(root)
    }

    /// Validates a single-segment name argument: present, non-empty, no
    /// embedded separator; clipped to the configured name width.
    fn file_name(&self, name: Option<&str>, usage: &'static str) -> Result<String> {
        let name = name
            .filter(|n| !n.is_empty() && !n.contains('/'))
            .ok_or(ShellError::Usage(usage))?;
        Ok(crate::tree::clip(name, self.tree.limits().name_width).to_string())
    }
}
