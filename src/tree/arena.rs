use std::ops::{Index, IndexMut};

use log::{debug, trace};

use crate::error::{Result, ShellError};

use super::node::{self, DirectoryNode, Limits};

/// Stable handle to a directory slot inside a [`Tree`] arena.
///
/// Handles stay valid for as long as the node they name is alive; nothing in
/// the command set releases individual directories, so during a session a
/// handle can only be invalidated by whole-subtree teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirId(usize);

/// The namespace tree: an arena of [`DirectoryNode`] slots addressed by
/// [`DirId`] handles.
///
/// ### Internal state
///
/// * `nodes` — slot vector; occupied slots hold a node, vacated slots are
///   left `None` after teardown. Handles are plain indices into it.
/// * `root` — handle of the sole parentless node, created with the tree.
/// * `limits` — capacity and width bounds shared by every node.
///
/// ### Invariants
///
/// 1. **Root existence**: `root` names an occupied slot whose node has no
///    parent; it is the only such node.
/// 2. **Single parent chain**: every other occupied node is reachable from
///    the root through exactly one chain of `subdirs` links, and its
///    `parent` handle points back along that chain.
/// 3. **Acyclicity**: parent links never revisit a node, so ancestor walks
///    terminate (and are additionally bounded by `limits.max_depth`).
/// 4. **Name uniqueness**: within one directory, the set of child names
///    (files and sub-directories together) contains no duplicates.
///
/// ### Thread safety
///
/// Not thread-safe by design: the intended use is one tree per session with
/// a single mutator. Concurrent callers would need to wrap the tree in a
/// lock at the application level.
#[derive(Debug)]
pub struct Tree {
    limits: Limits,
    nodes: Vec<Option<DirectoryNode>>,
    root: DirId,
}

impl Tree {
    /// Builds a tree containing only the root, named by `sentinel`
    /// (conventionally the path separator, `"/"`).
    pub fn new(sentinel: &str, limits: Limits) -> Result<Self> {
        let mut nodes: Vec<Option<DirectoryNode>> = Vec::new();
        nodes
            .try_reserve(1)
            .map_err(|_| ShellError::AllocationFailure)?;
        nodes.push(Some(DirectoryNode::new(sentinel.to_string(), None)));

        Ok(Self {
            limits,
            nodes,
            root: DirId(0),
        })
    }

    /// Handle of the sole parentless node.
    pub fn root(&self) -> DirId {
        self.root
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Number of live directory nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    /// Creates a directory named `name` under `parent` and returns its
    /// handle. The name is clipped to the configured width first.
    ///
    /// Fails with `NameCollision` if the clipped name already identifies a
    /// file or sub-directory among `parent`'s direct children, with
    /// `CapacityExceeded` if the sub-directory collection is full, and with
    /// `AllocationFailure` if the arena cannot grow. No mutation happens on
    /// any failure path.
    pub fn create_dir(&mut self, parent: DirId, name: &str) -> Result<DirId> {
        let name = node::clip(name, self.limits.name_width);

        if self.name_taken(parent, name) {
            return Err(ShellError::NameCollision(name.to_string()));
        }
        if self[parent].subdirs().len() >= self.limits.max_subdirs {
            return Err(ShellError::CapacityExceeded("subdir"));
        }
        self.nodes
            .try_reserve(1)
            .map_err(|_| ShellError::AllocationFailure)?;

        let id = DirId(self.nodes.len());
        self.nodes
            .push(Some(DirectoryNode::new(name.to_string(), Some(parent))));
        self[parent].push_subdir(id);

        debug!("created directory '{name}' under {parent:?} as {id:?}");
        Ok(id)
    }

    /// Position of the file named `name` among `dir`'s child files.
    ///
    /// Linear scan over direct children only; comparison is exact,
    /// case-sensitive and byte-wise.
    pub fn find_child_file(&self, dir: DirId, name: &str) -> Option<usize> {
        self[dir].files().iter().position(|f| f.name() == name)
    }

    /// Position of the sub-directory named `name` among `dir`'s children,
    /// under the same comparison rules as [`Tree::find_child_file`].
    pub fn find_child_dir(&self, dir: DirId, name: &str) -> Option<usize> {
        self[dir]
            .subdirs()
            .iter()
            .position(|&child| self[child].name() == name)
    }

    /// True if `name` identifies a direct child of `dir` of either kind.
    pub fn name_taken(&self, dir: DirId, name: &str) -> bool {
        self.find_child_file(dir, name).is_some() || self.find_child_dir(dir, name).is_some()
    }

    /// Handles from the root down to `dir` inclusive.
    ///
    /// Walks parent links upward and reverses, so the result is in
    /// root-to-leaf order. Chains longer than `limits.max_depth` signal
    /// `PathTooDeep` instead of returning a truncated (and therefore wrong)
    /// path.
    pub fn ancestor_chain(&self, dir: DirId) -> Result<Vec<DirId>> {
        let mut chain = vec![dir];
        let mut cursor = dir;
        while let Some(parent) = self[cursor].parent() {
            if chain.len() >= self.limits.max_depth {
                return Err(ShellError::PathTooDeep(self.limits.max_depth));
            }
            chain.push(parent);
            cursor = parent;
        }
        chain.reverse();
        Ok(chain)
    }

    /// Releases `dir` and every descendant, children before parents, and
    /// returns the handles in release order.
    ///
    /// The traversal is an explicit iterative post-order so the
    /// "no node outlives its release while a child is pending" contract is
    /// visible rather than incidental. Calling it again on an
    /// already-released handle is a no-op returning an empty trace.
    pub fn destroy_subtree(&mut self, dir: DirId) -> Vec<DirId> {
        let Some(node) = self.nodes.get(dir.0).and_then(Option::as_ref) else {
            return Vec::new();
        };
        if let Some(parent) = node.parent() {
            if let Some(parent_node) = self.nodes[parent.0].as_mut() {
                parent_node.detach_subdir(dir);
            }
        }

        let mut order = Vec::new();
        let mut stack = vec![(dir, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                trace!("releasing {id:?}");
                self.nodes[id.0] = None;
                order.push(id);
                continue;
            }
            stack.push((id, true));
            // Reversed so siblings are released in insertion order.
            for &child in self[id].subdirs().iter().rev() {
                stack.push((child, false));
            }
        }

        debug!("destroyed subtree at {dir:?}: {} nodes", order.len());
        order
    }
}

impl Index<DirId> for Tree {
    type Output = DirectoryNode;

    fn index(&self, id: DirId) -> &DirectoryNode {
        self.nodes[id.0].as_ref().expect("stale DirId")
    }
}

impl IndexMut<DirId> for Tree {
    fn index_mut(&mut self, id: DirId) -> &mut DirectoryNode {
        self.nodes[id.0].as_mut().expect("stale DirId")
    }
}
