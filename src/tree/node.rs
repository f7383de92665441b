use super::arena::DirId;

/// Permission tag a file is born with.
pub(crate) const DEFAULT_TAG: &str = "rw-";

/// Capacity and width bounds for one tree.
///
/// The defaults reproduce the classic teaching-simulator constants: 16 child
/// entries of each kind per directory, 31-byte names, 7-byte permission
/// tags, 512-byte file content, 64 levels of nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of child files per directory.
    pub max_files: usize,
    /// Maximum number of child sub-directories per directory.
    pub max_subdirs: usize,
    /// Names longer than this many bytes are clipped at a char boundary.
    pub name_width: usize,
    /// Permission tags longer than this many bytes are clipped likewise.
    pub tag_width: usize,
    /// Maximum file content size in bytes.
    pub max_content: usize,
    /// Ancestor chains longer than this signal `PathTooDeep`.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_files: 16,
            max_subdirs: 16,
            name_width: 31,
            tag_width: 7,
            max_content: 512,
            max_depth: 64,
        }
    }
}

/// Clips `text` to at most `width` bytes without splitting a character.
pub(crate) fn clip(text: &str, width: usize) -> &str {
    if text.len() <= width {
        return text;
    }
    let mut end = width;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// A leaf entry: name, opaque permission tag and a bounded content buffer.
///
/// Owned exclusively by its containing directory; holds no back-reference.
/// The engine only ever creates, removes, renames and retags files — content
/// is never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    name: String,
    permission_tag: String,
    content: Vec<u8>,
}

impl FileEntry {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            permission_tag: DEFAULT_TAG.to_string(),
            content: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn permission_tag(&self) -> &str {
        &self.permission_tag
    }

    /// Content length in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_permission_tag(&mut self, tag: String) {
        self.permission_tag = tag;
    }
}

/// One namespace container: insertion-ordered child files and child
/// sub-directory handles, plus a parent back-reference.
///
/// The parent link is a non-owning [`DirId`]; ownership flows strictly
/// parent-to-child through the arena. The root is the only node with no
/// parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    name: String,
    parent: Option<DirId>,
    files: Vec<FileEntry>,
    subdirs: Vec<DirId>,
}

impl DirectoryNode {
    pub(crate) fn new(name: String, parent: Option<DirId>) -> Self {
        Self {
            name,
            parent,
            files: Vec::new(),
            subdirs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<DirId> {
        self.parent
    }

    /// Child files in insertion order.
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Child sub-directory handles in insertion order.
    pub fn subdirs(&self) -> &[DirId] {
        &self.subdirs
    }

    pub(crate) fn push_file(&mut self, file: FileEntry) {
        self.files.push(file);
    }

    /// Removes the file at `index`, shifting later entries down so the
    /// collection stays contiguous and insertion-ordered.
    pub(crate) fn remove_file(&mut self, index: usize) -> FileEntry {
        self.files.remove(index)
    }

    pub(crate) fn file_mut(&mut self, index: usize) -> &mut FileEntry {
        &mut self.files[index]
    }

    pub(crate) fn push_subdir(&mut self, id: DirId) {
        self.subdirs.push(id);
    }

    pub(crate) fn detach_subdir(&mut self, id: DirId) {
        self.subdirs.retain(|&child| child != id);
    }
}
