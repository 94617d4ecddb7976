use crate::common::*;

/// An image file belonging to a character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub path: PathBuf,
    pub character_id: usize,
}

/// A character with all of its image files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEntry {
    /// Dense index assigned in traversal order.
    pub id: usize,
    /// The alphabet directory name.
    pub alphabet: String,
    /// The character directory name.
    pub name: String,
    pub descriptors: Vec<ImageDescriptor>,
}

impl CharacterEntry {
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// A descriptor drawn into a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskSample {
    pub descriptor: ImageDescriptor,
    /// The class of the sample within its task, in `0..N`.
    pub episode_label: usize,
}
