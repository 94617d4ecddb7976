use super::*;
use crate::common::*;
use std::fs;

/// The image file extension used when none is configured.
pub const DEFAULT_IMAGE_EXTENSION: &str = "png";

/// The ordered list of characters discovered in a dataset directory.
///
/// The directory is expected to be laid out as `root/<alphabet>/<character>/<image>`.
/// Directory entries are visited in file name order, so that the character ids are
/// stable as long as the tree is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterIndex {
    root: Option<PathBuf>,
    alphabets: Vec<String>,
    characters: Vec<CharacterEntry>,
}

impl CharacterIndex {
    /// Scan the dataset directory.
    ///
    /// * `root` - The directory containing one subdirectory per alphabet.
    /// * `extension` - The image file extension, with or without the leading dot.
    pub fn load(root: impl AsRef<Path>, extension: &str) -> Result<Self> {
        let root = root.as_ref();
        let extension = extension.trim_start_matches('.');
        ensure_arg!(!extension.is_empty(), "image extension must not be empty");
        let suffix = format!(".{}", extension);

        if !root.exists() {
            return Err(Error::NotFound {
                path: root.to_owned(),
            });
        }

        let alphabet_dirs = list_dir(root)?;
        let mut alphabets = Vec::with_capacity(alphabet_dirs.len());
        let mut characters = vec![];

        for alphabet_dir in alphabet_dirs {
            let alphabet = file_name(&alphabet_dir);

            for character_dir in list_dir(&alphabet_dir)? {
                let id = characters.len();
                let name = file_name(&character_dir);

                let descriptors: Vec<_> = list_files(&character_dir, &suffix)?
                    .into_iter()
                    .map(|path| ImageDescriptor {
                        path,
                        character_id: id,
                    })
                    .collect();

                if descriptors.is_empty() {
                    warn!(
                        "character directory '{}' has no '{}' files",
                        character_dir.display(),
                        suffix
                    );
                }

                characters.push(CharacterEntry {
                    id,
                    alphabet: alphabet.clone(),
                    name,
                    descriptors,
                });
            }

            alphabets.push(alphabet);
        }

        info!(
            "indexed {} characters in {} alphabets under '{}'",
            characters.len(),
            alphabets.len(),
            root.display()
        );

        Ok(Self {
            root: Some(root.to_owned()),
            alphabets,
            characters,
        })
    }

    /// Build an index from in-memory entries.
    ///
    /// The entry ids must be dense and equal to their positions, and every descriptor
    /// must carry the id of its entry.
    pub fn from_entries(characters: Vec<CharacterEntry>) -> Result<Self> {
        for (position, entry) in characters.iter().enumerate() {
            ensure_arg!(
                entry.id == position,
                "character at position {} has id {}",
                position,
                entry.id
            );
            let bad_descriptor = entry
                .descriptors
                .iter()
                .find(|descriptor| descriptor.character_id != entry.id);
            if let Some(descriptor) = bad_descriptor {
                return Err(Error::invalid_argument(format!(
                    "descriptor '{}' has character id {}, but belongs to character {}",
                    descriptor.path.display(),
                    descriptor.character_id,
                    entry.id
                )));
            }
        }

        let alphabets = characters
            .iter()
            .map(|entry| entry.alphabet.clone())
            .unique()
            .collect();

        Ok(Self {
            root: None,
            alphabets,
            characters,
        })
    }

    /// The scanned directory, or `None` if the index was built in memory.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn alphabets(&self) -> &[String] {
        &self.alphabets
    }

    pub fn entries(&self) -> &[CharacterEntry] {
        &self.characters
    }

    pub fn into_entries(self) -> Vec<CharacterEntry> {
        self.characters
    }

    pub fn get(&self, id: usize) -> Option<&CharacterEntry> {
        self.characters.get(id)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn num_images(&self) -> usize {
        self.characters.iter().map(|entry| entry.len()).sum()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    let to_error = |source: io::Error| match source.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: dir.to_owned(),
        },
        _ => Error::Io {
            path: dir.to_owned(),
            source,
        },
    };

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(to_error)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<io::Result<_>>()
        .map_err(to_error)?;
    paths.sort_by(|lhs, rhs| lhs.file_name().cmp(&rhs.file_name()));
    Ok(paths)
}

/// List subdirectories in file name order.
fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(read_dir_sorted(dir)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect())
}

/// List regular files whose names end with `suffix` in file name order.
fn list_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    Ok(read_dir_sorted(dir)?
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.ends_with(suffix))
                .unwrap_or(false)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: impl AsRef<Path>) {
        let path = path.as_ref();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn ids_follow_sorted_traversal_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root.join("Latin/character02/0002_01.png"));
        touch(root.join("Latin/character01/0001_01.png"));
        touch(root.join("Latin/character01/0001_02.png"));
        touch(root.join("Greek/character01/0101_01.png"));

        let index = CharacterIndex::load(root, "png").unwrap();

        assert_eq!(index.alphabets(), &["Greek", "Latin"]);
        let names = index
            .entries()
            .iter()
            .map(|entry| (entry.id, entry.alphabet.as_str(), entry.name.as_str()))
            .collect_vec();
        assert_eq!(
            names,
            vec![
                (0, "Greek", "character01"),
                (1, "Latin", "character01"),
                (2, "Latin", "character02"),
            ]
        );

        let latin = index.get(1).unwrap();
        assert_eq!(latin.len(), 2);
        assert_eq!(
            latin.descriptors[0].path,
            root.join("Latin/character01/0001_01.png")
        );
        assert!(latin.descriptors.iter().all(|desc| desc.character_id == 1));
        assert_eq!(index.num_images(), 4);
        assert_eq!(index.root(), Some(root));
    }

    #[test]
    fn only_matching_files_are_indexed() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root.join("Latin/a/1.png"));
        touch(root.join("Latin/a/2.jpg"));
        touch(root.join("Latin/a/notes.txt"));
        fs::create_dir_all(root.join("Latin/a/nested.png")).unwrap();
        touch(root.join("stray.png"));

        let index = CharacterIndex::load(root, ".png").unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.entries()[0].len(), 1);

        let index = CharacterIndex::load(root, "jpg").unwrap();
        assert_eq!(index.entries()[0].descriptors[0].path, root.join("Latin/a/2.jpg"));
    }

    #[test]
    fn empty_characters_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("Latin/empty")).unwrap();
        fs::create_dir_all(root.join("Runic")).unwrap();
        touch(root.join("Latin/full/1.png"));

        let index = CharacterIndex::load(root, "png").unwrap();
        assert_eq!(index.alphabets().len(), 2);
        assert_eq!(index.len(), 2);
        assert!(index.entries()[0].is_empty());
        assert_eq!(index.entries()[0].name, "empty");
        assert_eq!(index.entries()[1].len(), 1);
    }

    #[test]
    fn missing_root_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("omniglot");
        let err = CharacterIndex::load(&root, "png").unwrap_err();
        assert!(matches!(err, Error::NotFound { path } if path == root));
    }

    #[test]
    fn empty_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            CharacterIndex::load(dir.path(), "."),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn from_entries_requires_dense_ids() {
        let entry = |id, character_id| CharacterEntry {
            id,
            alphabet: "Latin".into(),
            name: format!("character{:02}", id),
            descriptors: vec![ImageDescriptor {
                path: format!("{}.png", id).into(),
                character_id,
            }],
        };

        let index = CharacterIndex::from_entries(vec![entry(0, 0), entry(1, 1)]).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.alphabets(), &["Latin"]);
        assert_eq!(index.root(), None);

        assert!(matches!(
            CharacterIndex::from_entries(vec![entry(0, 0), entry(2, 2)]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            CharacterIndex::from_entries(vec![entry(0, 1)]),
            Err(Error::InvalidArgument(_))
        ));
    }
}
