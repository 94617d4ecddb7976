use super::*;
use crate::{
    common::*,
    processor::{Image, ImageLoader, ImageSize},
    random::{validate_draw, RandomSource},
};

/// A view over characters from which N-way K-shot tasks are drawn.
///
/// Datasets derived by [split](MetaDataset::split) share the image loader with
/// their parent, so a decoded image is reused across train, test and task
/// boundaries.
#[derive(Debug, Clone)]
pub struct MetaDataset {
    characters: Vec<Arc<CharacterEntry>>,
    loader: ImageLoader,
    image_size: Option<ImageSize>,
}

impl MetaDataset {
    /// Build a dataset over all characters in the index.
    ///
    /// * `index` - The characters of the dataset.
    /// * `loader` - Resolves image files, with or without caching.
    /// * `image_size` - The size images are resized to. Images keep their decoded size if set to `None`.
    pub fn new(index: CharacterIndex, loader: ImageLoader, image_size: Option<ImageSize>) -> Self {
        let characters = index.into_entries().into_iter().map(Arc::new).collect();
        Self::from_view(characters, loader, image_size)
    }

    /// Scan the dataset directory and build a dataset over it.
    pub fn open(
        root: impl AsRef<Path>,
        extension: &str,
        loader: ImageLoader,
        image_size: Option<ImageSize>,
    ) -> Result<Self> {
        let index = CharacterIndex::load(root, extension)?;
        Ok(Self::new(index, loader, image_size))
    }

    pub(crate) fn from_view(
        characters: Vec<Arc<CharacterEntry>>,
        loader: ImageLoader,
        image_size: Option<ImageSize>,
    ) -> Self {
        Self {
            characters,
            loader,
            image_size,
        }
    }

    /// Build a dataset over a subset of the characters of this one, sharing its loader.
    pub(crate) fn view(&self, indices: &[usize]) -> Self {
        let characters = indices
            .iter()
            .map(|&index| self.characters[index].clone())
            .collect();
        Self::from_view(characters, self.loader.clone(), self.image_size)
    }

    /// The number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get_character(&self, index: usize) -> Result<&CharacterEntry> {
        self.characters
            .get(index)
            .map(|entry| entry.as_ref())
            .ok_or(Error::Index {
                index,
                len: self.len(),
            })
    }

    pub fn characters(&self) -> impl Iterator<Item = &CharacterEntry> + '_ {
        self.characters.iter().map(|entry| entry.as_ref())
    }

    pub fn character_ids(&self) -> Vec<usize> {
        self.characters.iter().map(|entry| entry.id).collect()
    }

    pub fn num_images(&self) -> usize {
        self.characters.iter().map(|entry| entry.len()).sum()
    }

    pub fn image_size(&self) -> Option<ImageSize> {
        self.image_size
    }

    pub fn loader(&self) -> &ImageLoader {
        &self.loader
    }

    /// Resolve an image file through the loader at the dataset image size.
    pub fn load_image(&self, path: impl AsRef<Path>) -> Result<Image> {
        self.loader.load(path.as_ref(), self.image_size)
    }

    /// Draw an N-way K-shot task.
    ///
    /// The `n_way` characters are drawn without replacement and labeled `0..n_way`
    /// in draw order. Then `k_shot` images are drawn without replacement from each
    /// of them. Samples are grouped by label, so that the samples of label `i`
    /// occupy `i * k_shot..(i + 1) * k_shot`.
    ///
    /// No image is loaded until a sample of the task is accessed.
    pub fn sample_task<R>(&self, rng: &mut R, n_way: usize, k_shot: usize) -> Result<Task<'_>>
    where
        R: RandomSource + ?Sized,
    {
        ensure_arg!(n_way > 0, "n_way must be positive");
        ensure_arg!(k_shot > 0, "k_shot must be positive");

        let num_characters = self.len();
        if n_way > num_characters {
            return Err(Error::InsufficientCharacters {
                requested: n_way,
                available: num_characters,
            });
        }

        let selected = rng.choose_without_replacement(num_characters, n_way);
        validate_draw(&selected, n_way, num_characters)?;

        let mut character_ids = Vec::with_capacity(n_way);
        // k_shot is only bounded by the per-character check below
        let mut samples = vec![];

        for (episode_label, index) in selected.into_iter().enumerate() {
            let entry = &self.characters[index];
            let available = entry.len();

            if k_shot > available {
                return Err(Error::InsufficientSamples {
                    character_id: entry.id,
                    requested: k_shot,
                    available,
                });
            }

            let picks = rng.choose_without_replacement(available, k_shot);
            validate_draw(&picks, k_shot, available)?;

            samples.extend(picks.into_iter().map(|pick| TaskSample {
                descriptor: entry.descriptors[pick].clone(),
                episode_label,
            }));
            character_ids.push(entry.id);
        }

        debug!(
            "sampled {}-way {}-shot task from characters {:?}",
            n_way, k_shot, character_ids
        );

        Ok(Task::new(self, samples, character_ids, k_shot))
    }

    /// Partition the characters into train and test datasets.
    ///
    /// See [split](super::split).
    pub fn split<R>(&self, rng: &mut R, validation_fraction: f64) -> Result<Split>
    where
        R: RandomSource + ?Sized,
    {
        split(self, rng, validation_fraction)
    }
}
