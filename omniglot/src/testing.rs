//! Fixtures shared by unit tests.

use crate::{
    common::*,
    dataset::{CharacterEntry, CharacterIndex, ImageDescriptor, MetaDataset},
    processor::{ImageCodec, ImageLoader, ImageSize},
};
use std::sync::Mutex;

/// A codec producing blank images and recording every decoded path.
#[derive(Debug, Default)]
pub struct CountingCodec {
    decoded: Mutex<Vec<PathBuf>>,
}

impl CountingCodec {
    pub fn total(&self) -> usize {
        self.decoded.lock().unwrap().len()
    }

    pub fn count(&self, path: impl AsRef<Path>) -> usize {
        let path = path.as_ref();
        self.decoded
            .lock()
            .unwrap()
            .iter()
            .filter(|decoded| *decoded == path)
            .count()
    }
}

impl ImageCodec for CountingCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        self.decoded.lock().unwrap().push(path.to_owned());
        if path.ends_with("broken.png") {
            return Err(Error::Decode {
                path: path.to_owned(),
                source: ImageError::IoError(io::Error::new(
                    io::ErrorKind::NotFound,
                    "no such file",
                )),
            });
        }
        Ok(DynamicImage::new_luma8(64, 64))
    }
}

/// Build the in-memory entries `alphabet{a}/character{c}/{i}.png`, where the
/// number of images of each character is listed in `images_per_character`.
pub fn synthetic_index(alphabets: usize, images_per_character: &[usize]) -> CharacterIndex {
    let entries = images_per_character
        .iter()
        .enumerate()
        .map(|(id, &num_images)| {
            let alphabet = format!("alphabet{}", id % alphabets.max(1));
            let name = format!("character{:02}", id);
            let descriptors = (0..num_images)
                .map(|image| ImageDescriptor {
                    path: Path::new(&alphabet)
                        .join(&name)
                        .join(format!("{}.png", image)),
                    character_id: id,
                })
                .collect();
            CharacterEntry {
                id,
                alphabet,
                name,
                descriptors,
            }
        })
        .collect();
    CharacterIndex::from_entries(entries).unwrap()
}

/// A dataset over [synthetic_index] backed by a [CountingCodec].
pub fn synthetic_dataset(
    images_per_character: &[usize],
    cached: bool,
) -> (MetaDataset, Arc<CountingCodec>) {
    let codec = Arc::new(CountingCodec::default());
    let loader = if cached {
        ImageLoader::cached(codec.clone())
    } else {
        ImageLoader::on_demand(codec.clone())
    };
    let size = ImageSize::new(28, 28).unwrap();
    let dataset = MetaDataset::new(synthetic_index(2, images_per_character), loader, Some(size));
    (dataset, codec)
}
