//! The memory caching implementation.

use super::*;
use crate::common::*;
use dashmap::{mapref::entry::Entry, DashMap};

type CacheKey = (PathBuf, Option<ImageSize>);

/// Memoizes decoded images by file path and target size.
///
/// Entries are never evicted. A failed load is not stored, so a later request
/// for the same key decodes again.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct ImageCache {
    loader: OnDemandLoader,
    #[derivative(Debug = "ignore")]
    cache: DashMap<CacheKey, Image>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

/// Counters of an [ImageCache].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: usize,
    pub misses: usize,
}

impl ImageCache {
    /// Build a cache in front of the given codec.
    pub fn new(codec: Arc<dyn ImageCodec>) -> Self {
        Self::with_loader(OnDemandLoader::new(codec))
    }

    pub fn with_loader(loader: OnDemandLoader) -> Self {
        Self {
            loader,
            cache: DashMap::new(),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Load the image from cache, or decode and store it on cache miss.
    ///
    /// The same [Image] instance is returned for every request with an equal key.
    pub fn get_or_load(&self, path: impl AsRef<Path>, size: Option<ImageSize>) -> Result<Image> {
        let path = path.as_ref();
        let key = (path.to_owned(), size);

        if let Some(image) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!("cache hit for '{}'", path.display());
            return Ok(image.clone());
        }

        // the vacant entry keeps its shard write-locked through the decode, so a key is
        // decoded at most once even under concurrent access, at the cost of blocking
        // other keys of the same shard meanwhile
        let image = match self.cache.entry(key) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                trace!("cache miss for '{}'", path.display());
                let image = self.loader.load(path, size)?;
                entry.insert(image.clone());
                image
            }
        };

        Ok(image)
    }

    pub fn contains(&self, path: impl AsRef<Path>, size: Option<ImageSize>) -> bool {
        self.cache.contains_key(&(path.as_ref().to_owned(), size))
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn loader(&self) -> &OnDemandLoader {
        &self.loader
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::with_loader(OnDemandLoader::default())
    }
}
