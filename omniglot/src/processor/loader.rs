use super::*;
use crate::common::*;

/// The image source of a dataset, either cached or decoding on every access.
#[derive(Debug, Clone)]
pub enum ImageLoader {
    OnDemand(OnDemandLoader),
    Cached(Arc<ImageCache>),
}

impl ImageLoader {
    /// Build an uncached loader with the given codec.
    pub fn on_demand(codec: Arc<dyn ImageCodec>) -> Self {
        Self::OnDemand(OnDemandLoader::new(codec))
    }

    /// Build a loader backed by a fresh cache with the given codec.
    pub fn cached(codec: Arc<dyn ImageCodec>) -> Self {
        Self::Cached(Arc::new(ImageCache::new(codec)))
    }

    pub fn load(&self, path: &Path, size: Option<ImageSize>) -> Result<Image> {
        match self {
            Self::OnDemand(loader) => loader.load(path, size),
            Self::Cached(cache) => cache.get_or_load(path, size),
        }
    }

    pub fn cache(&self) -> Option<&Arc<ImageCache>> {
        match self {
            Self::OnDemand(_) => None,
            Self::Cached(cache) => Some(cache),
        }
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::Cached(Arc::new(ImageCache::default()))
    }
}

impl From<Arc<ImageCache>> for ImageLoader {
    fn from(cache: Arc<ImageCache>) -> Self {
        Self::Cached(cache)
    }
}

impl From<OnDemandLoader> for ImageLoader {
    fn from(loader: OnDemandLoader) -> Self {
        Self::OnDemand(loader)
    }
}
