//! The uncached image loading implementation.

use super::*;
use crate::{
    common::*,
    profiling::{LoadProfile, LoadStage},
};

/// Decodes images on every request.
#[derive(Debug, Clone)]
pub struct OnDemandLoader {
    codec: Arc<dyn ImageCodec>,
}

impl OnDemandLoader {
    pub fn new(codec: Arc<dyn ImageCodec>) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &Arc<dyn ImageCodec> {
        &self.codec
    }

    /// Load an image as grayscale.
    ///
    /// * `path` - The image file path.
    /// * `size` - The output image size. The decoded size is kept if set to `None`.
    pub fn load(&self, path: &Path, size: Option<ImageSize>) -> Result<Image> {
        let mut profile = LoadProfile::start(path);

        let image = self.codec.decode(path)?;
        profile.finish_stage(LoadStage::Decode);

        let image = self.codec.to_grayscale(image);
        profile.finish_stage(LoadStage::Grayscale);

        let image = match size {
            Some(size) => {
                let image = self.codec.resize(image, size);
                profile.finish_stage(LoadStage::Resize);
                image
            }
            None => image,
        };

        profile.report();

        Ok(Arc::new(image))
    }
}

impl Default for OnDemandLoader {
    fn default() -> Self {
        Self::new(Arc::new(FileCodec::default()))
    }
}
