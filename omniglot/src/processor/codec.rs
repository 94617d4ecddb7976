use crate::common::*;

/// A decoded single-channel image shared between the cache and its readers.
pub type Image = Arc<GrayImage>;

/// The target image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        ensure_arg!(
            width > 0 && height > 0,
            "image size must be positive, but get {}x{}",
            width,
            height
        );
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl TryFrom<(u32, u32)> for ImageSize {
    type Error = Error;

    fn try_from((width, height): (u32, u32)) -> Result<Self> {
        Self::new(width, height)
    }
}

impl From<ImageSize> for (u32, u32) {
    fn from(size: ImageSize) -> Self {
        (size.width, size.height)
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The capability to turn an image file into pixels.
///
/// Only [decode](ImageCodec::decode) must be provided. The grayscale conversion and
/// resizing default to the `image` crate implementations.
pub trait ImageCodec
where
    Self: Debug + Send + Sync,
{
    /// Read and decode the image file at `path`.
    fn decode(&self, path: &Path) -> Result<DynamicImage>;

    /// Convert the decoded image to a single luma channel.
    fn to_grayscale(&self, image: DynamicImage) -> GrayImage {
        image.to_luma8()
    }

    /// Resize the image to exactly `size`, ignoring the aspect ratio.
    fn resize(&self, image: GrayImage, size: ImageSize) -> GrayImage {
        if image.dimensions() == (size.width(), size.height()) {
            return image;
        }
        image::imageops::resize(&image, size.width(), size.height(), FilterType::CatmullRom)
    }
}

/// The codec that reads image files from the filesystem.
#[derive(Debug, Clone)]
pub struct FileCodec {
    filter: FilterType,
}

impl FileCodec {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Default for FileCodec {
    fn default() -> Self {
        Self::new(FilterType::CatmullRom)
    }
}

impl ImageCodec for FileCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        image::open(path).map_err(|source| Error::Decode {
            path: path.to_owned(),
            source,
        })
    }

    fn resize(&self, image: GrayImage, size: ImageSize) -> GrayImage {
        if image.dimensions() == (size.width(), size.height()) {
            return image;
        }
        image::imageops::resize(&image, size.width(), size.height(), self.filter)
    }
}
