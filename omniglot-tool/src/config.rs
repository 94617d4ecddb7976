//! Sampling program configuration format.

use anyhow::Result;
use noisy_float::prelude::*;
use omniglot::{dataset::DEFAULT_IMAGE_EXTENSION, processor::ImageSize};
use serde::{Deserialize, Serialize};
use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

/// The main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub split: SplitConfig,
    #[serde(default)]
    pub episode: EpisodeConfig,
    /// The random seed. The generator is seeded from entropy if unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = std::fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}

/// Dataset options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// The directory containing one subdirectory per alphabet.
    pub root: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
    /// The `[width, height]` images are resized to, or null to keep the original size.
    #[serde(default = "default_image_size")]
    pub image_size: Option<ImageSize>,
    #[serde(default = "default_cache")]
    pub cache: bool,
}

/// Train/test split options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub validation_fraction: R64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            validation_fraction: r64(0.1),
        }
    }
}

/// Task sampling options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeConfig {
    pub n_way: NonZeroUsize,
    pub k_shot: NonZeroUsize,
    pub num_tasks: usize,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            n_way: NonZeroUsize::new(5).unwrap(),
            k_shot: NonZeroUsize::new(1).unwrap(),
            num_tasks: 1,
        }
    }
}

fn default_extension() -> String {
    DEFAULT_IMAGE_EXTENSION.to_string()
}

fn default_image_size() -> Option<ImageSize> {
    ImageSize::new(28, 28).ok()
}

fn default_cache() -> bool {
    true
}
