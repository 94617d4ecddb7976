//! The sampling program for the omniglot crate.

pub mod config;

use anyhow::{Context, Result};
use config::{Config, DatasetConfig, EpisodeConfig, SplitConfig};
use log::info;
use omniglot::{
    dataset::{MetaDataset, Split},
    processor::{FileCodec, ImageLoader},
    random::RngSource,
};
use std::sync::Arc;

/// Build the dataset described by the configuration.
pub fn load_dataset(config: &DatasetConfig) -> Result<MetaDataset> {
    let DatasetConfig {
        ref root,
        ref extension,
        image_size,
        cache,
    } = *config;

    let codec = Arc::new(FileCodec::default());
    let loader = if cache {
        ImageLoader::cached(codec)
    } else {
        ImageLoader::on_demand(codec)
    };

    let dataset = MetaDataset::open(root, extension, loader, image_size)
        .with_context(|| format!("failed to load dataset at '{}'", root.display()))?;
    Ok(dataset)
}

/// The entry of the sampling program.
pub fn start(config: &Config) -> Result<()> {
    let Config {
        ref dataset,
        split: SplitConfig {
            validation_fraction,
        },
        episode: EpisodeConfig {
            n_way,
            k_shot,
            num_tasks,
        },
        seed,
    } = *config;

    let mut rng = match seed {
        Some(seed) => RngSource::seed_from_u64(seed),
        None => RngSource::from_entropy(),
    };

    let dataset = load_dataset(dataset)?;
    let Split { train, test } = dataset.split(&mut rng, validation_fraction.raw())?;
    info!("all\t{} characters", dataset.len());
    info!("train\t{} characters", train.len());
    info!("test\t{} characters", test.len());

    for task_index in 0..num_tasks {
        let task = train.sample_task(&mut rng, n_way.get(), k_shot.get())?;
        info!(
            "task {}: {} samples from characters {:?}",
            task_index,
            task.len(),
            task.selected_character_ids()
        );

        for result in task.iter() {
            let (image, sample) = result?;
            info!(
                "- label {}\t{}x{}\t{}",
                sample.episode_label,
                image.width(),
                image.height(),
                sample.descriptor.path.display()
            );
        }
    }

    if let Some(cache) = dataset.loader().cache() {
        let stats = cache.stats();
        info!(
            "cache: {} entries, {} hits, {} misses",
            stats.entries, stats.hits, stats.misses
        );
    }

    Ok(())
}
