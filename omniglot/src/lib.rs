//! Few-shot episode sampling over hierarchical image datasets.
//!
//! The dataset is laid out as `root/<alphabet>/<character>/<image>`. A
//! [CharacterIndex](dataset::CharacterIndex) is built once from that tree, wrapped in a
//! [MetaDataset](dataset::MetaDataset), optionally split into train and test views, and
//! then sampled repeatedly into N-way K-shot [Task](dataset::Task)s whose images are
//! resolved lazily through a shared [ImageCache](processor::ImageCache).

mod common;
pub mod dataset;
pub mod error;
pub mod processor;
pub mod profiling;
pub mod random;
#[cfg(test)]
mod testing;

pub use error::{Error, Result};
