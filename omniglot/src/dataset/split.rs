use super::*;
use crate::{
    common::*,
    random::{validate_draw, RandomSource},
};

/// The disjoint train and test views produced by [split].
#[derive(Debug, Clone)]
pub struct Split {
    pub train: MetaDataset,
    pub test: MetaDataset,
}

/// Partition the characters of a dataset into train and test datasets.
///
/// The character positions are shuffled by the random source. The last
/// `floor(validation_fraction * len)` shuffled characters form the test set and the
/// rest form the train set. Both sets share the loader and the image size of the
/// parent. The sets are disjoint, but no ordering of the ids is implied.
pub fn split<R>(dataset: &MetaDataset, rng: &mut R, validation_fraction: f64) -> Result<Split>
where
    R: RandomSource + ?Sized,
{
    ensure_arg!(
        (0.0..1.0).contains(&validation_fraction),
        "validation_fraction must be in range [0, 1), but get {}",
        validation_fraction
    );

    let len = dataset.len();
    let num_test = (validation_fraction * len as f64).floor() as usize;
    let num_train = len - num_test;
    ensure_arg!(
        num_train > 0,
        "cannot split a dataset with {} characters into a non-empty train set",
        len
    );

    let permutation = rng.random_permutation(len);
    validate_draw(&permutation, len, len)?;
    let (train_indices, test_indices) = permutation.split_at(num_train);

    debug!(
        "split {} characters into {} train and {} test characters",
        len, num_train, num_test
    );

    Ok(Split {
        train: dataset.view(train_indices),
        test: dataset.view(test_indices),
    })
}
