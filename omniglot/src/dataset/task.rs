use super::*;
use crate::{common::*, processor::Image};

/// An N-way K-shot classification episode drawn from a [MetaDataset].
///
/// The task only holds image descriptors. Images are resolved through the parent
/// dataset loader when a sample is accessed.
#[derive(Debug, Clone)]
pub struct Task<'a> {
    parent: &'a MetaDataset,
    samples: Vec<TaskSample>,
    character_ids: Vec<usize>,
    k_shot: usize,
}

impl<'a> Task<'a> {
    pub(crate) fn new(
        parent: &'a MetaDataset,
        samples: Vec<TaskSample>,
        character_ids: Vec<usize>,
        k_shot: usize,
    ) -> Self {
        debug_assert_eq!(samples.len(), character_ids.len() * k_shot);
        Self {
            parent,
            samples,
            character_ids,
            k_shot,
        }
    }

    /// The number of samples, that is N times K.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn n_way(&self) -> usize {
        self.character_ids.len()
    }

    pub fn k_shot(&self) -> usize {
        self.k_shot
    }

    pub fn samples(&self) -> &[TaskSample] {
        &self.samples
    }

    /// The global ids of the drawn characters, indexed by episode label.
    pub fn selected_character_ids(&self) -> &[usize] {
        &self.character_ids
    }

    pub fn episode_labels(&self) -> Vec<usize> {
        self.samples
            .iter()
            .map(|sample| sample.episode_label)
            .collect()
    }

    pub fn parent(&self) -> &'a MetaDataset {
        self.parent
    }

    /// Get the nth sample along with its image.
    pub fn get_sample(&self, index: usize) -> Result<(Image, &TaskSample)> {
        let sample = self.samples.get(index).ok_or(Error::Index {
            index,
            len: self.len(),
        })?;
        let image = self.parent.load_image(&sample.descriptor.path)?;
        Ok((image, sample))
    }

    /// Resolve every sample in order.
    pub fn iter(&self) -> impl Iterator<Item = Result<(Image, &TaskSample)>> + '_ {
        (0..self.len()).map(move |index| self.get_sample(index))
    }
}
