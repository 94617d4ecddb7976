use image::{GrayImage, Luma};
use std::{fs, path::Path};

/// Write `root/alphabet{a}/character{c}/{a}{c}_{i}.png` images of 64x64 pixels. The pixel
/// value encodes the image position so that distinct files decode differently.
pub fn write_dataset(root: &Path, alphabets: usize, characters: usize, images: usize) {
    for a in 0..alphabets {
        for c in 0..characters {
            let dir = root
                .join(format!("alphabet{}", a))
                .join(format!("character{:02}", c));
            fs::create_dir_all(&dir).unwrap();

            for i in 0..images {
                let value = (a * characters * images + c * images + i) as u8;
                GrayImage::from_pixel(64, 64, Luma([value]))
                    .save(dir.join(format!("{}{}_{:02}.png", a, c, i)))
                    .unwrap();
            }
        }
    }
}
