pub use crate::error::{Error, Result};
pub(crate) use crate::error::ensure_arg;
pub use derivative::Derivative;
pub use image::{imageops::FilterType, DynamicImage, GrayImage, ImageError};
pub use itertools::{iproduct, Itertools as _};
pub use log::{debug, info, trace, warn};
pub use rand::prelude::*;
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::HashSet,
    convert::TryFrom,
    fmt,
    fmt::Debug,
    io, iter,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};
