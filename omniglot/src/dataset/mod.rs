//! Character indexing and episode sampling.

mod index;
mod meta;
mod record;
mod split;
mod task;

pub use index::*;
pub use meta::*;
pub use record::*;
pub use split::*;
pub use task::*;
