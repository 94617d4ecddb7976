//! Image decoding and caching.

mod codec;
mod loader;
mod mem_cache;
mod on_demand;

pub use codec::*;
pub use loader::*;
pub use mem_cache::*;
pub use on_demand::*;
