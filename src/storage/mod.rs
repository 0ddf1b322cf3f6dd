//! Roster persistence.
//!
//! [`RecordStore`] is the seam; [`FlatFileStore`] is the production backend
//! and [`MemoryStore`] the embedded/test one. Both share the line codec in
//! [`codec`].

pub mod codec;
mod flat_file;
mod memory;
mod traits;

pub use flat_file::FlatFileStore;
pub use memory::MemoryStore;
pub use traits::{Loaded, RecordStore, StorageError};
