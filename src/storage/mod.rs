//! Product storage backends
//!
//! Every backend implements [`ProductStorage`] and persists whole collections.

pub mod csv_file;
pub mod memory;
pub mod toml_file;

pub use csv_file::CsvStorage;
pub use memory::MemoryStorage;
pub use toml_file::TomlStorage;

use crate::config::{Config, StorageKind};
use crate::core::traits::ProductStorage;

/// Open the backend selected in the configuration
pub fn open(config: &Config) -> Box<dyn ProductStorage> {
    let path = config.general.data_file.clone();
    match config.general.storage {
        StorageKind::Csv => Box::new(CsvStorage::new(path)),
        StorageKind::Toml => Box::new(TomlStorage::new(path)),
    }
}
