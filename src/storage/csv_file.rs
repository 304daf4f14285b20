use crate::core::data::{MAX_ID, Product, ProductCollection};
use crate::core::traits::ProductStorage;
use crate::utils::error::{AppError, AppResult};
use std::path::PathBuf;
use tracing::{debug, info};

/// Header row written at the top of every sheet
pub const HEADERS: [&str; 4] = ["ID", "Name", "Processing time (hours)", "Time calculation"];

/// Spreadsheet-style store: one header row, then one row per product
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the sheet with only its header row
    fn initialize(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Persistence(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        info!(path = %self.path.display(), "creating new product sheet");
        self.write(&ProductCollection::default())
    }

    fn write(&self, collection: &ProductCollection) -> AppResult<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(HEADERS)
            .map_err(|e| AppError::Persistence(format!("Failed to write header row: {}", e)))?;

        for product in collection {
            writer
                .write_record([
                    product.id.to_string(),
                    product.name.clone(),
                    product.processing_time.to_string(),
                    product.time_calculation.clone(),
                ])
                .map_err(|e| {
                    AppError::Persistence(format!("Failed to write product {}: {}", product.id, e))
                })?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Persistence(format!("Failed to flush sheet: {}", e)))?;

        std::fs::write(&self.path, bytes).map_err(|e| {
            AppError::Persistence(format!(
                "Failed to write data file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Rows that are too short or carry an unusable ID are dropped
    ///
    /// Fields that are not valid UTF-8 are decoded lossily.
    fn parse_row(record: &csv::ByteRecord) -> Option<Product> {
        if record.len() < HEADERS.len() {
            return None;
        }

        let field = |index: usize| String::from_utf8_lossy(&record[index]).into_owned();

        let id = field(0)
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|id| (1..=MAX_ID).contains(id))?;
        let processing_time = field(2).trim().parse::<f64>().unwrap_or(0.0);

        Some(Product::new(id, field(1), processing_time, field(3)))
    }
}

impl ProductStorage for CsvStorage {
    fn load(&mut self) -> AppResult<ProductCollection> {
        if !self.path.exists() {
            self.initialize()?;
            return Ok(ProductCollection::default());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                AppError::Persistence(format!(
                    "Failed to open data file {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        let mut collection = ProductCollection::new();
        for (index, result) in reader.byte_records().enumerate() {
            let record = result
                .map_err(|e| AppError::Persistence(format!("Failed to read row: {}", e)))?;

            match Self::parse_row(&record) {
                Some(product) => collection.add(product),
                // +2: one for the header, one for 1-based row numbers
                None => debug!(row = index + 2, "skipping malformed row"),
            }
        }

        debug!(path = %self.path.display(), count = collection.len(), "loaded products");
        Ok(collection)
    }

    fn save(&mut self, collection: &ProductCollection) -> AppResult<()> {
        self.write(collection)?;
        debug!(path = %self.path.display(), count = collection.len(), "saved products");
        Ok(())
    }

    fn close(&mut self) -> AppResult<()> {
        // Every write opens and closes the file itself.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> ProductCollection {
        ProductCollection::from(vec![
            Product::new(1, "Тестовый продукт".to_string(), 1.5, "1.5".to_string()),
            Product::new(2, "Widget, large".to_string(), 2.0, "1 + 1".to_string()),
            Product::new(7, "Quote \"test\"".to_string(), 0.1, "0.1+abc".to_string()),
        ])
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut storage = CsvStorage::new(dir.path().join("database.csv"));

        storage.save(&sample()).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded, sample());
        assert!(storage.close().is_ok());
    }

    #[test]
    fn test_save_of_load_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.csv");
        let mut storage = CsvStorage::new(&path);

        storage.save(&sample()).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        let loaded = storage.load().unwrap();
        storage.save(&loaded).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(storage.load().unwrap(), loaded);
    }

    #[test]
    fn test_load_missing_file_creates_sheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("database.csv");
        let mut storage = CsvStorage::new(&path);

        let loaded = storage.load().unwrap();

        assert!(loaded.is_empty());
        assert!(path.exists());
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), HEADERS.join(","));
    }

    #[test]
    fn test_load_skips_bad_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.csv");
        std::fs::write(
            &path,
            "ID,Name,Processing time (hours),Time calculation\n\
             1,Good,2.5,2.5\n\
             abc,Bad id,1,1\n\
             0,Zero id,1,1\n\
             3,Short row\n\
             4,Bad time,oops,1+1\n",
        )
        .unwrap();

        let loaded = CsvStorage::new(&path).load().unwrap();

        let ids: Vec<u64> = loaded.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(loaded.find(4).unwrap().processing_time, 0.0);
        assert_eq!(loaded.find(4).unwrap().time_calculation, "1+1");
    }

    #[test]
    fn test_load_keeps_rows_around_badly_encoded_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.csv");
        let mut content =
            b"ID,Name,Processing time (hours),Time calculation\n1,Good,1,1\n2,".to_vec();
        // "Прод" in windows-1251
        content.extend_from_slice(&[0xCF, 0xF0, 0xEE, 0xE4]);
        content.extend_from_slice(b",2,2\n3,Also good,3,3\n");
        std::fs::write(&path, content).unwrap();

        let loaded = CsvStorage::new(&path).load().unwrap();

        let ids: Vec<u64> = loaded.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(loaded.find(1).unwrap().name, "Good");
        assert_eq!(loaded.find(3).unwrap().name, "Also good");
        assert!(loaded.find(2).unwrap().name.contains('\u{FFFD}'));
        assert_eq!(loaded.find(2).unwrap().processing_time, 2.0);
    }

    #[test]
    fn test_load_skips_ids_beyond_max() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.csv");
        std::fs::write(
            &path,
            format!(
                "ID,Name,Processing time (hours),Time calculation\n\
                 {},Too big,1,1\n\
                 {},Largest,1,1\n",
                u64::MAX,
                MAX_ID
            ),
        )
        .unwrap();

        let loaded = CsvStorage::new(&path).load().unwrap();

        let ids: Vec<u64> = loaded.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![MAX_ID]);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does").join("not").join("exist.csv");
        let mut storage = CsvStorage::new(path);

        let result = storage.save(&ProductCollection::default());
        assert!(matches!(result, Err(AppError::Persistence(_))));
    }
}
