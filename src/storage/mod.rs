// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::extractors::{Sections, Table};
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves every extracted (title, body) pair, in document order, as JSON.
    /// The full sequence is written, not the collapsed mapping, so repeated
    /// titles survive on disk.
    pub fn save_sections(&self, stem: &str, sections: &Sections) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{stem}_sections.json"));

        let entries: Vec<serde_json::Value> = sections
            .iter()
            .map(|section| {
                serde_json::json!({
                    "title": section.title,
                    "body": section.body,
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json)?;

        tracing::info!("Saved {} sections to {}", sections.len(), file_path.display());
        Ok(file_path)
    }

    /// Saves one table as delimited text. Rows of differing lengths are
    /// written as-is (the writer runs in flexible mode), and cells containing
    /// delimiters or quotes are quoted by the csv crate.
    pub fn save_table_csv(
        &self,
        stem: &str,
        index: usize,
        table: &Table,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{stem}_table{index}.csv"));

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&file_path)?;
        for row in table.rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;

        tracing::info!(
            "Saved table ({} rows) to {}",
            table.len(),
            file_path.display()
        );
        Ok(file_path)
    }

    /// Saves metadata about an extraction run in JSON format
    pub fn save_run_metadata(
        &self,
        stem: &str,
        source: &Path,
        section_count: usize,
        table_count: usize,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{stem}_meta.json"));

        let metadata = serde_json::json!({
            "source": source.display().to_string(),
            "section_count": section_count,
            "table_count": table_count,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}
