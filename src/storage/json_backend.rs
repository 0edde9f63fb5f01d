use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::{LedgerError, Result};
use crate::ledger::Transaction;
use crate::utils;

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

/// Stores the transaction sequence as a pretty-printed JSON array at a
/// single file path. Writes go through a temp file and rename so a failed
/// save never corrupts the existing data.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens storage at the managed data file inside the application data
    /// directory (`~/.finance_core`, or `$FINANCE_CORE_HOME` when set).
    pub fn new_default() -> Result<Self> {
        let dir = utils::app_data_dir();
        utils::ensure_dir(&dir)?;
        Ok(Self::new(utils::data_file()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let transactions: Vec<Transaction> = serde_json::from_str(&data).map_err(|err| {
            LedgerError::Storage(format!(
                "malformed ledger data in `{}`: {}",
                self.path.display(),
                err
            ))
        })?;
        Ok(transactions)
    }

    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let json = serde_json::to_string_pretty(transactions)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "ledger saved"
        );
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        utils::ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
