//! Local stock catalog
//!
//! JSON-backed store of laboratory stocks. Records keep the external genotype
//! string; it is parsed and validated when a record is added and again when
//! the catalog hands stocks to the planner. Stock sheets exported from a
//! spreadsheet can be imported into a catalog.

mod sheet;

pub use sheet::{read_stock_sheet, read_stock_sheet_path};

use crate::genetics::{parse_genotype, validate_stock_genotype, Genotype, GenotypeError};
use crate::planner::Stock;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum StockError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid genotype for stock '{stock}': {source}")]
    InvalidGenotype {
        stock: String,
        #[source]
        source: GenotypeError,
    },

    #[error("Stock already exists: {0}")]
    DuplicateName(String),

    #[error("Stock not found: {0}")]
    NotFound(String),

    #[error("Unknown sex: {0} (expected F or M)")]
    UnknownSex(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Stock sheet has no {0} column")]
    MissingColumn(String),

    #[error("Stock sheet contains no stocks")]
    EmptySheet,
}

/// Biological sex recorded with a stock; never used as a breeding role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl FromStr for Sex {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f" | "female" => Ok(Sex::Female),
            "m" | "male" => Ok(Sex::Male),
            _ => Err(StockError::UnknownSex(s.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => f.write_str("F"),
            Sex::Male => f.write_str("M"),
        }
    }
}

/// One row of the stock database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub name: String,
    #[serde(default)]
    pub sex: Option<Sex>,
    /// External form, e.g. `2:CyO/+ 3:+/+ 4:+/+`
    pub genotype: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl StockRecord {
    pub fn new(name: impl Into<String>, genotype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sex: None,
            genotype: genotype.into(),
            notes: None,
        }
    }

    /// Parse and validate the genotype string
    pub fn parse_genotype(&self) -> Result<Genotype, StockError> {
        let invalid = |source| StockError::InvalidGenotype {
            stock: self.name.clone(),
            source,
        };
        let genotype = parse_genotype(&self.genotype).map_err(invalid)?;
        validate_stock_genotype(&genotype).map_err(invalid)?;
        Ok(genotype)
    }

    pub fn to_stock(&self) -> Result<Stock, StockError> {
        Ok(Stock::new(self.name.clone(), self.parse_genotype()?))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub created_at: DateTime<Utc>,
    pub total_stocks_ever: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StockCatalog {
    stocks: BTreeMap<String, StockRecord>,
    #[serde(skip)]
    path: PathBuf,
    pub metadata: CatalogMetadata,
}

impl StockCatalog {
    /// Empty catalog that will be written to `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            stocks: BTreeMap::new(),
            path: path.as_ref().to_path_buf(),
            metadata: CatalogMetadata {
                created_at: Utc::now(),
                total_stocks_ever: 0,
            },
        }
    }

    /// Load the catalog at `path`, or start an empty one if the file is absent
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StockError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new(path));
        }
        let data = std::fs::read_to_string(path)?;
        let mut catalog: Self = serde_json::from_str(&data)?;
        catalog.path = path.to_path_buf();
        info!("Loaded {} stocks from {}", catalog.stocks.len(), path.display());
        Ok(catalog)
    }

    pub fn save(&self) -> Result<(), StockError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        info!("Saved {} stocks to {}", self.stocks.len(), self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a record after validating its genotype
    pub fn add(&mut self, record: StockRecord) -> Result<(), StockError> {
        if self.stocks.contains_key(&record.name) {
            return Err(StockError::DuplicateName(record.name));
        }
        record.parse_genotype()?;
        self.metadata.total_stocks_ever += 1;
        self.stocks.insert(record.name.clone(), record);
        Ok(())
    }

    /// Add every record of a CSV stock sheet; stops at the first rejected record
    pub fn import_sheet(&mut self, path: impl AsRef<Path>) -> Result<usize, StockError> {
        let records = read_stock_sheet_path(path.as_ref())?;
        let count = records.len();
        for record in records {
            self.add(record)?;
        }
        info!("Imported {} stocks from {}", count, path.as_ref().display());
        Ok(count)
    }

    pub fn get(&self, name: &str) -> Option<&StockRecord> {
        self.stocks.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Result<StockRecord, StockError> {
        self.stocks
            .remove(name)
            .ok_or_else(|| StockError::NotFound(name.to_string()))
    }

    /// Records sorted by name
    pub fn list(&self) -> Vec<&StockRecord> {
        self.stocks.values().collect()
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Every stock as planner input; a single invalid record fails the whole call
    pub fn to_stocks(&self) -> Result<Vec<Stock>, StockError> {
        self.stocks
            .values()
            .map(|record| {
                record.to_stock().map_err(|e| {
                    warn!("Rejected stock '{}': {}", record.name, e);
                    e
                })
            })
            .collect()
    }

    pub fn summary(&self) -> String {
        let balanced = self
            .stocks
            .values()
            .filter_map(|r| r.parse_genotype().ok())
            .filter(crate::genetics::allowed_as_female_parent)
            .count();
        format!(
            "StockCatalog '{}' | {} stocks | {} female-eligible",
            self.path.display(),
            self.stocks.len(),
            balanced
        )
    }
}
