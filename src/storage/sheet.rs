//! Tabular stock sheets
//!
//! Two layouts are accepted, told apart by their headers:
//! a genotype layout with one column holding the external genotype string,
//! and a chromosome layout with one column per autosome (`Chromosome 2`,
//! `Chromosome 3`, ...). Header matching is case-insensitive and by keyword.
//! Columns for the X chromosome are ignored.

use super::{Sex, StockError, StockRecord};
use crate::genetics::ChromosomeId;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::io::Read;
use std::path::Path;

const NAME_KEYWORDS: [&str; 5] = ["stock number", "stock_number", "name", "stock_name", "id"];
const NOTES_KEYWORDS: [&str; 2] = ["notes", "note"];

/// Read stock records from a CSV file
pub fn read_stock_sheet_path(path: impl AsRef<Path>) -> Result<Vec<StockRecord>, StockError> {
    let file = std::fs::File::open(path.as_ref())?;
    read_stock_sheet(file)
}

/// Read stock records from CSV data with a header row
pub fn read_stock_sheet<R: Read>(reader: R) -> Result<Vec<StockRecord>, StockError> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect();

    let name_col = find_column(&headers, &NAME_KEYWORDS)
        .ok_or_else(|| StockError::MissingColumn("stock name".into()))?;
    let notes_col = find_column(&headers, &NOTES_KEYWORDS);

    let layout = if headers.iter().any(|h| h.contains("chromosome")) {
        Layout::Chromosomes(chromosome_columns(&headers))
    } else {
        let genotype = find_column(&headers, &["genotype"])
            .ok_or_else(|| StockError::MissingColumn("genotype".into()))?;
        Layout::Genotype {
            genotype,
            sex: find_column(&headers, &["sex"]),
        }
    };

    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let row_data = result?;
        let name = cell(&row_data, Some(name_col));
        if name.is_empty() {
            continue;
        }

        let mut record = match &layout {
            Layout::Genotype { genotype, sex } => {
                let mut record = StockRecord::new(name, cell(&row_data, Some(*genotype)));
                let sex = cell(&row_data, *sex);
                if !sex.is_empty() {
                    record.sex = Some(sex.parse::<Sex>()?);
                }
                record
            }
            Layout::Chromosomes(columns) => match chromosome_genotype(&row_data, columns) {
                Some(genotype) => StockRecord::new(name, genotype),
                None => {
                    // header row 1, data rows from 2
                    debug!("Sheet row {} has no chromosome data, skipped", row + 2);
                    continue;
                }
            },
        };

        let notes = cell(&row_data, notes_col);
        if !notes.is_empty() {
            record.notes = Some(notes.to_string());
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(StockError::EmptySheet);
    }
    Ok(records)
}

enum Layout {
    Genotype { genotype: usize, sex: Option<usize> },
    Chromosomes(Vec<(ChromosomeId, usize)>),
}

/// First column matching the earliest keyword in `keywords`
fn find_column(headers: &[String], keywords: &[&str]) -> Option<usize> {
    keywords
        .iter()
        .find_map(|k| headers.iter().position(|h| h.contains(k)))
}

fn chromosome_columns(headers: &[String]) -> Vec<(ChromosomeId, usize)> {
    let mut columns = Vec::new();
    for (i, header) in headers.iter().enumerate() {
        if !header.contains("chromosome") {
            continue;
        }
        if let Some(chrom) = ChromosomeId::ALL.into_iter().find(|c| header.contains(c.as_str())) {
            columns.push((chrom, i));
        }
    }
    columns
}

fn cell(row: &StringRecord, col: Option<usize>) -> &str {
    col.and_then(|c| row.get(c)).unwrap_or("")
}

/// External genotype string from per-chromosome cells. A single allele in a
/// cell means the chromosome is homozygous for it.
fn chromosome_genotype(row: &StringRecord, columns: &[(ChromosomeId, usize)]) -> Option<String> {
    let mut parts = Vec::new();
    for (chrom, col) in columns {
        let alleles: String = cell(row, Some(*col)).split_whitespace().collect();
        if alleles.is_empty() || alleles.eq_ignore_ascii_case("nan") {
            continue;
        }
        if alleles.contains('/') {
            parts.push(format!("{}:{}", chrom, alleles));
        } else {
            parts.push(format!("{}:{}/{}", chrom, alleles, alleles));
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
