use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use super::cities::is_german_city;
use super::model::{
    CityCostRecord, CityCostTable, COL_CINEMA, COL_CITY, COL_COST_INDEX, COL_MEAL, COL_RENT,
    COL_TRANSPORT_PASS, REQUIRED_COLUMNS,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a dataset is rejected as a whole. Any of these aborts the load;
/// there is never a partially loaded table.
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("row {row}: city '{city}' appears more than once")]
    DuplicateCity { row: usize, city: String },

    #[error("row {row}: column '{column}' of '{city}' is not a finite number")]
    NonFinite {
        row: usize,
        city: String,
        column: &'static str,
    },

    #[error("no German cities found in dataset")]
    NoGermanCities,
}

// ---------------------------------------------------------------------------
// Source row
// ---------------------------------------------------------------------------

/// One allow-listed source row. Extra columns in the file are ignored.
#[derive(Debug, Deserialize)]
struct SourceRow {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Cost_index")]
    cost_index: f64,
    #[serde(rename = "Meal, Inexpensive Restaurant")]
    meal: f64,
    #[serde(rename = "Monthly Pass (Regular Price)")]
    transport_pass: f64,
    #[serde(rename = "Apartment (1 bedroom) Outside of Centre")]
    rent: f64,
    #[serde(rename = "Cinema, International Release, 1 Seat")]
    cinema: f64,
}

impl SourceRow {
    fn check_finite(&self, row: usize) -> Result<(), DatasetError> {
        let fields = [
            (COL_COST_INDEX, self.cost_index),
            (COL_MEAL, self.meal),
            (COL_TRANSPORT_PASS, self.transport_pass),
            (COL_RENT, self.rent),
            (COL_CINEMA, self.cinema),
        ];
        match fields.into_iter().find(|(_, v)| !v.is_finite()) {
            Some((column, _)) => Err(DatasetError::NonFinite {
                row,
                city: self.city.clone(),
                column,
            }),
            None => Ok(()),
        }
    }

    fn into_record(self) -> CityCostRecord {
        CityCostRecord::new(
            self.city,
            self.cost_index,
            self.meal,
            self.transport_pass,
            self.rent,
            self.cinema,
        )
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the cost-of-living CSV at `path` and reduce it to the German
/// working set with the derived total cost.
pub fn load_file(path: &Path) -> Result<CityCostTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening dataset {}", path.display()))?;
    load_reader(file).with_context(|| format!("loading {}", path.display()))
}

/// Same as [`load_file`] for any CSV byte source.
///
/// Rows outside the allow-list are dropped before their values are looked
/// at, so malformed foreign rows do not fail the load.
pub fn load_reader<R: Read>(reader: R) -> Result<CityCostTable> {
    // Header names are matched byte-for-byte; only data fields are trimmed.
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Fields)
        .from_reader(reader);

    let headers = reader.headers().context("reading CSV headers")?.clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    let city_idx = match headers.iter().position(|h| h == COL_CITY) {
        Some(idx) if missing.is_empty() => idx,
        _ => return Err(DatasetError::MissingColumns(missing).into()),
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::new();
    let mut discarded = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        // 1-based data row, header excluded
        let row = row_no + 1;
        let record = result.with_context(|| format!("CSV row {row}"))?;

        let city = record.get(city_idx).unwrap_or("");
        if !is_german_city(city) {
            discarded += 1;
            continue;
        }
        if !seen.insert(city.to_string()) {
            return Err(DatasetError::DuplicateCity {
                row,
                city: city.to_string(),
            }
            .into());
        }

        let source: SourceRow = record
            .deserialize(Some(&headers))
            .with_context(|| format!("row {row}: invalid values for '{city}'"))?;
        source.check_finite(row)?;
        records.push(source.into_record());
    }

    log::debug!("Discarded {discarded} rows outside the allow-list");

    if records.is_empty() {
        return Err(DatasetError::NoGermanCities.into());
    }

    let table = CityCostTable::from_records(records);
    log::info!(
        "Loaded {} German cities: {:?}",
        table.len(),
        table.city_names().collect::<Vec<_>>()
    );
    Ok(table)
}
