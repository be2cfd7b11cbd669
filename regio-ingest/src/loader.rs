//! Delimited-text loader.
//!
//! Source rows are `code,name,level,parent_code,type` with two optional
//! trailing columns, `avg_house_price` and `employment_rate`. The loader's
//! job is to hand the hierarchy builder an *ordered* sequence of typed
//! [`Region`] records; it never builds tree relationships itself.
//!
//! ## Row policy
//!
//! - A header row is tolerated: any row whose numeric columns fail to parse
//!   is skipped with a warning, which covers `code,name,level,...` headers
//!   without a dedicated header flag.
//! - Source sentinels map to `None` at this boundary: a missing or empty
//!   price column, the `0.0` placeholder price, and the `"N/A"` employment
//!   marker all become absent values. Core code never sees magic zeros.

use crate::error::{IngestError, Result};
use regio_core::{Level, Region};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Employment-rate sentinel meaning "no data" in the source format.
const NOT_AVAILABLE: &str = "N/A";

/// Load division records from a delimited file, in file order.
///
/// Fails with [`IngestError::Empty`] when no row yields a usable record.
pub fn load_regions<P: AsRef<Path>>(path: P) -> Result<Vec<Region>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let regions = read_regions(file)?;
    if regions.is_empty() {
        return Err(IngestError::Empty {
            path: path.to_path_buf(),
        });
    }
    debug!(records = regions.len(), path = %path.display(), "dataset loaded");
    Ok(regions)
}

/// Read division records from any delimited-text reader, in input order.
///
/// Rows that fail to parse are skipped (with a `warn!` carrying the row
/// number); an empty result is not an error at this level.
pub fn read_regions<R: Read>(rdr: R) -> Result<Vec<Region>> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);

    let mut regions = Vec::new();
    let mut skipped = 0usize;
    for (row, result) in csv.records().enumerate() {
        let record = result?;
        match parse_row(&record) {
            Some(region) => regions.push(region),
            None => {
                // Row 0 is routinely the header; anything later is bad data.
                if row > 0 {
                    warn!(row = row + 1, "unparseable row skipped");
                }
                skipped += 1;
            }
        }
    }
    if skipped > 1 {
        warn!(skipped, kept = regions.len(), "rows dropped during load");
    }
    Ok(regions)
}

/// Parse one source row into a typed record, `None` when the mandatory
/// columns are missing or non-numeric.
fn parse_row(record: &csv::StringRecord) -> Option<Region> {
    let code = record.get(0)?.trim();
    let name = record.get(1)?.trim();
    let level: u8 = record.get(2)?.trim().parse().ok()?;
    let parent_code = record.get(3)?.trim();
    let division_type: i32 = record.get(4)?.trim().parse().ok()?;
    if code.is_empty() || name.is_empty() {
        return None;
    }

    let avg_house_price = record
        .get(5)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        // The source writes 0.0 as a "no data" placeholder.
        .filter(|&p| p > 0.0);

    let employment_rate = record
        .get(6)
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != NOT_AVAILABLE)
        .map(str::to_owned);

    let mut region = Region::new(code, name, Level(level), parent_code, division_type);
    region.avg_house_price = avg_house_price;
    region.employment_rate = employment_rate;
    Some(region)
}
