//! CSV file listing adapter.
//!
//! `securities.csv`: `symbol,type,last_dividend,fixed_dividend,par_value`
//! `trades.csv`:     `symbol,quantity,direction,price`

use crate::domain::error::GbceError;
use crate::domain::security::{Security, SecurityKind};
use crate::domain::trade::TradeDirection;
use crate::ports::listing_port::{ListingPort, TradeEntry};
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvAdapter {
    securities_path: PathBuf,
    trades_path: Option<PathBuf>,
}

impl CsvAdapter {
    pub fn new(securities_path: PathBuf, trades_path: Option<PathBuf>) -> Self {
        Self {
            securities_path,
            trades_path,
        }
    }
}

impl ListingPort for CsvAdapter {
    fn securities(&self) -> Result<Vec<Security>, GbceError> {
        parse_securities(&read_listing(&self.securities_path)?)
    }

    fn trades(&self) -> Result<Vec<TradeEntry>, GbceError> {
        match &self.trades_path {
            Some(path) => parse_trades(&read_listing(path)?),
            None => Ok(Vec::new()),
        }
    }
}

fn read_listing(path: &Path) -> Result<String, GbceError> {
    fs::read_to_string(path).map_err(|e| GbceError::Listing {
        reason: format!("failed to read {}: {}", path.display(), e),
    })
}

fn reader(content: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes())
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn field<'r>(record: &'r csv::StringRecord, index: usize, name: &str) -> Result<&'r str, GbceError> {
    match record.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(GbceError::Listing {
            reason: format!("line {}: missing {} column", line_of(record), name),
        }),
    }
}

fn number<T: std::str::FromStr>(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<T, GbceError>
where
    T::Err: std::fmt::Display,
{
    let raw = field(record, index, name)?;
    raw.parse().map_err(|e| GbceError::Listing {
        reason: format!("line {}: invalid {} '{}': {}", line_of(record), name, raw, e),
    })
}

/// Accepts either a fraction (`0.02`) or a percentage (`2%`).
fn parse_rate(record: &csv::StringRecord, index: usize) -> Result<f64, GbceError> {
    let raw = field(record, index, "fixed_dividend").unwrap_or("0");
    let (digits, scale) = match raw.strip_suffix('%') {
        Some(pct) => (pct.trim(), 100.0),
        None => (raw, 1.0),
    };
    digits
        .parse::<f64>()
        .map(|v| v / scale)
        .map_err(|e| GbceError::Listing {
            reason: format!(
                "line {}: invalid fixed_dividend '{}': {}",
                line_of(record),
                raw,
                e
            ),
        })
}

fn listing_error(record: &csv::StringRecord, err: GbceError) -> GbceError {
    GbceError::Listing {
        reason: format!("line {}: {}", line_of(record), err),
    }
}

pub fn parse_securities(content: &str) -> Result<Vec<Security>, GbceError> {
    let mut rdr = reader(content);
    let mut securities = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(|e| GbceError::Listing {
            reason: format!("CSV parse error: {}", e),
        })?;

        let symbol = field(&record, 0, "symbol")?;
        let kind: SecurityKind = field(&record, 1, "type")?
            .parse()
            .map_err(|e| listing_error(&record, e))?;
        let last_dividend: f64 = number(&record, 2, "last_dividend")?;
        let fixed_dividend = parse_rate(&record, 3)?;
        let par_value: f64 = number(&record, 4, "par_value")?;

        let security = Security::new(symbol, kind, last_dividend, fixed_dividend, par_value)
            .map_err(|e| listing_error(&record, e))?;
        securities.push(security);
    }

    Ok(securities)
}

pub fn parse_trades(content: &str) -> Result<Vec<TradeEntry>, GbceError> {
    let mut rdr = reader(content);
    let mut trades = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(|e| GbceError::Listing {
            reason: format!("CSV parse error: {}", e),
        })?;

        let symbol = field(&record, 0, "symbol")?.to_uppercase();
        let quantity: i64 = number(&record, 1, "quantity")?;
        let direction: TradeDirection = field(&record, 2, "direction")?
            .parse()
            .map_err(|e| listing_error(&record, e))?;
        let price: f64 = number(&record, 3, "price")?;

        trades.push(TradeEntry {
            symbol,
            quantity,
            direction,
            price,
        });
    }

    Ok(trades)
}
