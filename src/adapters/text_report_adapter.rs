//! Plain-text report adapter: per-stock metrics then the index, two decimals.

use crate::domain::error::GbceError;
use crate::domain::report::MarketReport;
use crate::ports::report_port::ReportPort;
use std::io::Write;

pub struct TextReportAdapter<W: Write> {
    out: W,
}

impl<W: Write> TextReportAdapter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `inf` for an undefined P/E, otherwise two decimal places.
fn fmt_value(value: f64) -> String {
    if value.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.2}", value)
    }
}

impl<W: Write> ReportPort for TextReportAdapter<W> {
    fn write(&mut self, report: &MarketReport) -> Result<(), GbceError> {
        for m in &report.securities {
            writeln!(self.out)?;
            writeln!(self.out, "Stock: {} ({})", m.symbol, m.kind)?;
            writeln!(self.out, "  Dividend Yield: {}", fmt_value(m.dividend_yield))?;
            writeln!(self.out, "  P/E Ratio: {}", fmt_value(m.pe_ratio))?;
            writeln!(
                self.out,
                "  Volume Weighted Stock Price: {}",
                fmt_value(m.volume_weighted_price)
            )?;
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "GBCE All Share Index: {}",
            fmt_value(report.all_share_index)
        )?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::SecurityMetrics;
    use crate::domain::security::SecurityKind;
    use chrono::{TimeZone, Utc};

    fn report() -> MarketReport {
        MarketReport {
            reference_price: 120.0,
            as_of: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            securities: vec![
                SecurityMetrics {
                    symbol: "TEA".into(),
                    kind: SecurityKind::Common,
                    dividend_yield: 0.0,
                    pe_ratio: f64::INFINITY,
                    volume_weighted_price: 1825.0 / 15.0,
                },
                SecurityMetrics {
                    symbol: "GIN".into(),
                    kind: SecurityKind::Preferred,
                    dividend_yield: 2.0 / 120.0,
                    pe_ratio: 60.0,
                    volume_weighted_price: 105.0,
                },
            ],
            all_share_index: 113.0,
        }
    }

    #[test]
    fn renders_each_security_and_index() {
        let mut adapter = TextReportAdapter::new(Vec::new());
        adapter.write(&report()).unwrap();
        let text = String::from_utf8(adapter.into_inner()).unwrap();

        let expected = "\nStock: TEA (Common)\n  Dividend Yield: 0.00\n  P/E Ratio: inf\n  Volume Weighted Stock Price: 121.67\n\
\nStock: GIN (Preferred)\n  Dividend Yield: 0.02\n  P/E Ratio: 60.00\n  Volume Weighted Stock Price: 105.00\n\
\nGBCE All Share Index: 113.00\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_report_prints_zero_index() {
        let mut empty = report();
        empty.securities.clear();
        empty.all_share_index = 0.0;

        let mut adapter = TextReportAdapter::new(Vec::new());
        adapter.write(&empty).unwrap();
        let text = String::from_utf8(adapter.into_inner()).unwrap();
        assert_eq!(text, "\nGBCE All Share Index: 0.00\n");
    }
}
