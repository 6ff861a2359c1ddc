//! Gold price feed
//!
//! Fetches a daily OHLC CSV (stooq format) over HTTPS, parses it
//! tolerantly, and derives trailing-window summary statistics for the
//! market spark widget. Every fetch re-downloads the full history; the
//! dataset is small enough that caching is not worth the staleness.

use crate::error::AppError;
use serde::Deserialize;
use tracing::{debug, info};

/// One daily price row from the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Date", default)]
    date: String,
    #[serde(rename = "Open", default)]
    open: String,
    #[serde(rename = "High", default)]
    high: String,
    #[serde(rename = "Low", default)]
    low: String,
    #[serde(rename = "Close", default)]
    close: String,
}

/// Supported trailing-window ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    M1,
    M3,
    M6,
    Y1,
    Y3,
    Y5,
}

impl Range {
    /// Calendar days covered by the range, leap-day inclusive.
    pub fn days(self) -> usize {
        match self {
            Range::M1 => 31,
            Range::M3 => 93,
            Range::M6 => 186,
            Range::Y1 => 366,
            Range::Y3 => 1096,
            Range::Y5 => 1827,
        }
    }

    /// Parse a range key, falling back to six months for anything unknown.
    pub fn from_key(key: &str) -> Self {
        match key {
            "1m" => Range::M1,
            "3m" => Range::M3,
            "6m" => Range::M6,
            "1y" => Range::Y1,
            "3y" => Range::Y3,
            "5y" => Range::Y5,
            _ => Range::M6,
        }
    }
}

/// Summary statistics over a window of rows.
///
/// Change is day over day (latest close versus the previous row), not
/// versus the window start; high and low span the whole window.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub latest_close: f64,
    pub change: f64,
    pub change_pct: f64,
    pub high: f64,
    pub low: f64,
}

/// Parse feed CSV, skipping rows with no date or an unparseable close.
///
/// Open/high/low that fail to parse degrade to the row's close rather
/// than dropping the row, matching how sparse historical data arrives.
pub fn parse_csv(body: &str) -> Result<Vec<PriceRow>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.deserialize::<RawRow>() {
        let raw = match record {
            Ok(raw) => raw,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if raw.date.trim().is_empty() {
            skipped += 1;
            continue;
        }
        let close = match raw.close.trim().parse::<f64>() {
            Ok(close) => close,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        rows.push(PriceRow {
            date: raw.date.trim().to_string(),
            open: raw.open.trim().parse().unwrap_or(close),
            high: raw.high.trim().parse().unwrap_or(close),
            low: raw.low.trim().parse().unwrap_or(close),
            close,
        });
    }

    if skipped > 0 {
        debug!(skipped, kept = rows.len(), "Dropped unusable feed rows");
    }
    Ok(rows)
}

/// Trailing window of the most recent `range.days()` rows.
///
/// Rows arrive oldest first; a window wider than the data returns it all.
pub fn trailing_window(rows: &[PriceRow], range: Range) -> &[PriceRow] {
    let days = range.days();
    if rows.len() <= days {
        rows
    } else {
        &rows[rows.len() - days..]
    }
}

/// Compute window statistics; `None` on an empty window.
pub fn stats(window: &[PriceRow]) -> Option<PriceStats> {
    let last = window.last()?;
    let previous = if window.len() >= 2 {
        &window[window.len() - 2]
    } else {
        last
    };

    let mut high = f64::MIN;
    let mut low = f64::MAX;
    for row in window {
        high = high.max(row.high);
        low = low.min(row.low);
    }

    let change = last.close - previous.close;
    let change_pct = if previous.close == 0.0 {
        0.0
    } else {
        100.0 * change / previous.close
    };

    Some(PriceStats {
        latest_close: last.close,
        change,
        change_pct,
        high,
        low,
    })
}

/// Download and parse the full price history from `url`.
pub async fn fetch_prices(url: &str) -> Result<Vec<PriceRow>, AppError> {
    info!(url, "Fetching price history");
    let response = reqwest::get(url)
        .await
        .map_err(|e| AppError::Feed(format!("Request failed: {e}")))?;
    let body = response
        .error_for_status()
        .map_err(|e| AppError::Feed(format!("Feed returned an error status: {e}")))?
        .text()
        .await
        .map_err(|e| AppError::Feed(format!("Could not read feed body: {e}")))?;

    let rows = parse_csv(&body)?;
    if rows.is_empty() {
        return Err(AppError::Feed("Feed contained no usable rows".to_string()));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Date,Open,High,Low,Close\n\
        2024-01-02,2050.0,2070.5,2040.0,2063.2\n\
        2024-01-03,2063.0,2081.0,2055.5,2075.9\n\
        ,2075.0,2080.0,2070.0,2078.0\n\
        2024-01-04,2076.0,2090.0,n/a,not-a-number\n\
        2024-01-05,2080.0,2101.5,2072.0,2099.4\n";

    #[test]
    fn test_parse_skips_bad_rows() {
        let rows = parse_csv(SAMPLE).expect("parse");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, "2024-01-02");
        assert_eq!(rows[2].close, 2099.4);
    }

    #[test]
    fn test_unparseable_low_degrades_to_close() {
        let body = "Date,Open,High,Low,Close\n2024-01-02,2050.0,2070.5,n/a,2063.2\n";
        let rows = parse_csv(body).expect("parse");
        assert_eq!(rows[0].low, 2063.2);
    }

    #[test]
    fn test_range_keys_and_fallback() {
        assert_eq!(Range::from_key("1m"), Range::M1);
        assert_eq!(Range::from_key("5y"), Range::Y5);
        assert_eq!(Range::from_key("weird"), Range::M6);
        assert_eq!(Range::from_key("1y").days(), 366);
        assert_eq!(Range::from_key("3y").days(), 1096);
    }

    #[test]
    fn test_trailing_window_clamps_to_data() {
        let rows = parse_csv(SAMPLE).expect("parse");
        assert_eq!(trailing_window(&rows, Range::M6).len(), rows.len());
        assert_eq!(trailing_window(&rows, Range::M1).len(), rows.len());
    }

    #[test]
    fn test_stats_over_window() {
        let rows = parse_csv(SAMPLE).expect("parse");
        let s = stats(&rows).expect("stats");
        assert_eq!(s.latest_close, 2099.4);
        assert!((s.change - (2099.4 - 2075.9)).abs() < 1e-9);
        assert_eq!(s.high, 2101.5);
        assert_eq!(s.low, 2040.0);
    }

    #[test]
    fn test_stats_empty_window() {
        assert_eq!(stats(&[]), None);
    }

    #[test]
    fn test_single_row_window_has_zero_change() {
        let window = vec![PriceRow {
            date: "2024-01-02".into(),
            open: 2050.0,
            high: 2070.5,
            low: 2040.0,
            close: 2063.2,
        }];
        let s = stats(&window).expect("stats");
        assert_eq!(s.change, 0.0);
        assert_eq!(s.change_pct, 0.0);
    }

    #[test]
    fn test_zero_previous_close_gives_zero_pct() {
        let window = vec![
            PriceRow {
                date: "2024-01-02".into(),
                open: 0.0,
                high: 0.0,
                low: 0.0,
                close: 0.0,
            },
            PriceRow {
                date: "2024-01-03".into(),
                open: 1.0,
                high: 1.0,
                low: 1.0,
                close: 1.0,
            },
        ];
        let s = stats(&window).expect("stats");
        assert_eq!(s.change_pct, 0.0);
    }
}
