//! Ordered column schema consumed by grid displays.
//!
//! A `ColumnSpec` describes one grid column: which record field it reads, its
//! header title and width, whether it is sortable, and optional per-cell value
//! formatting and tone rules. The default bond-panel schema lives in
//! [`schema`] and mirrors the field dictionary in `record::FIELDS`.

use chrono::{TimeZone, Utc};

use crate::record::FieldValue;

/// Severity tone a cell can carry; frontends map tones to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTone {
    /// No emphasis.
    Neutral,
    /// Calm range (rendered green).
    Cool,
    /// Elevated range (rendered orange).
    Warm,
    /// Alert range (rendered red).
    Hot,
}

/// One grid column: field binding, header, width, and render rules.
#[derive(Clone)]
pub struct ColumnSpec {
    /// Record field name this column reads.
    pub field: &'static str,
    /// Header title.
    pub title: &'static str,
    /// Rendered width in characters.
    pub width: usize,
    /// Whether the grid should offer sorting on this column.
    pub sortable: bool,
    /// Optional value formatter; defaults to `FieldValue`'s `Display`.
    pub formatter: Option<fn(&FieldValue) -> String>,
    /// Optional tone rule for per-cell emphasis.
    pub tone: Option<fn(&FieldValue) -> CellTone>,
}

impl ColumnSpec {
    fn new(field: &'static str, title: &'static str, width: usize) -> Self {
        ColumnSpec {
            field,
            title,
            width,
            sortable: false,
            formatter: None,
            tone: None,
        }
    }

    fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    fn with_formatter(mut self, f: fn(&FieldValue) -> String) -> Self {
        self.formatter = Some(f);
        self
    }

    fn with_tone(mut self, t: fn(&FieldValue) -> CellTone) -> Self {
        self.tone = Some(t);
        self
    }

    /// Format `value` for this column, falling back to `Display`.
    pub fn format(&self, value: &FieldValue) -> String {
        match self.formatter {
            Some(f) => f(value),
            None => value.to_string(),
        }
    }

    /// Tone for `value`, `Neutral` when the column carries no rule.
    pub fn tone_of(&self, value: &FieldValue) -> CellTone {
        match self.tone {
            Some(t) => t(value),
            None => CellTone::Neutral,
        }
    }
}

fn fmt_time(v: &FieldValue) -> String {
    match v {
        FieldValue::Int(ms) => match Utc.timestamp_millis_opt(*ms) {
            chrono::LocalResult::Single(dt) => dt.format("%H:%M:%S%.3f").to_string(),
            _ => ms.to_string(),
        },
        other => other.to_string(),
    }
}

/// Notional amounts are displayed in hundred-million units with two decimals.
fn fmt_amount_100m(v: &FieldValue) -> String {
    match v.as_f64() {
        Some(n) => format!("{:.2}", n / 100_000_000.0),
        None => "-".to_string(),
    }
}

fn fmt_yes_no(v: &FieldValue) -> String {
    match v {
        FieldValue::Bool(b) => (if *b { "yes" } else { "no" }).to_string(),
        other => other.to_string(),
    }
}

/// Yield bands: above 2% hot, above 1% warm, otherwise cool.
fn tone_ytm(v: &FieldValue) -> CellTone {
    match v.as_f64() {
        Some(y) if y > 2.0 => CellTone::Hot,
        Some(y) if y > 1.0 => CellTone::Warm,
        Some(_) => CellTone::Cool,
        None => CellTone::Neutral,
    }
}

/// Positive spreads (paying over valuation) are hot, the rest cool.
fn tone_spread(v: &FieldValue) -> CellTone {
    match v.as_f64() {
        Some(s) if s > 0.0 => CellTone::Hot,
        Some(_) => CellTone::Cool,
        None => CellTone::Neutral,
    }
}

/// Absolute curve deviation bands at 0.01 / 0.02.
fn tone_deviation(v: &FieldValue) -> CellTone {
    match v.as_f64().map(f64::abs) {
        Some(d) if d > 0.02 => CellTone::Hot,
        Some(d) if d > 0.01 => CellTone::Warm,
        Some(_) => CellTone::Cool,
        None => CellTone::Neutral,
    }
}

/// Default bond-panel column schema, in display order.
pub fn schema() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("transact_time", "Time", 15)
            .sortable()
            .with_formatter(fmt_time),
        ColumnSpec::new("windcode", "Code", 12).sortable(),
        ColumnSpec::new("symbol_name", "Name", 15),
        ColumnSpec::new("bond_type", "Type", 12),
        ColumnSpec::new("trade_exchange", "Venue", 10),
        ColumnSpec::new("issuer_name", "Issuer", 15),
        ColumnSpec::new("current_price", "Last", 9).sortable(),
        ColumnSpec::new("buy_net_price", "Bid Net", 9).sortable(),
        ColumnSpec::new("sell_net_price", "Ask Net", 9).sortable(),
        ColumnSpec::new("net_price_csi", "CSI Net", 9),
        ColumnSpec::new("buy_ytm", "Bid YTM", 10)
            .sortable()
            .with_tone(tone_ytm),
        ColumnSpec::new("sell_ytm", "Ask YTM", 10)
            .sortable()
            .with_tone(tone_ytm),
        ColumnSpec::new("yield_csi", "CSI Yield", 10).sortable(),
        ColumnSpec::new("gjsyl", "Govt Yield", 10),
        ColumnSpec::new("buy_ytmdiff", "Bid Sprd(BP)", 12).with_tone(tone_spread),
        ColumnSpec::new("sell_ytmdiff", "Ask Sprd(BP)", 12).with_tone(tone_spread),
        ColumnSpec::new("buy_amount", "Bid Amt(100M)", 13)
            .sortable()
            .with_formatter(fmt_amount_100m),
        ColumnSpec::new("sell_amount", "Ask Amt(100M)", 13)
            .sortable()
            .with_formatter(fmt_amount_100m),
        ColumnSpec::new("holding_amount", "Held(100M)", 12).with_formatter(fmt_amount_100m),
        ColumnSpec::new("residual_duration_str", "Tenor", 10),
        ColumnSpec::new("narrow_matu", "Bucket", 10),
        ColumnSpec::new("end_date", "Maturity", 10),
        ColumnSpec::new("csi_credit_rating", "CSI Rtg", 8),
        ColumnSpec::new("cnbd_credit_rating", "CNBD Rtg", 8),
        ColumnSpec::new("intergrade_bond", "Bond Rtg", 8),
        ColumnSpec::new("cur_coupon_rate", "Coupon(%)", 10),
        ColumnSpec::new("curve_deviation", "Curve Dev", 10).with_tone(tone_deviation),
        ColumnSpec::new("settle_speed", "Settle", 7),
        ColumnSpec::new("pa_zscore", "Z-Score", 9),
        ColumnSpec::new("fix_wind_industry", "Industry", 10),
        ColumnSpec::new("sys_type", "System", 8),
        ColumnSpec::new("has_position", "Held", 6).with_formatter(fmt_yes_no),
        ColumnSpec::new("has_symbol_position", "Sym Held", 9).with_formatter(fmt_yes_no),
        ColumnSpec::new("bond_reserve_status", "Reserve", 8),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_formatter_uses_hundred_million_units() {
        assert_eq!(fmt_amount_100m(&FieldValue::Int(250_000_000)), "2.50");
        assert_eq!(fmt_amount_100m(&FieldValue::Null), "-");
    }

    #[test]
    fn test_ytm_tone_bands() {
        assert_eq!(tone_ytm(&FieldValue::Float(2.5)), CellTone::Hot);
        assert_eq!(tone_ytm(&FieldValue::Float(1.5)), CellTone::Warm);
        assert_eq!(tone_ytm(&FieldValue::Float(0.5)), CellTone::Cool);
        assert_eq!(tone_ytm(&FieldValue::Null), CellTone::Neutral);
    }

    #[test]
    fn test_schema_fields_resolve_against_dictionary() {
        let known: Vec<&str> = crate::record::FIELDS.to_vec();
        for col in schema() {
            assert!(known.contains(&col.field), "unknown field {}", col.field);
        }
    }

    #[test]
    fn test_time_formatter_renders_clock_time() {
        let s = fmt_time(&FieldValue::Int(0));
        assert_eq!(s, "00:00:00.000");
    }
}
