//! Template data source for the perturbation generation strategy.
//!
//! The pool is loaded once at startup from a JSON file shaped like
//! `{"data": [ ... ]}` where each entry carries the quote-side fields of a
//! real snapshot plus a nested `bond_base_info` object with the static
//! descriptive fields and base analytics. The file is optional: a missing or
//! unparsable file is logged and replaced by an empty pool, which switches
//! generation to the pure-random strategy. Loading never fails the session.

use log::{error, info};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bond_common::Result;

/// Static descriptive fields and base analytics of one template instrument.
#[derive(Debug, Clone, Deserialize)]
pub struct BondBaseInfo {
    /// Identifying instrument code.
    pub windcode: String,
    /// Display name.
    pub symbol_name: String,
    /// Bond category name.
    pub bond_type_name: String,
    /// Trading venue name.
    pub trade_exchange: String,
    /// Issuer display name.
    pub issuer_name: String,
    /// Valuation-provider net price base.
    pub net_price_csi: f64,
    /// Valuation-provider yield base.
    pub yield_csi: f64,
    /// Matched government-curve yield base.
    pub gjsyl: f64,
    /// Outstanding holding notional base.
    pub holding_amount: i64,
    /// Remaining tenor in years.
    pub residual_duration: Option<f64>,
    /// Human-readable remaining tenor.
    pub residual_duration_str: Option<String>,
    /// Maturity date.
    pub end_date: Option<String>,
    /// Tenor bucket label.
    pub narrow_matu: Option<String>,
    /// Valuation-provider credit rating.
    pub csi_credit_rating: Option<String>,
    /// CNBD credit rating.
    pub cnbd_credit_rating: Option<String>,
    /// Composite bond rating.
    pub intergrade_bond: Option<String>,
    /// Current coupon rate, percent.
    pub cur_coupon_rate: Option<f64>,
    /// Deviation-from-curve base.
    pub curve_deviation: f64,
    /// Price-anomaly z-score base.
    pub pa_zscore: f64,
    /// Risk warning marker.
    pub risk_warning: Option<String>,
    /// Whether the desk holds this exact instrument.
    #[serde(default)]
    pub has_position: bool,
    /// Whether the desk holds any instrument of this symbol.
    #[serde(default)]
    pub has_symbol_position: bool,
    /// Reserve-list status label.
    pub bond_reserve_status: Option<String>,
    /// Industry classification.
    pub fix_wind_industry: Option<String>,
    /// Originating system tag.
    pub sys_type: Option<String>,
}

/// One template snapshot: live quote-side fields plus the static base info.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    /// Static descriptive fields and analytics bases.
    pub bond_base_info: BondBaseInfo,
    /// Bid net price base, when the template was quoted.
    pub buy_net_price: Option<f64>,
    /// Ask net price base, when the template was quoted.
    pub sell_net_price: Option<f64>,
    /// Bid yield base.
    pub buy_ytm: Option<f64>,
    /// Ask yield base.
    pub sell_ytm: Option<f64>,
    /// Bid notional base.
    pub buy_amount: Option<i64>,
    /// Ask notional base.
    pub sell_amount: Option<i64>,
    /// Settlement speed label.
    pub settle_speed: Option<String>,
    /// Bid yield spread, basis points.
    pub buy_ytmdiff: Option<f64>,
    /// Ask yield spread, basis points.
    pub sell_ytmdiff: Option<f64>,
    /// Bid spread against the provider curve, basis points.
    pub buy_ytm_diff_csi: Option<f64>,
    /// Ask spread against the provider curve, basis points.
    pub sell_ytm_diff_csi: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TemplateFile {
    data: Vec<Template>,
}

/// Preloaded pool of template records.
#[derive(Debug, Clone, Default)]
pub struct TemplatePool {
    templates: Vec<Template>,
}

impl TemplatePool {
    /// Build a pool directly from templates (used by tests and embedding).
    pub fn new(templates: Vec<Template>) -> Self {
        TemplatePool { templates }
    }

    /// Parse a pool from any reader holding the template JSON document.
    pub fn parse_from_reader<R: Read>(reader: R) -> Result<Self> {
        let file: TemplateFile = serde_json::from_reader(reader)
            .map_err(|e| bond_common::PanelError::ParseTemplateFile(e.to_string()))?;
        Ok(TemplatePool {
            templates: file.data,
        })
    }

    /// Load the pool from `path`.
    ///
    /// This is total: any I/O or parse failure is logged and yields an empty
    /// pool, which downstream selects the pure-random strategy. The session
    /// never fails over template data.
    pub fn load(path: &Path) -> Self {
        let attempt = File::open(path)
            .map_err(bond_common::PanelError::Io)
            .and_then(|f| Self::parse_from_reader(BufReader::new(f)));
        match attempt {
            Ok(pool) => {
                info!("Loaded {} template records from {}", pool.len(), path.display());
                pool
            }
            Err(e) => {
                error!(
                    "Failed to load template data from {}: {}. Falling back to random generation.",
                    path.display(),
                    e
                );
                TemplatePool::default()
            }
        }
    }

    /// Number of templates in the pool.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the pool holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }
}

/// Single-template document shared by tests across the crate.
#[cfg(test)]
pub(crate) fn tests_sample_json() -> &'static str {
    tests::SAMPLE
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) const SAMPLE: &str = r#"{
        "data": [{
            "bond_base_info": {
                "windcode": "210215.IB",
                "symbol_name": "Treasury 21",
                "bond_type_name": "Treasury",
                "trade_exchange": "Interbank",
                "issuer_name": "Ministry of Finance",
                "net_price_csi": 101.25,
                "yield_csi": 2.30,
                "gjsyl": 2.28,
                "holding_amount": 1000000000,
                "residual_duration": 2.3,
                "residual_duration_str": "2.3Y",
                "end_date": "2028-11-05",
                "narrow_matu": "1-3Y",
                "csi_credit_rating": "AAA",
                "cnbd_credit_rating": "AAA",
                "intergrade_bond": "AAA",
                "cur_coupon_rate": 3.02,
                "curve_deviation": 0.0004,
                "pa_zscore": 0.12,
                "risk_warning": null,
                "has_position": true,
                "has_symbol_position": false,
                "bond_reserve_status": null,
                "fix_wind_industry": "Sovereign",
                "sys_type": "cash"
            },
            "buy_net_price": 101.20,
            "sell_net_price": 101.30,
            "buy_ytm": 2.31,
            "sell_ytm": 2.29,
            "buy_amount": 200000000,
            "sell_amount": null,
            "settle_speed": "T+1",
            "buy_ytmdiff": 1.0,
            "sell_ytmdiff": -1.0,
            "buy_ytm_diff_csi": null,
            "sell_ytm_diff_csi": null
        }]
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let pool = TemplatePool::parse_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(pool.len(), 1);
        let t = pool.get(0).unwrap();
        assert_eq!(t.bond_base_info.windcode, "210215.IB");
        assert_eq!(t.buy_net_price, Some(101.20));
        assert_eq!(t.sell_amount, None);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(TemplatePool::parse_from_reader("not json".as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file_yields_empty_pool() {
        let pool = TemplatePool::load(Path::new("/definitely/not/here.json"));
        assert!(pool.is_empty());
    }
}
