//! Synthetic quote record generation.
//!
//! The generator produces one `QuoteRecord` per call through one of two
//! strategies behind a single interface:
//!
//! - `TemplatePerturbation` — pick a template uniformly at random from the
//!   preloaded pool and derive the output by applying small symmetric uniform
//!   deltas to the numeric fields, passing static descriptive fields through
//!   unchanged.
//! - `PureRandom` — synthesize every populated field from scratch with uniform
//!   draws over domain-appropriate ranges.
//!
//! The strategy is selected once at startup from template availability, and
//! the perturbation path additionally falls back per call when the pool is
//! empty. Generation is total: it never fails and always yields the same
//! field structure, with a non-null identifying code and timestamp.

use rand::Rng;

use bond_common::instrument::{BondType, Exchange, SettleSpeed};
use bond_common::record::QuoteRecord;

use crate::templates::{Template, TemplatePool};

/// Milliseconds added per record within a generated batch, emulating arrival
/// ordering of a real feed push.
pub const BATCH_STEP_MS: u64 = 2;

/// Batch size when no template pool dictates one.
pub const DEFAULT_BATCH_SIZE: usize = 43;

/// How many records each tick produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPlan {
    /// Same count every tick.
    Fixed(usize),
    /// Uniform draw in `[min, max]` per tick.
    Jitter {
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },
}

impl BatchPlan {
    /// Resolve the size of the next batch.
    pub fn next_size(&self) -> usize {
        match *self {
            BatchPlan::Fixed(n) => n,
            BatchPlan::Jitter { min, max } => {
                let mut rng = rand::rng();
                rng.random_range(min..=max)
            }
        }
    }
}

/// Generation strategy variants unified behind [`QuoteGenerator`].
enum GenStrategy {
    /// Perturb a randomly chosen template from the pool.
    TemplatePerturbation(TemplatePool),
    /// Synthesize every field from uniform draws.
    PureRandom,
}

/// Record generator producing quote snapshots on demand.
pub struct QuoteGenerator {
    strategy: GenStrategy,
}

impl QuoteGenerator {
    /// Choose the strategy from pool availability: a non-empty pool selects
    /// template perturbation, otherwise pure-random generation.
    pub fn from_pool(pool: TemplatePool) -> Self {
        let strategy = if pool.is_empty() {
            GenStrategy::PureRandom
        } else {
            GenStrategy::TemplatePerturbation(pool)
        };
        QuoteGenerator { strategy }
    }

    /// Generator that always uses the pure-random strategy.
    pub fn pure_random() -> Self {
        QuoteGenerator {
            strategy: GenStrategy::PureRandom,
        }
    }

    /// Natural batch size for this generator: the template pool length when
    /// one is loaded, the fixed default otherwise.
    pub fn default_batch_size(&self) -> usize {
        match &self.strategy {
            GenStrategy::TemplatePerturbation(pool) if !pool.is_empty() => pool.len(),
            _ => DEFAULT_BATCH_SIZE,
        }
    }

    /// Generate one record stamped with `timestamp_ms`.
    pub fn generate(&self, timestamp_ms: u64) -> QuoteRecord {
        match &self.strategy {
            GenStrategy::TemplatePerturbation(pool) => {
                let mut rng = rand::rng();
                if pool.is_empty() {
                    return random_record(timestamp_ms);
                }
                let idx = rng.random_range(0..pool.len());
                // Index is in range by construction.
                match pool.get(idx) {
                    Some(template) => perturb_template(template, timestamp_ms),
                    None => random_record(timestamp_ms),
                }
            }
            GenStrategy::PureRandom => random_record(timestamp_ms),
        }
    }

    /// Generate `count` records with strictly increasing timestamps starting
    /// at `base_timestamp_ms`, stepping [`BATCH_STEP_MS`] per index.
    pub fn generate_batch(&self, count: usize, base_timestamp_ms: u64) -> Vec<QuoteRecord> {
        (0..count)
            .map(|i| self.generate(base_timestamp_ms + i as u64 * BATCH_STEP_MS))
            .collect()
    }
}

/// Derive a record from `template` with small random movement on the numeric
/// fields. Static descriptive fields pass through unchanged.
fn perturb_template(template: &Template, timestamp_ms: u64) -> QuoteRecord {
    let mut rng = rand::rng();
    let base = &template.bond_base_info;

    let base_buy = template
        .buy_net_price
        .unwrap_or_else(|| 100.0 + rng.random_range(0.0..10.0));
    // Symmetric price movement of up to one point per tick.
    let variation: f64 = rng.random_range(-1.0..1.0);

    QuoteRecord {
        windcode: base.windcode.clone(),
        symbol_name: base.symbol_name.clone(),
        bond_type: base.bond_type_name.clone(),
        trade_exchange: base.trade_exchange.clone(),
        issuer_name: base.issuer_name.clone(),

        current_price: base_buy + variation,
        buy_net_price: template.buy_net_price.map(|p| p + variation * 0.5),
        sell_net_price: template.sell_net_price.map(|p| p + variation * 0.5),
        net_price_csi: Some(base.net_price_csi + variation * 0.3),

        buy_ytm: template.buy_ytm.map(|y| y + rng.random_range(-0.05..0.05)),
        sell_ytm: template.sell_ytm.map(|y| y + rng.random_range(-0.05..0.05)),
        yield_csi: base.yield_csi + rng.random_range(-0.025..0.025),
        gjsyl: Some(base.gjsyl + rng.random_range(-0.025..0.025)),

        buy_ytmdiff: template.buy_ytmdiff,
        sell_ytmdiff: template.sell_ytmdiff,
        buy_ytm_diff_csi: template.buy_ytm_diff_csi,
        sell_ytm_diff_csi: template.sell_ytm_diff_csi,

        buy_amount: template
            .buy_amount
            .map(|a| (a as f64 * rng.random_range(0.8..1.2)) as i64),
        sell_amount: template
            .sell_amount
            .map(|a| (a as f64 * rng.random_range(0.8..1.2)) as i64),
        holding_amount: Some((base.holding_amount as f64 * rng.random_range(0.95..1.05)) as i64),

        residual_duration: base.residual_duration,
        residual_duration_str: base.residual_duration_str.clone(),
        end_date: base.end_date.clone(),
        narrow_matu: base.narrow_matu.clone(),

        csi_credit_rating: base.csi_credit_rating.clone(),
        cnbd_credit_rating: base.cnbd_credit_rating.clone(),
        intergrade_bond: base.intergrade_bond.clone(),

        cur_coupon_rate: base.cur_coupon_rate,
        curve_deviation: Some(base.curve_deviation + rng.random_range(-0.0005..0.0005)),
        settle_speed: template.settle_speed.clone(),
        pa_zscore: Some(base.pa_zscore + rng.random_range(-0.05..0.05)),
        risk_warning: base.risk_warning.clone(),

        has_position: base.has_position,
        has_symbol_position: base.has_symbol_position,
        bond_reserve_status: base.bond_reserve_status.clone(),

        fix_wind_industry: base.fix_wind_industry.clone(),
        sys_type: base.sys_type.clone(),

        transact_time: timestamp_ms,
    }
}

/// Synthesize a record entirely from uniform draws. Optional fields without a
/// natural random domain stay null.
fn random_record(timestamp_ms: u64) -> QuoteRecord {
    let mut rng = rand::rng();

    let bond_type = BondType::ALL[rng.random_range(0..BondType::ALL.len())];
    let exchange = Exchange::ALL[rng.random_range(0..Exchange::ALL.len())];
    let settle = SettleSpeed::ALL[rng.random_range(0..SettleSpeed::ALL.len())];
    let base_price = 95.0 + rng.random_range(0.0..15.0);

    QuoteRecord {
        windcode: format!("{}.IB", rng.random_range(100_000..1_000_000)),
        symbol_name: format!("{} {:02}", bond_type, rng.random_range(0..100)),
        bond_type: bond_type.to_string(),
        trade_exchange: exchange.to_string(),
        issuer_name: format!("Issuer {:03}", rng.random_range(0..1000)),

        current_price: base_price,
        buy_net_price: None,
        sell_net_price: None,
        net_price_csi: None,

        buy_ytm: None,
        sell_ytm: None,
        yield_csi: 1.0 + rng.random_range(0.0..4.0),
        gjsyl: None,

        buy_ytmdiff: None,
        sell_ytmdiff: None,
        buy_ytm_diff_csi: None,
        sell_ytm_diff_csi: None,

        buy_amount: None,
        sell_amount: None,
        holding_amount: None,

        residual_duration: None,
        residual_duration_str: None,
        end_date: None,
        narrow_matu: None,

        csi_credit_rating: None,
        cnbd_credit_rating: None,
        intergrade_bond: None,

        cur_coupon_rate: None,
        curve_deviation: None,
        settle_speed: Some(settle.to_string()),
        pa_zscore: None,
        risk_warning: None,

        has_position: false,
        has_symbol_position: false,
        bond_reserve_status: None,

        fix_wind_industry: None,
        sys_type: None,

        transact_time: timestamp_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pool_falls_back_to_random() {
        let generator = QuoteGenerator::from_pool(TemplatePool::default());
        let rec = generator.generate(1_000);
        assert!(!rec.windcode.is_empty());
        assert_eq!(rec.transact_time, 1_000);
        assert!(rec.current_price >= 95.0 && rec.current_price < 110.0);
        assert!(rec.yield_csi >= 1.0 && rec.yield_csi < 5.0);
    }

    #[test]
    fn test_batch_timestamps_strictly_increase() {
        let generator = QuoteGenerator::pure_random();
        let batch = generator.generate_batch(10, 5_000);
        assert_eq!(batch.len(), 10);
        for (i, rec) in batch.iter().enumerate() {
            assert_eq!(rec.transact_time, 5_000 + i as u64 * BATCH_STEP_MS);
        }
    }

    #[test]
    fn test_empty_batch_is_allowed() {
        let generator = QuoteGenerator::pure_random();
        assert!(generator.generate_batch(0, 0).is_empty());
    }

    #[test]
    fn test_template_statics_pass_through() {
        let pool =
            TemplatePool::parse_from_reader(crate::templates::tests_sample_json().as_bytes())
                .unwrap();
        let generator = QuoteGenerator::from_pool(pool);
        let rec = generator.generate(42);
        assert_eq!(rec.windcode, "210215.IB");
        assert_eq!(rec.bond_type, "Treasury");
        assert_eq!(rec.csi_credit_rating.as_deref(), Some("AAA"));
        assert_eq!(rec.settle_speed.as_deref(), Some("T+1"));
        assert_eq!(rec.transact_time, 42);
        // Perturbed fields stay near their bases.
        let buy = rec.buy_net_price.unwrap();
        assert!((buy - 101.20).abs() <= 0.5);
        assert!((rec.yield_csi - 2.30).abs() <= 0.025);
    }

    #[test]
    fn test_batch_plan_sizes() {
        assert_eq!(BatchPlan::Fixed(7).next_size(), 7);
        for _ in 0..20 {
            let n = BatchPlan::Jitter { min: 3, max: 5 }.next_size();
            assert!((3..=5).contains(&n));
        }
    }

    #[test]
    fn test_default_batch_size_tracks_pool() {
        assert_eq!(QuoteGenerator::pure_random().default_batch_size(), 43);
        let pool =
            TemplatePool::parse_from_reader(crate::templates::tests_sample_json().as_bytes())
                .unwrap();
        assert_eq!(QuoteGenerator::from_pool(pool).default_batch_size(), 1);
    }
}
