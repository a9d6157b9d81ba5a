//! Instrument classification enums shared between the generator and frontends.
//!
//! Records carry these values as plain strings (the template data source is
//! free-form text), but the pure-random generation strategy draws from these
//! fixed sets, and frontends may parse the strings back when they need to
//! branch on a category.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Broad bond category used by the synthetic generator.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum BondType {
    Treasury,
    #[strum(serialize = "Policy Bank")]
    PolicyBank,
    Corporate,
    Financial,
}

impl BondType {
    /// All categories, for uniform random selection.
    pub const ALL: [BondType; 4] = [
        BondType::Treasury,
        BondType::PolicyBank,
        BondType::Corporate,
        BondType::Financial,
    ];
}

/// Trading venue of a quote.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Exchange {
    Interbank,
    SSE,
    SZSE,
}

impl Exchange {
    /// All venues, for uniform random selection.
    pub const ALL: [Exchange; 3] = [Exchange::Interbank, Exchange::SSE, Exchange::SZSE];
}

/// Settlement speed attached to a quote.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum SettleSpeed {
    #[strum(serialize = "T+0")]
    T0,
    #[strum(serialize = "T+1")]
    T1,
}

impl SettleSpeed {
    /// All settlement speeds, for uniform random selection.
    pub const ALL: [SettleSpeed; 2] = [SettleSpeed::T0, SettleSpeed::T1];
}
