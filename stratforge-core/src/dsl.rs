//! Strategy DSL — the platform-independent intermediate representation.
//!
//! A `StrategyDsl` is the validated form of an untrusted strategy payload
//! (typically produced by an LLM or an import call upstream). It lives for
//! the duration of one request: the resolver and the emitter both consume it
//! by reference and neither persists it.
//!
//! Wire field names are the external camelCase JSON names (`riskPercent`,
//! `entryType`, ...) so a validated DSL round-trips byte-compatibly with the
//! payloads the HTTP boundary exchanges.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Content-addressable fingerprint of a validated DSL (blake3 hex).
pub type DslFingerprint = String;

/// A fully validated trading strategy, independent of any target platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDsl {
    /// Human-readable strategy name. Never empty after validation.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Instruments the strategy trades. Non-empty, order preserved.
    pub symbols: Vec<String>,

    /// Chart timeframe tag (e.g. "H1", "M15"). Opaque to this core.
    pub timeframe: String,

    /// Indicators the strategy references, order preserved.
    pub indicators: Vec<Indicator>,

    /// Entry conditions, order preserved.
    pub entries: Vec<Condition>,

    /// Exit conditions, order preserved.
    pub exits: Vec<Condition>,

    /// Order entry style. Only market entries are supported today.
    pub entry_type: EntryType,

    /// Session/news filters.
    pub filters: Filters,

    /// Risk management block.
    pub risk: RiskManagement,
}

impl StrategyDsl {
    /// Deterministic content hash of this strategy.
    ///
    /// Two identical strategies always hash the same: struct fields serialize
    /// in declaration order and indicator params are `BTreeMap`-ordered.
    pub fn fingerprint(&self) -> DslFingerprint {
        let json = serde_json::to_string(self).expect("StrategyDsl serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

/// One indicator reference with its parameters.
///
/// Unknown indicator names and extra params are allowed and passed through
/// unchanged — downstream engines decide what they understand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Indicator {
    pub name: String,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
}

/// An indicator parameter value: number, string, or flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ParamValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// One entry or exit condition.
///
/// `expression` is an opaque boolean-expression fragment interpreted only by
/// the external backtest engine; this core never parses or evaluates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    pub description: String,
    pub expression: String,
}

/// Order entry style.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    #[default]
    Market,
}

/// Session and news filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    /// Named trading sessions (e.g. "London", "NewYork"), order preserved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<String>>,

    /// Whether to suppress signals around news events.
    #[serde(default)]
    pub news_filter: bool,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            sessions: None,
            news_filter: false,
        }
    }
}

/// Risk management block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskManagement {
    /// Percent of account risked per trade, in [0, 100].
    pub risk_percent: f64,

    /// Stop-loss distance: literal points or an indicator formula.
    pub stop_loss: Distance,

    /// Take-profit distance: literal points or an indicator formula.
    pub take_profit: Distance,

    /// Optional reward/risk ratio helper. Strictly positive when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_reward_ratio: Option<f64>,
}

impl Default for RiskManagement {
    fn default() -> Self {
        Self {
            risk_percent: 1.0,
            stop_loss: Distance::Points(60.0),
            take_profit: Distance::Points(120.0),
            risk_reward_ratio: None,
        }
    }
}

/// A stop/target distance: either a literal number of points or an opaque
/// formula string like `"atr(14) * 1.5"`.
///
/// The formula is never parsed here — the external backtest engine owns the
/// expression grammar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Distance {
    Points(f64),
    Formula(String),
}
