//! Validation — untrusted payload in, `StrategyDsl` out.
//!
//! The validator is the only way to construct a `StrategyDsl` from external
//! input. It applies the documented field defaults, collects every violation
//! (not just the first) keyed by field path, and performs no semantic checks
//! on expression strings or indicator params — those are forward-compatible
//! pass-through by policy.
//!
//! Two phases: a lenient mirror of the wire shape is deserialized first, then
//! field constraints are checked against it while the validated form is built.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::dsl::{
    Condition, Distance, EntryType, Filters, Indicator, ParamValue, RiskManagement, StrategyDsl,
};

/// One field-level violation, keyed by the wire-format field path.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Violation {
    /// Dotted path into the payload, e.g. `risk.riskPercent` or `entries[2].expression`.
    pub path: String,
    pub message: String,
}

/// The payload does not conform to the DSL shape or its field constraints.
///
/// Always recoverable: the caller fixes the input and retries.
#[derive(Debug, thiserror::Error)]
#[error("strategy payload failed validation: {}", summary(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.path, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

// ─── Lenient wire mirror ────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStrategy {
    name: Option<String>,
    description: Option<String>,
    symbols: Option<Vec<String>>,
    timeframe: Option<String>,
    #[serde(default)]
    indicators: Vec<RawIndicator>,
    #[serde(default)]
    entries: Vec<RawCondition>,
    #[serde(default)]
    exits: Vec<RawCondition>,
    entry_type: Option<String>,
    filters: Option<RawFilters>,
    risk: Option<RawRisk>,
}

#[derive(Deserialize)]
struct RawIndicator {
    name: Option<String>,
    #[serde(default)]
    params: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
struct RawCondition {
    description: Option<String>,
    expression: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFilters {
    sessions: Option<Vec<String>>,
    news_filter: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRisk {
    risk_percent: Option<f64>,
    stop_loss: Option<Distance>,
    take_profit: Option<Distance>,
    risk_reward_ratio: Option<f64>,
}

// ─── Validation ─────────────────────────────────────────────────────

/// Validate an untrusted payload into a `StrategyDsl`.
///
/// Fills the documented defaults for every optional field; `name` is the only
/// required one. Pure function: no I/O, no state.
pub fn validate(raw: &Value) -> Result<StrategyDsl, ValidationError> {
    let raw: RawStrategy = match RawStrategy::deserialize(raw) {
        Ok(r) => r,
        Err(e) => {
            return Err(ValidationError {
                violations: vec![Violation {
                    path: "$".into(),
                    message: e.to_string(),
                }],
            })
        }
    };

    let mut violations = Vec::new();

    let name = raw.name.unwrap_or_default();
    if name.is_empty() {
        violations.push(Violation {
            path: "name".into(),
            message: "must be a non-empty string".into(),
        });
    }

    let symbols = raw.symbols.unwrap_or_else(|| vec!["XAUUSD".into()]);
    if symbols.is_empty() {
        violations.push(Violation {
            path: "symbols".into(),
            message: "must contain at least one symbol".into(),
        });
    }

    let entry_type = match raw.entry_type.as_deref() {
        None | Some("market") => EntryType::Market,
        Some(other) => {
            violations.push(Violation {
                path: "entryType".into(),
                message: format!("unknown entry type '{other}' (expected: market)"),
            });
            EntryType::Market
        }
    };

    let indicators = collect_indicators(raw.indicators, &mut violations);
    let entries = collect_conditions("entries", raw.entries, &mut violations);
    let exits = collect_conditions("exits", raw.exits, &mut violations);

    let filters = match raw.filters {
        Some(f) => Filters {
            sessions: f.sessions,
            news_filter: f.news_filter.unwrap_or(false),
        },
        None => Filters::default(),
    };

    let risk = build_risk(raw.risk, &mut violations);

    if !violations.is_empty() {
        return Err(ValidationError { violations });
    }

    Ok(StrategyDsl {
        name,
        description: raw.description.unwrap_or_default(),
        symbols,
        timeframe: raw.timeframe.unwrap_or_else(|| "H1".into()),
        indicators,
        entries,
        exits,
        entry_type,
        filters,
        risk,
    })
}

fn collect_indicators(raw: Vec<RawIndicator>, violations: &mut Vec<Violation>) -> Vec<Indicator> {
    let mut out = Vec::with_capacity(raw.len());
    for (i, ind) in raw.into_iter().enumerate() {
        let name = ind.name.unwrap_or_default();
        if name.is_empty() {
            violations.push(Violation {
                path: format!("indicators[{i}].name"),
                message: "missing required string field".into(),
            });
        }

        let mut params = BTreeMap::new();
        for (key, value) in ind.params {
            match param_value(&value) {
                Some(v) => {
                    params.insert(key, v);
                }
                None => violations.push(Violation {
                    path: format!("indicators[{i}].params.{key}"),
                    message: "must be a number, string, or boolean".into(),
                }),
            }
        }

        out.push(Indicator { name, params });
    }
    out
}

fn param_value(value: &Value) -> Option<ParamValue> {
    match value {
        Value::Bool(b) => Some(ParamValue::Flag(*b)),
        Value::Number(n) => n.as_f64().map(ParamValue::Number),
        Value::String(s) => Some(ParamValue::Text(s.clone())),
        _ => None,
    }
}

fn collect_conditions(
    field: &str,
    raw: Vec<RawCondition>,
    violations: &mut Vec<Violation>,
) -> Vec<Condition> {
    let mut out = Vec::with_capacity(raw.len());
    for (i, cond) in raw.into_iter().enumerate() {
        if cond.description.is_none() {
            violations.push(Violation {
                path: format!("{field}[{i}].description"),
                message: "missing required string field".into(),
            });
        }
        if cond.expression.is_none() {
            violations.push(Violation {
                path: format!("{field}[{i}].expression"),
                message: "missing required string field".into(),
            });
        }
        out.push(Condition {
            description: cond.description.unwrap_or_default(),
            expression: cond.expression.unwrap_or_default(),
        });
    }
    out
}

fn build_risk(raw: Option<RawRisk>, violations: &mut Vec<Violation>) -> RiskManagement {
    let Some(raw) = raw else {
        return RiskManagement::default();
    };

    let risk_percent = raw.risk_percent.unwrap_or(1.0);
    if !(0.0..=100.0).contains(&risk_percent) {
        violations.push(Violation {
            path: "risk.riskPercent".into(),
            message: format!("must be in [0, 100], got {risk_percent}"),
        });
    }

    if let Some(ratio) = raw.risk_reward_ratio {
        if ratio <= 0.0 {
            violations.push(Violation {
                path: "risk.riskRewardRatio".into(),
                message: format!("must be positive, got {ratio}"),
            });
        }
    }

    RiskManagement {
        risk_percent,
        stop_loss: raw.stop_loss.unwrap_or(Distance::Points(60.0)),
        take_profit: raw.take_profit.unwrap_or(Distance::Points(120.0)),
        risk_reward_ratio: raw.risk_reward_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(err: &ValidationError) -> Vec<&str> {
        err.violations.iter().map(|v| v.path.as_str()).collect()
    }

    // ── Defaults ────────────────────────────────────────────────

    #[test]
    fn minimal_payload_fills_every_default() {
        let dsl = validate(&json!({ "name": "Bare" })).unwrap();
        assert_eq!(dsl.name, "Bare");
        assert_eq!(dsl.description, "");
        assert_eq!(dsl.symbols, vec!["XAUUSD".to_string()]);
        assert_eq!(dsl.timeframe, "H1");
        assert!(dsl.indicators.is_empty());
        assert!(dsl.entries.is_empty());
        assert!(dsl.exits.is_empty());
        assert_eq!(dsl.entry_type, EntryType::Market);
        assert_eq!(dsl.filters, Filters::default());
        assert_eq!(dsl.risk.risk_percent, 1.0);
        assert_eq!(dsl.risk.stop_loss, Distance::Points(60.0));
        assert_eq!(dsl.risk.take_profit, Distance::Points(120.0));
        assert_eq!(dsl.risk.risk_reward_ratio, None);
    }

    #[test]
    fn partial_risk_block_keeps_remaining_defaults() {
        let dsl = validate(&json!({
            "name": "Partial",
            "risk": { "riskPercent": 2.5 }
        }))
        .unwrap();
        assert_eq!(dsl.risk.risk_percent, 2.5);
        assert_eq!(dsl.risk.stop_loss, Distance::Points(60.0));
        assert_eq!(dsl.risk.take_profit, Distance::Points(120.0));
    }

    // ── Rejections ──────────────────────────────────────────────

    #[test]
    fn missing_name_rejected() {
        let err = validate(&json!({})).unwrap_err();
        assert_eq!(paths(&err), vec!["name"]);
    }

    #[test]
    fn empty_name_rejected() {
        let err = validate(&json!({ "name": "" })).unwrap_err();
        assert_eq!(paths(&err), vec!["name"]);
    }

    #[test]
    fn empty_symbols_rejected() {
        let err = validate(&json!({ "name": "S", "symbols": [] })).unwrap_err();
        assert_eq!(paths(&err), vec!["symbols"]);
    }

    #[test]
    fn risk_percent_out_of_bounds_rejected() {
        let err = validate(&json!({
            "name": "S",
            "risk": { "riskPercent": 150 }
        }))
        .unwrap_err();
        assert_eq!(paths(&err), vec!["risk.riskPercent"]);
    }

    #[test]
    fn non_positive_risk_reward_ratio_rejected() {
        let err = validate(&json!({
            "name": "S",
            "risk": { "riskRewardRatio": 0 }
        }))
        .unwrap_err();
        assert_eq!(paths(&err), vec!["risk.riskRewardRatio"]);
    }

    #[test]
    fn unknown_entry_type_rejected() {
        let err = validate(&json!({ "name": "S", "entryType": "limit" })).unwrap_err();
        assert_eq!(paths(&err), vec!["entryType"]);
    }

    #[test]
    fn indicator_missing_name_rejected() {
        let err = validate(&json!({
            "name": "S",
            "indicators": [{ "params": { "length": 14 } }]
        }))
        .unwrap_err();
        assert_eq!(paths(&err), vec!["indicators[0].name"]);
    }

    #[test]
    fn condition_missing_fields_rejected_with_indexed_paths() {
        let err = validate(&json!({
            "name": "S",
            "entries": [
                { "description": "ok", "expression": "rsi(14) < 30" },
                { "description": "no expression" }
            ]
        }))
        .unwrap_err();
        assert_eq!(paths(&err), vec!["entries[1].expression"]);
    }

    #[test]
    fn violations_accumulate() {
        let err = validate(&json!({
            "name": "",
            "symbols": [],
            "risk": { "riskPercent": -5 }
        }))
        .unwrap_err();
        assert_eq!(paths(&err), vec!["name", "symbols", "risk.riskPercent"]);
    }

    #[test]
    fn non_object_payload_rejected() {
        let err = validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].path, "$");
    }

    // ── Pass-through policy ─────────────────────────────────────

    #[test]
    fn unknown_indicator_names_and_extra_params_pass_through() {
        let dsl = validate(&json!({
            "name": "S",
            "indicators": [{
                "name": "MadeUpOscillator",
                "params": { "length": 14, "mode": "fast", "smooth": true }
            }]
        }))
        .unwrap();
        let ind = &dsl.indicators[0];
        assert_eq!(ind.name, "MadeUpOscillator");
        assert_eq!(ind.params["length"], ParamValue::Number(14.0));
        assert_eq!(ind.params["mode"], ParamValue::Text("fast".into()));
        assert_eq!(ind.params["smooth"], ParamValue::Flag(true));
    }

    #[test]
    fn expressions_are_not_interpreted() {
        let dsl = validate(&json!({
            "name": "S",
            "entries": [{ "description": "garbage in", "expression": ")(not parseable" }]
        }))
        .unwrap();
        assert_eq!(dsl.entries[0].expression, ")(not parseable");
    }

    #[test]
    fn formula_distances_survive_validation() {
        let dsl = validate(&json!({
            "name": "S",
            "risk": { "stopLoss": "atr(14) * 1.5", "takeProfit": 120 }
        }))
        .unwrap();
        assert_eq!(dsl.risk.stop_loss, Distance::Formula("atr(14) * 1.5".into()));
        assert_eq!(dsl.risk.take_profit, Distance::Points(120.0));
    }
}
