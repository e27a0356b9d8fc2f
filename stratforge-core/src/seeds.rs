//! Seed strategies — named built-in strategy examples.
//!
//! Seeds serve two purposes: they give the export pipeline something real to
//! chew on without an upstream LLM, and they document what a fully-populated
//! DSL looks like. Every seed validates cleanly by construction.

use crate::dsl::{
    Condition, Distance, EntryType, Filters, Indicator, ParamValue, RiskManagement, StrategyDsl,
};

/// Named built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStrategy {
    GoldBreakout,
    GoldMeanReversion,
    GoldTrendMomentum,
}

fn ind(name: &str, params: &[(&str, f64)]) -> Indicator {
    Indicator {
        name: name.into(),
        params: params
            .iter()
            .map(|(k, v)| (k.to_string(), ParamValue::Number(*v)))
            .collect(),
    }
}

fn cond(description: &str, expression: &str) -> Condition {
    Condition {
        description: description.into(),
        expression: expression.into(),
    }
}

fn gold_sessions() -> Filters {
    Filters {
        sessions: Some(vec!["London".into(), "NewYork".into()]),
        news_filter: false,
    }
}

fn atr_risk(sl: &str, tp: &str) -> RiskManagement {
    RiskManagement {
        risk_percent: 1.0,
        stop_loss: Distance::Formula(sl.into()),
        take_profit: Distance::Formula(tp.into()),
        risk_reward_ratio: None,
    }
}

impl SeedStrategy {
    /// All seeds in listing order.
    pub fn all() -> &'static [SeedStrategy] {
        &[
            Self::GoldBreakout,
            Self::GoldMeanReversion,
            Self::GoldTrendMomentum,
        ]
    }

    /// Stable CLI name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GoldBreakout => "gold_breakout",
            Self::GoldMeanReversion => "gold_mean_reversion",
            Self::GoldTrendMomentum => "gold_trend_momentum",
        }
    }

    /// Parse a CLI name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.name() == name)
    }

    /// Build the full strategy DSL for this seed.
    pub fn to_dsl(&self) -> StrategyDsl {
        match self {
            Self::GoldBreakout => StrategyDsl {
                name: "Gold Support Resistance Breakout".into(),
                description: "Multi-timeframe support/resistance breakout with RSI confirmation"
                    .into(),
                symbols: vec!["XAUUSD".into()],
                timeframe: "H1".into(),
                indicators: vec![
                    ind("EMA", &[("length", 21.0)]),
                    ind("RSI", &[("length", 14.0)]),
                    ind("ATR", &[("length", 14.0)]),
                    ind("Bollinger", &[("length", 20.0), ("mult", 2.0)]),
                ],
                entries: vec![
                    cond(
                        "Long: Price breaks above BB upper with RSI momentum",
                        "price.close > bb_upper(20, 2) and rsi(14) > 60 and price.close > ema(21)",
                    ),
                    cond(
                        "Short: Price breaks below BB lower with RSI momentum",
                        "price.close < bb_lower(20, 2) and rsi(14) < 40 and price.close < ema(21)",
                    ),
                ],
                exits: vec![cond(
                    "Exit on opposite signal or EMA recross",
                    "cross(price.close, ema(21)) != 0",
                )],
                entry_type: EntryType::Market,
                filters: gold_sessions(),
                risk: atr_risk("atr(14) * 1.5", "atr(14) * 3"),
            },
            Self::GoldMeanReversion => StrategyDsl {
                name: "Gold Mean Reversion Scalper".into(),
                description: "RSI oversold/overbought with Bollinger Band mean reversion".into(),
                symbols: vec!["XAUUSD".into()],
                timeframe: "H1".into(),
                indicators: vec![
                    ind("RSI", &[("length", 14.0)]),
                    ind("Bollinger", &[("length", 20.0), ("mult", 2.0)]),
                    ind("EMA", &[("length", 50.0)]),
                    ind("Stochastic", &[("k", 14.0), ("d", 3.0)]),
                ],
                entries: vec![
                    cond(
                        "Long: Oversold bounce from BB lower",
                        "rsi(14) < 25 and price.close <= bb_lower(20, 2) and stoch_k(14, 3) < 20 and price.close > lowest(price.low, 5)",
                    ),
                    cond(
                        "Short: Overbought rejection from BB upper",
                        "rsi(14) > 75 and price.close >= bb_upper(20, 2) and stoch_k(14, 3) > 80 and price.close < highest(price.high, 5)",
                    ),
                ],
                exits: vec![cond(
                    "Exit at middle BB or RSI neutrality",
                    "cross(price.close, bb_basis(20, 2)) != 0 or (rsi(14) > 45 and rsi(14) < 55)",
                )],
                entry_type: EntryType::Market,
                filters: gold_sessions(),
                risk: atr_risk("atr(14) * 2", "atr(14) * 2.5"),
            },
            Self::GoldTrendMomentum => StrategyDsl {
                name: "Gold Trend Momentum Beast".into(),
                description: "Multi-EMA trend following with MACD and volume confirmation".into(),
                symbols: vec!["XAUUSD".into()],
                timeframe: "H1".into(),
                indicators: vec![
                    ind("EMA", &[("length", 9.0)]),
                    ind("EMA", &[("length", 21.0)]),
                    ind("EMA", &[("length", 50.0)]),
                    ind("MACD", &[("fast", 12.0), ("slow", 26.0), ("signal", 9.0)]),
                    ind("Volume", &[("length", 20.0)]),
                    ind("ATR", &[("length", 14.0)]),
                ],
                entries: vec![
                    cond(
                        "Long: EMA alignment + MACD bullish + volume surge",
                        "ema(9) > ema(21) and ema(21) > ema(50) and crossover(macd_line(), macd_signal()) and volume > volume_sma(20) * 1.2",
                    ),
                    cond(
                        "Short: EMA bearish alignment + MACD bearish + volume surge",
                        "ema(9) < ema(21) and ema(21) < ema(50) and crossunder(macd_line(), macd_signal()) and volume > volume_sma(20) * 1.2",
                    ),
                ],
                exits: vec![cond(
                    "Exit on MACD signal cross or EMA misalignment",
                    "cross(macd_line(), macd_signal()) != 0 or cross(ema(9), ema(21)) != 0",
                )],
                entry_type: EntryType::Market,
                filters: gold_sessions(),
                risk: atr_risk("atr(14) * 1.8", "atr(14) * 4"),
            },
        }
    }
}
