//! Built-in defaults tables — per-symbol and per-category tuning data.
//!
//! The tables are configuration data baked in at process start. This module
//! defines their shape and the built-in content; the resolver takes a
//! `&DefaultsTable` rather than reaching for globals, so tests can substitute
//! their own tables.

use std::collections::HashMap;

use crate::category::Category;
use crate::optimize::{Constraints, GaSettings, MarketDefaults, ObjectiveWeights, ParameterSpace, Range};

/// The single symbol whose entry doubles as the precious-metals fallback.
pub const CANONICAL_METALS_SYMBOL: &str = "XAUUSD";

/// Read-only lookup tables for the resolver.
///
/// Symbol keys are stored uppercased; lookups go through [`DefaultsTable::symbol`]
/// which uppercases, so access is case-insensitive.
#[derive(Debug, Clone)]
pub struct DefaultsTable {
    symbols: HashMap<String, MarketDefaults>,
    categories: HashMap<Category, MarketDefaults>,
}

impl DefaultsTable {
    /// Build a table from explicit entries. Symbol keys are uppercased.
    pub fn new(
        symbols: impl IntoIterator<Item = (String, MarketDefaults)>,
        categories: impl IntoIterator<Item = (Category, MarketDefaults)>,
    ) -> Self {
        Self {
            symbols: symbols
                .into_iter()
                .map(|(k, v)| (k.to_uppercase(), v))
                .collect(),
            categories: categories.into_iter().collect(),
        }
    }

    /// Exact-symbol entry, case-insensitive.
    pub fn symbol(&self, symbol: &str) -> Option<&MarketDefaults> {
        self.symbols.get(&symbol.to_uppercase())
    }

    /// Category entry.
    pub fn category(&self, category: Category) -> Option<&MarketDefaults> {
        self.categories.get(&category)
    }

    /// The built-in table shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(
            [(CANONICAL_METALS_SYMBOL.to_string(), xauusd_defaults())],
            [
                (Category::ForexMajors, forex_majors_defaults()),
                (Category::ForexExotics, forex_exotics_defaults()),
                (Category::CryptoMajors, crypto_majors_defaults()),
                (Category::CryptoAlts, crypto_alts_defaults()),
                (Category::FuturesIndices, futures_indices_defaults()),
                (Category::FuturesCommodities, futures_commodities_defaults()),
            ],
        )
    }
}

// ─── Shared pieces ──────────────────────────────────────────────────

fn params(pairs: &[(&str, Range)]) -> ParameterSpace {
    pairs.iter().map(|(k, r)| (k.to_string(), *r)).collect()
}

fn weights(pairs: &[(&str, f64)]) -> ObjectiveWeights {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn constraints(pairs: &[(&str, f64)]) -> Constraints {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn range(min: f64, max: f64, step: f64) -> Range {
    Range::new(min, max, step)
}

/// All entries share the same objective: blended profit quality, drawdown
/// penalized (negative weight = minimize).
fn default_objective() -> ObjectiveWeights {
    weights(&[
        ("profit_factor", 0.35),
        ("sharpe_ratio", 0.30),
        ("max_drawdown", -0.20),
        ("win_rate", 0.10),
        ("trade_frequency", 0.05),
    ])
}

// ─── Per-symbol: XAUUSD ─────────────────────────────────────────────

fn xauusd_defaults() -> MarketDefaults {
    MarketDefaults {
        parameters: params(&[
            // Trend
            ("ema_fast_length", range(5.0, 15.0, 1.0)),
            ("ema_medium_length", range(18.0, 35.0, 1.0)),
            ("ema_slow_length", range(45.0, 80.0, 2.0)),
            // Momentum
            ("rsi_length", range(10.0, 21.0, 1.0)),
            ("rsi_oversold", range(20.0, 35.0, 1.0)),
            ("rsi_overbought", range(65.0, 80.0, 1.0)),
            ("stochastic_k", range(10.0, 18.0, 1.0)),
            ("stochastic_oversold", range(15.0, 25.0, 1.0)),
            ("stochastic_overbought", range(75.0, 85.0, 1.0)),
            // Volatility
            ("atr_length", range(10.0, 20.0, 1.0)),
            ("atr_sl_multiplier", range(1.2, 2.5, 0.1)),
            ("atr_tp_multiplier", range(2.0, 5.0, 0.2)),
            ("bb_length", range(16.0, 25.0, 1.0)),
            ("bb_deviation", range(1.8, 2.5, 0.1)),
            // Additional
            ("macd_fast", range(10.0, 15.0, 1.0)),
            ("macd_slow", range(22.0, 30.0, 1.0)),
            ("macd_signal", range(8.0, 12.0, 1.0)),
            ("volume_surge_multiplier", range(1.1, 1.8, 0.1)),
            ("lookback_period", range(3.0, 8.0, 1.0)),
        ]),
        ga: GaSettings {
            population_size: 150,
            generations: 80,
            crossover_rate: 0.75,
            mutation_rate: 0.15,
            elite_percentage: 0.1,
        },
        objective_weights: default_objective(),
        constraints: constraints(&[
            ("minimum_trades", 50.0),
            ("max_drawdown_cap", 25.0),
            ("minimum_win_rate", 40.0),
            ("minimum_profit_factor", 1.3),
            ("maximum_consecutive_losses", 8.0),
            ("minimum_sharpe_ratio", 0.8),
        ]),
    }
}

// ─── Per-category entries ───────────────────────────────────────────

fn forex_majors_defaults() -> MarketDefaults {
    MarketDefaults {
        parameters: params(&[
            ("ema_fast_length", range(8.0, 21.0, 1.0)),
            ("ema_medium_length", range(25.0, 50.0, 2.0)),
            ("ema_slow_length", range(80.0, 200.0, 5.0)),
            ("rsi_length", range(12.0, 18.0, 1.0)),
            ("rsi_oversold", range(25.0, 35.0, 1.0)),
            ("rsi_overbought", range(65.0, 75.0, 1.0)),
            ("stochastic_oversold", range(18.0, 25.0, 1.0)),
            ("stochastic_overbought", range(75.0, 82.0, 1.0)),
            ("atr_sl_multiplier", range(1.0, 2.0, 0.1)),
            ("atr_tp_multiplier", range(1.8, 3.5, 0.2)),
            ("bb_deviation", range(1.8, 2.2, 0.1)),
        ]),
        ga: GaSettings {
            population_size: 120,
            generations: 60,
            crossover_rate: 0.8,
            mutation_rate: 0.12,
            elite_percentage: 0.1,
        },
        objective_weights: default_objective(),
        constraints: constraints(&[
            ("minimum_trades", 60.0),
            ("max_drawdown_cap", 15.0),
            ("minimum_win_rate", 42.0),
            ("minimum_profit_factor", 1.4),
        ]),
    }
}

fn forex_exotics_defaults() -> MarketDefaults {
    MarketDefaults {
        parameters: params(&[
            ("ema_fast_length", range(6.0, 15.0, 1.0)),
            ("ema_medium_length", range(20.0, 35.0, 1.0)),
            ("ema_slow_length", range(50.0, 100.0, 3.0)),
            ("rsi_oversold", range(15.0, 30.0, 1.0)),
            ("rsi_overbought", range(70.0, 85.0, 1.0)),
            ("atr_sl_multiplier", range(1.8, 3.0, 0.2)),
            ("atr_tp_multiplier", range(2.5, 5.0, 0.3)),
        ]),
        ga: GaSettings {
            population_size: 180,
            generations: 85,
            crossover_rate: 0.75,
            mutation_rate: 0.18,
            elite_percentage: 0.1,
        },
        objective_weights: default_objective(),
        constraints: constraints(&[
            ("minimum_trades", 40.0),
            ("max_drawdown_cap", 30.0),
            ("minimum_win_rate", 38.0),
            ("minimum_profit_factor", 1.3),
        ]),
    }
}

fn crypto_majors_defaults() -> MarketDefaults {
    MarketDefaults {
        parameters: params(&[
            ("ema_fast_length", range(5.0, 12.0, 1.0)),
            ("ema_medium_length", range(15.0, 25.0, 1.0)),
            ("ema_slow_length", range(35.0, 65.0, 2.0)),
            ("rsi_length", range(9.0, 16.0, 1.0)),
            ("rsi_oversold", range(15.0, 25.0, 1.0)),
            ("rsi_overbought", range(75.0, 88.0, 1.0)),
            ("stochastic_oversold", range(10.0, 20.0, 1.0)),
            ("stochastic_overbought", range(80.0, 92.0, 1.0)),
            ("atr_sl_multiplier", range(2.0, 4.0, 0.2)),
            ("atr_tp_multiplier", range(3.0, 8.0, 0.5)),
            ("bb_deviation", range(2.2, 3.0, 0.1)),
        ]),
        ga: GaSettings {
            population_size: 200,
            generations: 100,
            crossover_rate: 0.7,
            mutation_rate: 0.22,
            elite_percentage: 0.1,
        },
        objective_weights: default_objective(),
        constraints: constraints(&[
            ("minimum_trades", 30.0),
            ("max_drawdown_cap", 40.0),
            ("minimum_win_rate", 35.0),
            ("minimum_profit_factor", 1.5),
        ]),
    }
}

fn crypto_alts_defaults() -> MarketDefaults {
    MarketDefaults {
        parameters: params(&[
            ("ema_fast_length", range(4.0, 10.0, 1.0)),
            ("ema_medium_length", range(12.0, 20.0, 1.0)),
            ("ema_slow_length", range(25.0, 45.0, 2.0)),
            ("rsi_oversold", range(10.0, 22.0, 1.0)),
            ("rsi_overbought", range(78.0, 95.0, 1.0)),
            ("atr_sl_multiplier", range(3.0, 6.0, 0.3)),
            ("atr_tp_multiplier", range(5.0, 12.0, 0.5)),
        ]),
        ga: GaSettings {
            population_size: 250,
            generations: 120,
            crossover_rate: 0.65,
            mutation_rate: 0.25,
            elite_percentage: 0.1,
        },
        objective_weights: default_objective(),
        constraints: constraints(&[
            ("minimum_trades", 25.0),
            ("max_drawdown_cap", 50.0),
            ("minimum_win_rate", 30.0),
            ("minimum_profit_factor", 2.0),
        ]),
    }
}

fn futures_indices_defaults() -> MarketDefaults {
    MarketDefaults {
        parameters: params(&[
            ("ema_fast_length", range(8.0, 18.0, 1.0)),
            ("ema_medium_length", range(25.0, 40.0, 2.0)),
            ("ema_slow_length", range(60.0, 150.0, 5.0)),
            ("rsi_oversold", range(20.0, 30.0, 1.0)),
            ("rsi_overbought", range(68.0, 78.0, 1.0)),
            ("atr_sl_multiplier", range(1.2, 2.2, 0.1)),
            ("atr_tp_multiplier", range(2.0, 4.0, 0.2)),
        ]),
        ga: GaSettings {
            population_size: 100,
            generations: 50,
            crossover_rate: 0.82,
            mutation_rate: 0.1,
            elite_percentage: 0.1,
        },
        objective_weights: default_objective(),
        constraints: constraints(&[
            ("minimum_trades", 50.0),
            ("max_drawdown_cap", 18.0),
            ("minimum_win_rate", 45.0),
            ("minimum_profit_factor", 1.4),
        ]),
    }
}

fn futures_commodities_defaults() -> MarketDefaults {
    MarketDefaults {
        parameters: params(&[
            ("ema_fast_length", range(6.0, 16.0, 1.0)),
            ("ema_medium_length", range(20.0, 35.0, 2.0)),
            ("ema_slow_length", range(50.0, 120.0, 5.0)),
            ("rsi_oversold", range(18.0, 32.0, 1.0)),
            ("rsi_overbought", range(68.0, 82.0, 1.0)),
            ("atr_sl_multiplier", range(1.5, 3.5, 0.2)),
            ("atr_tp_multiplier", range(2.2, 6.0, 0.3)),
        ]),
        ga: GaSettings {
            population_size: 150,
            generations: 70,
            crossover_rate: 0.78,
            mutation_rate: 0.15,
            elite_percentage: 0.1,
        },
        objective_weights: default_objective(),
        constraints: constraints(&[
            ("minimum_trades", 35.0),
            ("max_drawdown_cap", 25.0),
            ("minimum_win_rate", 40.0),
            ("minimum_profit_factor", 1.3),
        ]),
    }
}
