//! Configuration resolver — symbol + optional overrides to a full config.
//!
//! Precedence chain, highest first:
//! 1. caller-supplied override fields (used verbatim, never merged key-by-key)
//! 2. exact uppercased-symbol table entry
//! 3. category table entry via classification
//! 4. precious-metals alias: the canonical XAUUSD symbol entry stands in when
//!    a metal has no exact entry (a deliberate one-off, not a generic rule)
//! 5. `None` — the caller must supply its own configuration
//!
//! A resolution miss is the `None` value, not an error.

use crate::category::{classify, Category};
use crate::defaults::{DefaultsTable, CANONICAL_METALS_SYMBOL};
use crate::optimize::{
    Constraints, GaSettings, MarketDefaults, ObjectiveWeights, OptimizationConfig, ParameterSpace,
};

/// Caller-supplied replacements for individual config fields.
///
/// Each present field fully replaces the corresponding default — a supplied
/// `parameters` map is used as-is, it does not overlay individual keys onto
/// the table's map. The four fields are independent: overriding one leaves
/// the others to resolve from the tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub parameters: Option<ParameterSpace>,
    pub ga: Option<GaSettings>,
    pub objective_weights: Option<ObjectiveWeights>,
    pub constraints: Option<Constraints>,
}

impl ConfigOverrides {
    /// True when every field is supplied and no table lookup is needed.
    pub fn is_complete(&self) -> bool {
        self.parameters.is_some()
            && self.ga.is_some()
            && self.objective_weights.is_some()
            && self.constraints.is_some()
    }
}

/// Resolves optimization configs against injected read-only tables.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    tables: &'a DefaultsTable,
}

impl<'a> Resolver<'a> {
    pub fn new(tables: &'a DefaultsTable) -> Self {
        Self { tables }
    }

    /// Resolve a full `OptimizationConfig`, or `None` when no defaults apply.
    ///
    /// With no symbol, only fully-explicit overrides yield a config. With a
    /// symbol, a matching table record fills every field the caller did not
    /// override; no match at all is a miss even under partial overrides.
    pub fn resolve(
        &self,
        symbol: Option<&str>,
        overrides: &ConfigOverrides,
    ) -> Option<OptimizationConfig> {
        if let ConfigOverrides {
            parameters: Some(parameters),
            ga: Some(ga),
            objective_weights: Some(objective_weights),
            constraints: Some(constraints),
        } = overrides
        {
            return Some(OptimizationConfig {
                parameters: parameters.clone(),
                ga: *ga,
                objective_weights: objective_weights.clone(),
                constraints: constraints.clone(),
            });
        }

        let symbol = symbol?;
        let record = self.lookup(symbol)?;

        Some(OptimizationConfig {
            parameters: overrides
                .parameters
                .clone()
                .unwrap_or_else(|| record.parameters.clone()),
            ga: overrides.ga.unwrap_or(record.ga),
            objective_weights: overrides
                .objective_weights
                .clone()
                .unwrap_or_else(|| record.objective_weights.clone()),
            constraints: overrides
                .constraints
                .clone()
                .unwrap_or_else(|| record.constraints.clone()),
        })
    }

    /// Convenience: resolve with no overrides.
    pub fn resolve_symbol(&self, symbol: &str) -> Option<OptimizationConfig> {
        self.resolve(Some(symbol), &ConfigOverrides::default())
    }

    /// Table lookup half of the chain: exact symbol, then category, then the
    /// precious-metals alias.
    fn lookup(&self, symbol: &str) -> Option<&'a MarketDefaults> {
        if let Some(record) = self.tables.symbol(symbol) {
            return Some(record);
        }

        let category = classify(symbol)?;
        if let Some(record) = self.tables.category(category) {
            return Some(record);
        }

        // Alias, not a generic fallback: metals without their own entry
        // borrow the canonical symbol's record.
        if category == Category::PreciousMetals {
            return self.tables.symbol(CANONICAL_METALS_SYMBOL);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimize::Range;

    fn table() -> DefaultsTable {
        DefaultsTable::builtin()
    }

    fn override_params() -> ParameterSpace {
        [("custom_knob".to_string(), Range::new(1.0, 9.0, 1.0))]
            .into_iter()
            .collect()
    }

    // ── Overrides completeness ──────────────────────────────────

    #[test]
    fn is_complete_requires_all_four_fields() {
        assert!(!ConfigOverrides::default().is_complete());
        let table = table();
        let full = Resolver::new(&table).resolve_symbol("XAUUSD").unwrap();
        let overrides = ConfigOverrides {
            parameters: Some(full.parameters),
            ga: Some(full.ga),
            objective_weights: Some(full.objective_weights),
            constraints: Some(full.constraints),
        };
        assert!(overrides.is_complete());
    }

    // ── Exact symbol ────────────────────────────────────────────

    #[test]
    fn xauusd_resolves_from_exact_entry() {
        let table = table();
        let config = Resolver::new(&table).resolve_symbol("XAUUSD").unwrap();
        assert_eq!(config.ga.population_size, 150);
        assert_eq!(config.constraints["minimum_trades"], 50.0);
    }

    #[test]
    fn symbol_lookup_is_case_insensitive() {
        let table = table();
        let resolver = Resolver::new(&table);
        assert_eq!(
            resolver.resolve_symbol("xauusd"),
            resolver.resolve_symbol("XAUUSD")
        );
    }

    // ── Category fallback ───────────────────────────────────────

    #[test]
    fn eurusd_resolves_from_forex_majors_category() {
        let table = table();
        let config = Resolver::new(&table).resolve_symbol("EURUSD").unwrap();
        assert_eq!(config.ga.population_size, 120);
        assert_eq!(config.constraints["minimum_trades"], 60.0);
    }

    #[test]
    fn btcusdt_resolves_from_crypto_majors_category() {
        let table = table();
        let config = Resolver::new(&table).resolve_symbol("BTCUSDT").unwrap();
        assert_eq!(config.ga.population_size, 200);
    }

    // ── Precious-metals alias ───────────────────────────────────

    #[test]
    fn xagusd_aliases_to_xauusd_entry() {
        let table = table();
        let resolver = Resolver::new(&table);
        assert_eq!(
            resolver.resolve_symbol("XAGUSD"),
            resolver.resolve_symbol("XAUUSD")
        );
    }

    #[test]
    fn alias_only_applies_without_exact_entry() {
        // Give silver its own entry; the alias must not shadow it.
        let builtin = DefaultsTable::builtin();
        let mut silver = builtin.symbol("XAUUSD").unwrap().clone();
        silver.ga.population_size = 99;
        let table = DefaultsTable::new(
            [
                ("XAUUSD".to_string(), builtin.symbol("XAUUSD").unwrap().clone()),
                ("XAGUSD".to_string(), silver),
            ],
            [],
        );

        let config = Resolver::new(&table).resolve_symbol("XAGUSD").unwrap();
        assert_eq!(config.ga.population_size, 99);
    }

    // ── Misses ──────────────────────────────────────────────────

    #[test]
    fn absent_symbol_is_a_miss() {
        let table = table();
        let result = Resolver::new(&table).resolve(None, &ConfigOverrides::default());
        assert_eq!(result, None);
    }

    #[test]
    fn unknown_symbol_is_a_miss() {
        let table = table();
        assert_eq!(Resolver::new(&table).resolve_symbol("ZZZZZZ"), None);
    }

    #[test]
    fn partial_overrides_cannot_rescue_a_miss() {
        let table = table();
        let overrides = ConfigOverrides {
            parameters: Some(override_params()),
            ..Default::default()
        };
        assert_eq!(
            Resolver::new(&table).resolve(Some("ZZZZZZ"), &overrides),
            None
        );
        assert_eq!(Resolver::new(&table).resolve(None, &overrides), None);
    }

    // ── Overrides ───────────────────────────────────────────────

    #[test]
    fn complete_overrides_need_no_symbol() {
        let table = table();
        let full = Resolver::new(&table).resolve_symbol("XAUUSD").unwrap();
        let overrides = ConfigOverrides {
            parameters: Some(full.parameters.clone()),
            ga: Some(full.ga),
            objective_weights: Some(full.objective_weights.clone()),
            constraints: Some(full.constraints.clone()),
        };

        let config = Resolver::new(&table).resolve(None, &overrides).unwrap();
        assert_eq!(config, full);
    }

    #[test]
    fn explicit_field_replaces_wholesale_not_key_by_key() {
        let table = table();
        let overrides = ConfigOverrides {
            parameters: Some(override_params()),
            ..Default::default()
        };

        let config = Resolver::new(&table)
            .resolve(Some("XAUUSD"), &overrides)
            .unwrap();

        // The override map replaces the 19-key default map entirely.
        assert_eq!(config.parameters.len(), 1);
        assert!(config.parameters.contains_key("custom_knob"));
        assert!(!config.parameters.contains_key("rsi_length"));
        // Untouched fields still come from the exact-symbol entry.
        assert_eq!(config.ga.population_size, 150);
    }

    #[test]
    fn fields_resolve_independently_under_partial_override() {
        let table = table();
        let custom_ga = GaSettings {
            population_size: 42,
            generations: 10,
            crossover_rate: 0.5,
            mutation_rate: 0.05,
            elite_percentage: 0.2,
        };
        let overrides = ConfigOverrides {
            ga: Some(custom_ga),
            ..Default::default()
        };

        let config = Resolver::new(&table)
            .resolve(Some("EURUSD"), &overrides)
            .unwrap();

        assert_eq!(config.ga, custom_ga);
        // Remaining fields come from the forex-majors category entry.
        assert_eq!(config.constraints["minimum_trades"], 60.0);
        assert!(config.parameters.contains_key("ema_fast_length"));
    }

    // ── Freshness ───────────────────────────────────────────────

    #[test]
    fn each_resolution_returns_an_independent_config() {
        let table = table();
        let resolver = Resolver::new(&table);
        let mut first = resolver.resolve_symbol("XAUUSD").unwrap();
        first.constraints.insert("minimum_trades".into(), 1.0);

        let second = resolver.resolve_symbol("XAUUSD").unwrap();
        assert_eq!(second.constraints["minimum_trades"], 50.0);
    }
}
