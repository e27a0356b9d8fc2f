//! StratForge Core — Strategy DSL, validation, classification, config
//! resolution, and code emission.
//!
//! Two independent pipelines share the DSL model:
//! - Validator + Emitter: untrusted payload → validated `StrategyDsl` →
//!   downloadable source text for a target platform.
//! - Classifier + Resolver: instrument symbol → fully-populated
//!   `OptimizationConfig` for the external GA/backtest service.
//!
//! Everything here is pure and synchronous over read-only tables: no I/O, no
//! locking, no retries. The HTTP boundary, LLM prompting, and artifact
//! storage live in external collaborators that call into this crate.

pub mod category;
pub mod defaults;
pub mod dsl;
pub mod emit;
pub mod optimize;
pub mod resolve;
pub mod seeds;
pub mod validate;

pub use category::{classify, Category};
pub use defaults::{DefaultsTable, CANONICAL_METALS_SYMBOL};
pub use dsl::{
    Condition, Distance, EntryType, Filters, Indicator, ParamValue, RiskManagement, StrategyDsl,
};
pub use emit::{emit, emit_tagged, Emitted, ExportFormat};
pub use optimize::{
    Constraints, GaSettings, MarketDefaults, ObjectiveWeights, OptimizationConfig, ParameterSpace,
    Range,
};
pub use resolve::{ConfigOverrides, Resolver};
pub use seeds::SeedStrategy;
pub use validate::{validate, ValidationError, Violation};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn dsl_types_are_send_sync() {
        assert_send::<StrategyDsl>();
        assert_sync::<StrategyDsl>();
        assert_send::<Distance>();
        assert_sync::<Distance>();
        assert_send::<ParamValue>();
        assert_sync::<ParamValue>();
    }

    #[test]
    fn config_types_are_send_sync() {
        assert_send::<OptimizationConfig>();
        assert_sync::<OptimizationConfig>();
        assert_send::<MarketDefaults>();
        assert_sync::<MarketDefaults>();
        assert_send::<GaSettings>();
        assert_sync::<GaSettings>();
        assert_send::<Range>();
        assert_sync::<Range>();
    }

    #[test]
    fn table_and_resolver_types_are_send_sync() {
        assert_send::<DefaultsTable>();
        assert_sync::<DefaultsTable>();
        assert_send::<ConfigOverrides>();
        assert_sync::<ConfigOverrides>();
        assert_send::<Category>();
        assert_sync::<Category>();
    }

    #[test]
    fn emitter_types_are_send_sync() {
        assert_send::<ExportFormat>();
        assert_sync::<ExportFormat>();
        assert_send::<Emitted>();
        assert_sync::<Emitted>();
    }

    #[test]
    fn error_types_are_send_sync() {
        assert_send::<ValidationError>();
        assert_sync::<ValidationError>();
        assert_send::<Violation>();
        assert_sync::<Violation>();
    }
}
