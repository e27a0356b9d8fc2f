//! JSON emitter — pretty round-trip serialization of the validated DSL.

use crate::dsl::StrategyDsl;

pub fn render(dsl: &StrategyDsl) -> String {
    serde_json::to_string_pretty(dsl).expect("StrategyDsl serialization failed")
}
