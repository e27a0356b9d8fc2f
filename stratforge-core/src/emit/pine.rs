//! Pine Script v5 skeleton emitter.

use crate::dsl::StrategyDsl;

pub fn render(dsl: &StrategyDsl) -> String {
    let name = escape(&dsl.name);
    let symbols = dsl.symbols.join(", ");
    format!(
        r#"//@version=5
strategy("{name}", overlay=true)

// Generated skeleton for: {symbols} @ {timeframe}
// Entry/exit logic is not yet translated from the strategy description.

plot(close)
"#,
        timeframe = dsl.timeframe,
    )
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
