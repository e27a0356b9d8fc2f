//! Python skeleton emitter.

use crate::dsl::StrategyDsl;

pub fn render(dsl: &StrategyDsl) -> String {
    let name = &dsl.name;
    let symbols = dsl.symbols.join(", ");
    format!(
        r#""""{name} - generated strategy skeleton.

Symbols: {symbols}
Timeframe: {timeframe}

Entry/exit logic is not yet translated from the strategy description.
"""


def strategy(data):
    pass
"#,
        timeframe = dsl.timeframe,
    )
}
