//! MQL4 expert-advisor skeleton emitter.

use crate::dsl::StrategyDsl;

pub fn render(dsl: &StrategyDsl) -> String {
    format!(
        r#"//+------------------------------------------------------------------+
//| {name}
//| Generated expert advisor skeleton (MQL4)
//+------------------------------------------------------------------+
#property strict

int start()
  {{
   // Entry/exit logic is not yet translated from the strategy description.
   return(0);
  }}
"#,
        name = dsl.name,
    )
}
