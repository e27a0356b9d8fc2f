//! MQL5 expert-advisor skeleton emitter.

use crate::dsl::StrategyDsl;

pub fn render(dsl: &StrategyDsl) -> String {
    format!(
        r#"//+------------------------------------------------------------------+
//| {name}
//| Generated expert advisor skeleton (MQL5)
//+------------------------------------------------------------------+

int OnInit()
  {{
   return(INIT_SUCCEEDED);
  }}

void OnTick()
  {{
   // Entry/exit logic is not yet translated from the strategy description.
  }}
"#,
        name = dsl.name,
    )
}
