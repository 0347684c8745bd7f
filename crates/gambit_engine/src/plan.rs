//! Execution plan building.
//!
//! A direct flattening of a document's effects into the ordered reaction
//! table the runtime engine dispatches on. Purely structural: no validation,
//! no filtering.

use serde::{Deserialize, Serialize};

use gambit_document::{ActionStep, GuardExpr, RuleDocument};
use gambit_foundation::Value;

/// One row of the execution plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    /// The effect this row came from.
    pub effect_id: String,
    /// The dispatch trigger name.
    pub trigger: String,
    /// Guards, stringified into their canonical textual forms.
    pub guards: Vec<String>,
    /// The ordered actions to run.
    pub actions: Vec<ActionStep>,
}

/// Renders a guard expression in its canonical textual form.
fn render_guard(guard: &GuardExpr) -> String {
    match guard {
        GuardExpr::Atom(name) => name.clone(),
        GuardExpr::Call { name, args } => {
            let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
            format!("{name}({})", rendered.join(", "))
        }
        GuardExpr::Params(params) => Value::Map(params.clone()).to_string(),
    }
}

/// Flattens a rule document into its execution plan.
#[must_use]
pub fn build_plan(document: &RuleDocument) -> Vec<PlanStep> {
    document
        .logic
        .effects
        .iter()
        .map(|effect| PlanStep {
            effect_id: effect.id.clone(),
            trigger: effect.trigger.to_string(),
            guards: effect.guards.iter().map(render_guard).collect(),
            actions: effect.actions.clone(),
        })
        .collect()
}
