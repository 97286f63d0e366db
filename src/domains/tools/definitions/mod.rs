//! Tool definitions, one file per calculator, grouped by clinical family.
//!
//! - `scores`: weighted scores and diagnostic criteria checklists
//! - `calculations`: closed-form body, fluid and laboratory formulas
//! - `assessments`: questionnaires, developmental norms and Rome IV criteria
//! - `clinical`: fever fluid correction and growth follow-up

pub mod assessments;
pub mod calculations;
pub mod clinical;
mod common;
pub mod scores;

use super::descriptor::ToolDescriptor;

/// The complete catalog, in listing order.
pub fn catalog() -> Vec<ToolDescriptor> {
    let mut tools = scores::tools();
    tools.extend(calculations::tools());
    tools.extend(assessments::tools());
    tools.extend(clinical::tools());
    tools
}
