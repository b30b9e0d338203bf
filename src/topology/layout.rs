use super::graph::{NodeRole, Position};

const INPUT_X: f64 = 100.0;
const PROCESSOR_X: f64 = 400.0;
const OUTPUT_X: f64 = 700.0;

const TOP_Y: f64 = 100.0;
const ROW_SPACING: f64 = 150.0;

/// Deterministic canvas position for the `index`-th node of a role.
///
/// Inputs, processors and outputs occupy fixed left, middle and right
/// columns; nodes sharing a column stack downward with uniform spacing. The
/// result depends only on the arguments, so identical pipeline shapes always
/// render identically.
pub fn position(role: NodeRole, index: usize) -> Position {
    let x = match role {
        NodeRole::Input => INPUT_X,
        NodeRole::Processor => PROCESSOR_X,
        NodeRole::Output => OUTPUT_X,
    };
    Position {
        x,
        y: TOP_Y + index as f64 * ROW_SPACING,
    }
}
