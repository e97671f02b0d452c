use serde::{Deserialize, Serialize};

/// Direction along which a join or reduction operates.
///
/// For reductions `Rows` produces one value per row and `Columns` one value
/// per column. `Auto` resolves at call time from the operands' shapes.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Rows,
    Columns,
    #[default]
    Auto,
}
