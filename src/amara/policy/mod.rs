pub mod adjustments;
pub mod ui_policy;

pub use adjustments::{resolve_adjustments, AdjustmentBundle};
pub use ui_policy::{resolve_ui_policy, UiPolicy};
