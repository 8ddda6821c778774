//! Step planning: splitting the bead grid into assembly phases.
//!
//! A [`StepPlan`] is an ordered list of [`Step`]s whose masks partition the
//! grid: every cell belongs to exactly one step. Two strategies exist,
//! selected by [`StepMode`]:
//!
//! - **Row**: horizontal bands of a fixed number of rows, top to bottom.
//! - **Quadrant**: up to four regions split at the grid's midlines, in
//!   top-left, top-right, bottom-left, bottom-right order. Regions with an
//!   empty span (e.g. the right half of a one-column grid) are left out.

mod mode;
mod plan;
mod planner;

pub use mode::StepMode;
pub use plan::{Step, StepMask, StepPlan};
pub use planner::{plan_steps, plan_steps_by_name};
