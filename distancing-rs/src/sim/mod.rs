mod cohort;
mod result;
mod simulation;
pub use cohort::*;
pub use result::*;
pub use simulation::*;
