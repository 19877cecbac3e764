use crate::prelude::{Count, Real, Time};

///////////////////////////////////////////////////////////////////////////////
// Reference scenario
///////////////////////////////////////////////////////////////////////////////

pub const POPULATION: Count = 5_000_000;
pub const DURATION: Time = 500;
pub const INITIAL_INFECTIONS: Count = 4;
pub const BASELINE_CONTACTS: Real = 50.0;
pub const INFECTIVITY: Real = 0.005;
pub const INFECTIOUS_DAYS: Time = 10;

// Intervention defaults
pub const REDUCED_CONTACTS: Real = BASELINE_CONTACTS;
pub const INTERVENTION_START: Time = 20;
pub const INTERVENTION_END: Time = 200;

///////////////////////////////////////////////////////////////////////////////
// Control ranges (min, max)
///////////////////////////////////////////////////////////////////////////////

pub const REDUCED_CONTACTS_RANGE: (Real, Real) = (0.0, 50.0);
pub const INTERVENTION_START_RANGE: (Real, Real) = (1.0, 30.0);
pub const INTERVENTION_END_RANGE: (Real, Real) = (30.0, 400.0);
