//! Domain layer - pure business logic, no I/O.

pub mod credits;
pub mod foundation;
pub mod routing;
