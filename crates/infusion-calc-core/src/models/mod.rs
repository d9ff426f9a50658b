//! Domain models for the dosing engine.

mod params;
mod profile;
mod record;
mod results;
mod unit;

pub use params::*;
pub use profile::*;
pub use record::*;
pub use results::*;
pub use unit::*;
