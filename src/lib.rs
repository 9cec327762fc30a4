//! Fuel requirements for a list of module masses.
//!
//! Part one sums the fuel for every module. Part two also counts the fuel needed
//! to carry that fuel.

mod error;
pub mod fuel;
pub mod input;

pub use error::FuelError;
pub use fuel::{
    base_fuel, fuel_for_fuel, module_fuel, total_fuel_part_one, total_fuel_part_two, FuelReport,
};
pub use input::{parse_masses, read_masses};
