use std::fmt;

use log::debug;

/// Fuel at or below this amount needs no fuel of its own.
const FUEL_THRESHOLD: i64 = 6;

/// Fuel needed to lift `mass`: `floor(mass / 3) - 2`.
///
/// Division rounds toward negative infinity, so small or negative masses give
/// zero or negative fuel. Nothing is clamped here.
pub fn base_fuel(mass: i64) -> i64 {
    mass.div_euclid(3) - 2
}

/// Extra fuel needed to lift `fuel` itself.
///
/// The check is made on the fuel being lifted, not on the fuel just computed,
/// so 7 and 8 still add a `0` step before stopping.
pub fn fuel_for_fuel(fuel: i64) -> i64 {
    if fuel <= FUEL_THRESHOLD {
        return 0;
    }

    let next = base_fuel(fuel);
    next + fuel_for_fuel(next)
}

/// Fuel for one module, counting the fuel needed to carry its fuel.
pub fn module_fuel(mass: i64) -> i64 {
    let fuel = base_fuel(mass);
    fuel + fuel_for_fuel(fuel)
}

// Totals are summed in i128: one module's fuel always fits in i64, but the sum
// over many large masses does not.
pub fn total_fuel_part_one(masses: &[i64]) -> i128 {
    masses.iter().map(|&mass| i128::from(base_fuel(mass))).sum()
}

pub fn total_fuel_part_two(masses: &[i64]) -> i128 {
    masses.iter().map(|&mass| i128::from(module_fuel(mass))).sum()
}

/// Both fuel totals for one list of masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelReport {
    pub part_one: i128,
    pub part_two: i128,
}

impl FuelReport {
    pub fn compute(masses: &[i64]) -> Self {
        let part_one = total_fuel_part_one(masses);
        debug!("part one: {} over {} masses", part_one, masses.len());

        let part_two = total_fuel_part_two(masses);
        debug!("part two: {} over {} masses", part_two, masses.len());

        FuelReport { part_one, part_two }
    }
}

impl fmt::Display for FuelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.part_one)?;
        write!(f, "{}", self.part_two)
    }
}
