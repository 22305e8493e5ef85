use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub mod builder;
pub mod outline;
pub mod sheets;
pub mod summary;
pub mod tree;

#[cfg(test)]
mod builder_tests;

/// Reporting-unit conversions. Outline and sheet amounts arrive in millions,
/// statement amounts in dollars; every output figure is in billions.
pub const MILLIONS_PER_BILLION: Decimal = dec!(1000);
pub const BASE_UNITS_PER_BILLION: Decimal = dec!(1_000_000_000);

/// A tier-2 total that differs from the sum of its tier-3 rows by more than
/// this (in millions) gets a synthetic "Other (adjustment)" leaf.
pub const ADJUSTMENT_TOLERANCE_MILLIONS: Decimal = dec!(0.001);
/// Decimal places kept on the adjustment leaf after unit conversion.
pub const ADJUSTMENT_SCALE: u32 = 9;

pub const REVENUE_ROOT_NAME: &str = "Revenue";
pub const SPENDING_ROOT_NAME: &str = "Spending";
