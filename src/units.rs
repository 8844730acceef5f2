//! This module defines the unit types used for activity quantities and emission factors.
//!
//! Emissions are always measured in kilograms of CO2 equivalent (kg CO2e). Multiplying an emission
//! factor by the matching activity quantity gives [`Emissions`]; any other combination is a type
//! error.
use serde::{Deserialize, Serialize};

/// Represents a dimensionless quantity.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Display,
)]
pub struct Dimensionless(pub f64);

impl std::ops::Mul for Dimensionless {
    type Output = Dimensionless;

    fn mul(self, rhs: Dimensionless) -> Self::Output {
        Dimensionless(self.0 * rhs.0)
    }
}

impl std::ops::Div for Dimensionless {
    type Output = Dimensionless;

    fn div(self, rhs: Dimensionless) -> Self::Output {
        Dimensionless(self.0 / rhs.0)
    }
}

impl Dimensionless {
    /// Create a new dimensionless quantity from a f64 value.
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    /// Returns the value as a f64.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Dimensionless {
    fn from(val: f64) -> Self {
        Self(val)
    }
}

impl From<Dimensionless> for f64 {
    fn from(val: Dimensionless) -> Self {
        val.0
    }
}

macro_rules! unit_struct {
    ($name:ident) => {
        /// Represents a type of quantity.
        #[derive(
            Debug,
            Default,
            Clone,
            Copy,
            PartialEq,
            PartialOrd,
            Serialize,
            Deserialize,
            derive_more::Add,
            derive_more::Sub,
            derive_more::Display,
        )]
        pub struct $name(pub f64);

        impl $name {
            /// Creates a new instance of the unit type from a f64 value.
            pub const fn new(val: f64) -> Self {
                Self(val)
            }

            /// Returns the value of the unit type as a f64.
            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl std::ops::Mul<Dimensionless> for $name {
            type Output = $name;
            fn mul(self, rhs: Dimensionless) -> $name {
                $name(self.0 * rhs.0)
            }
        }

        impl std::ops::Mul<$name> for Dimensionless {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                $name(self.0 * rhs.0)
            }
        }

        impl std::ops::Div<Dimensionless> for $name {
            type Output = $name;
            fn div(self, rhs: Dimensionless) -> $name {
                $name(self.0 / rhs.0)
            }
        }
    };
}

macro_rules! impl_mul {
    ($Lhs:ty, $Rhs:ty, $Out:ty) => {
        impl std::ops::Mul<$Rhs> for $Lhs {
            type Output = $Out;
            fn mul(self, rhs: $Rhs) -> $Out {
                <$Out>::new(self.0 * rhs.0)
            }
        }
        impl std::ops::Mul<$Lhs> for $Rhs {
            type Output = $Out;
            fn mul(self, lhs: $Lhs) -> $Out {
                <$Out>::new(lhs.0 * self.0)
            }
        }
    };
}

// Base quantities
unit_struct!(Distance);
unit_struct!(Energy);
unit_struct!(Quantity);
unit_struct!(Emissions);

// Emission factors
unit_struct!(EmissionsPerDistance);
unit_struct!(EmissionsPerEnergy);
unit_struct!(EmissionsPerUnit);

// Multiplication rules
impl_mul!(EmissionsPerDistance, Distance, Emissions);
impl_mul!(EmissionsPerEnergy, Energy, Emissions);
impl_mul!(EmissionsPerUnit, Quantity, Emissions);

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_factor_times_quantity() {
        assert_eq!(EmissionsPerDistance(2.0) * Distance(3.0), Emissions(6.0));
        assert_eq!(Energy(3.0) * EmissionsPerEnergy(2.0), Emissions(6.0));
        assert_eq!(EmissionsPerUnit(0.5) * Quantity(4.0), Emissions(2.0));
    }

    #[test]
    fn test_multiplication_is_commutative() {
        let factor = EmissionsPerEnergy(0.20707);
        let energy = Energy(123.456);
        assert_eq!((factor * energy).value(), (energy * factor).value());
    }

    #[test]
    fn test_dimensionless_scaling() {
        let scaled = EmissionsPerUnit(5.0) * Dimensionless(3.0);
        assert_eq!(scaled, EmissionsPerUnit(15.0));
        assert!(approx_eq!(f64, (Distance(10.0) / Dimensionless(4.0)).value(), 2.5));
    }

    #[test]
    fn test_add_emissions() {
        assert_eq!(Emissions(1.5) + Emissions(2.5), Emissions(4.0));
        assert_eq!(Emissions(1.5) - Emissions(2.5), Emissions(-1.0));
    }

    #[test]
    fn test_deserialise_unit_from_number() {
        #[derive(Deserialize)]
        struct Row {
            distance: Distance,
        }

        let row: Row = toml::from_str("distance = 12.5").unwrap();
        assert_eq!(row.distance, Distance(12.5));
    }
}
