//! Calculating the total emissions of an event from its activity quantities.
//!
//! The total is a weighted sum: each activity quantity is multiplied by an emission factor from
//! the factor table and the resulting terms are added up in a fixed order. Nothing is rounded
//! here; rounding is left to whatever displays the result.
use crate::activity::{CalculationInput, PhysicalActivity, VirtualActivity};
use crate::factors::{
    ACCOMMODATION, AIR_TRAVEL, CAR_TRAVEL, COMMUTE, ELECTRICITY, EmissionFactorTable,
    INTERNET_PROVIDER, MOBILE_DEVICES, PERSONAL_COMPUTERS, PhysicalFactors, VirtualFactors,
    WEB_CLUSTER_SERVERS,
};
use crate::units::Emissions;
use log::debug;
use thiserror::Error;

/// An error which occurred while calculating emissions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// A physical event's commute method isn't in the commute factor table
    #[error("Invalid commute method: {0}")]
    InvalidCommuteMethod(String),
}

/// The emissions attributed to a single activity
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    /// The factor table label for the activity (e.g. "Air Travel")
    pub activity: String,
    /// Emissions resulting from the activity
    pub emissions: Emissions,
}

impl Contribution {
    fn new(activity: impl Into<String>, emissions: Emissions) -> Self {
        Self {
            activity: activity.into(),
            emissions,
        }
    }
}

/// Something which emits according to a set of emission factors
pub trait Activity {
    /// The factors which apply to this kind of activity
    type Factors;

    /// The emissions from each activity term, in the order they are summed
    fn contributions(
        &self,
        factors: &Self::Factors,
    ) -> Result<Vec<Contribution>, CalculationError>;
}

impl Activity for PhysicalActivity {
    type Factors = PhysicalFactors;

    fn contributions(
        &self,
        factors: &PhysicalFactors,
    ) -> Result<Vec<Contribution>, CalculationError> {
        let commute_factor = factors.commute.lookup(&self.commute_method)?;

        Ok(vec![
            Contribution::new(AIR_TRAVEL, factors.air_travel * self.air_travel_distance),
            Contribution::new(CAR_TRAVEL, factors.car_travel * self.car_travel_distance),
            Contribution::new(
                ACCOMMODATION,
                factors.accommodation * self.accommodation * self.participants,
            ),
            Contribution::new(
                format!("{COMMUTE} ({})", self.commute_method),
                commute_factor * self.commute_distance,
            ),
        ])
    }
}

impl Activity for VirtualActivity {
    type Factors = VirtualFactors;

    fn contributions(
        &self,
        factors: &VirtualFactors,
    ) -> Result<Vec<Contribution>, CalculationError> {
        Ok(vec![
            Contribution::new(
                ELECTRICITY,
                factors.electricity * self.electricity_consumption,
            ),
            Contribution::new(
                INTERNET_PROVIDER,
                factors.internet_provider * self.internet_provider,
            ),
            Contribution::new(
                WEB_CLUSTER_SERVERS,
                factors.web_cluster_servers * self.web_cluster_servers,
            ),
            Contribution::new(
                PERSONAL_COMPUTERS,
                factors.personal_computers * self.personal_computers,
            ),
            Contribution::new(MOBILE_DEVICES, factors.mobile_devices * self.mobile_devices),
        ])
    }
}

/// A [`CalculationInput`] picks the factors for its own event type from the full table
impl Activity for CalculationInput {
    type Factors = EmissionFactorTable;

    fn contributions(
        &self,
        factors: &EmissionFactorTable,
    ) -> Result<Vec<Contribution>, CalculationError> {
        match self {
            Self::Physical(activity) => activity.contributions(&factors.physical_event),
            Self::Virtual(activity) => activity.contributions(&factors.virtual_event),
        }
    }
}

/// Calculate the total emissions for an activity.
///
/// # Arguments
///
/// * `input` - Activity quantities for the event
/// * `factors` - The emission factors for the event's type
///
/// # Returns
///
/// The total emissions in kg CO2e or [`CalculationError::InvalidCommuteMethod`] if a physical
/// event's commute method is not in the factor table.
pub fn calculate<A: Activity>(
    input: &A,
    factors: &A::Factors,
) -> Result<Emissions, CalculationError> {
    let total = sum_contributions(&input.contributions(factors)?);
    debug!("Calculated total emissions: {total} kg CO2e");

    Ok(total)
}

/// Add up contributions in order
pub fn sum_contributions(contributions: &[Contribution]) -> Emissions {
    contributions
        .iter()
        .fold(Emissions(0.0), |total, contribution| total + contribution.emissions)
}
