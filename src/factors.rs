//! The fixed table of emission factors, grouped by event type.
//!
//! Factors are given in kg CO2e per unit of activity. The table is a process-wide constant and
//! cannot be changed at runtime.
use crate::calculator::CalculationError;
use crate::units::{EmissionsPerDistance, EmissionsPerEnergy, EmissionsPerUnit};
use clap::ValueEnum;
use indexmap::IndexMap;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Label for the air travel factor
pub const AIR_TRAVEL: &str = "Air Travel";
/// Label for the car travel factor
pub const CAR_TRAVEL: &str = "Car Travel";
/// Label for the accommodation factor
pub const ACCOMMODATION: &str = "Accommodation";
/// Label for the commute factors
pub const COMMUTE: &str = "Commute";
/// Label for the electricity factor
pub const ELECTRICITY: &str = "Electricity";
/// Label for the internet provider factor
pub const INTERNET_PROVIDER: &str = "Internet Provider";
/// Label for the web cluster servers factor
pub const WEB_CLUSTER_SERVERS: &str = "Web_Cluster_Servers";
/// Label for the personal computers factor
pub const PERSONAL_COMPUTERS: &str = "Personal Computers";
/// Label for the mobile devices factor
pub const MOBILE_DEVICES: &str = "Mobile Devices";

/// The emission factors used for all calculations
pub static EMISSION_FACTORS: EmissionFactorTable = EmissionFactorTable {
    physical_event: PhysicalFactors {
        air_travel: EmissionsPerDistance(0.254),
        car_travel: EmissionsPerDistance(0.164),
        accommodation: EmissionsPerUnit(5.0),
        commute: CommuteFactors {
            shuttle_public_transport: EmissionsPerDistance(2.8),
            car: EmissionsPerDistance(2.4),
        },
    },
    virtual_event: VirtualFactors {
        electricity: EmissionsPerEnergy(0.20707),
        internet_provider: EmissionsPerUnit(3.7),
        web_cluster_servers: EmissionsPerUnit(1.0),
        personal_computers: EmissionsPerUnit(0.233),
        mobile_devices: EmissionsPerUnit(7.06),
    },
};

/// The kind of event being assessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, ValueEnum)]
pub enum EventType {
    /// An in-person event
    Physical,
    /// An online event
    Virtual,
}

/// How attendees travel to and from a physical event each day
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum CommuteMethod {
    /// Shuttle buses or public transport
    #[default]
    #[strum(serialize = "Shuttle/Public Transport")]
    ShuttlePublicTransport,
    /// Private car
    #[strum(serialize = "Car")]
    Car,
}

/// Per-km factors for each commute method
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommuteFactors {
    /// Factor for shuttle buses and public transport
    pub shuttle_public_transport: EmissionsPerDistance,
    /// Factor for private cars
    pub car: EmissionsPerDistance,
}

impl CommuteFactors {
    /// Get the factor for the given commute method
    pub fn get(&self, method: CommuteMethod) -> EmissionsPerDistance {
        match method {
            CommuteMethod::ShuttlePublicTransport => self.shuttle_public_transport,
            CommuteMethod::Car => self.car,
        }
    }

    /// Get the factor for a commute method given by its label (e.g. "Car").
    ///
    /// # Returns
    ///
    /// The factor, or [`CalculationError::InvalidCommuteMethod`] if the label doesn't match any
    /// commute method.
    pub fn lookup(&self, method: &str) -> Result<EmissionsPerDistance, CalculationError> {
        let method = CommuteMethod::from_str(method)
            .map_err(|_| CalculationError::InvalidCommuteMethod(method.to_string()))?;

        Ok(self.get(method))
    }

    /// Iterate over commute methods and their factors in table order
    pub fn iter(&self) -> impl Iterator<Item = (CommuteMethod, EmissionsPerDistance)> + '_ {
        CommuteMethod::iter().map(move |method| (method, self.get(method)))
    }
}

/// Emission factors for physical events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalFactors {
    /// Air travel, per km
    pub air_travel: EmissionsPerDistance,
    /// Car travel, per km
    pub car_travel: EmissionsPerDistance,
    /// Accommodation, per attendee per night
    pub accommodation: EmissionsPerUnit,
    /// Daily commute, per km for each commute method
    pub commute: CommuteFactors,
}

/// Emission factors for virtual events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualFactors {
    /// Electricity consumption, per kWh
    pub electricity: EmissionsPerEnergy,
    /// Internet provider, per emission unit
    pub internet_provider: EmissionsPerUnit,
    /// Web cluster servers, per emission unit
    pub web_cluster_servers: EmissionsPerUnit,
    /// Personal computers, per emission unit
    pub personal_computers: EmissionsPerUnit,
    /// Mobile devices, per emission unit
    pub mobile_devices: EmissionsPerUnit,
}

/// The complete set of emission factors, for both event types
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionFactorTable {
    /// Factors for physical events
    pub physical_event: PhysicalFactors,
    /// Factors for virtual events
    pub virtual_event: VirtualFactors,
}

impl EmissionFactorTable {
    /// Select the factors for the given event type
    pub fn factors(&self, event_type: EventType) -> EventFactors<'_> {
        match event_type {
            EventType::Physical => EventFactors::Physical(&self.physical_event),
            EventType::Virtual => EventFactors::Virtual(&self.virtual_event),
        }
    }
}

/// Select the factors for the given event type from [`EMISSION_FACTORS`]
pub fn factors(event_type: EventType) -> EventFactors<'static> {
    EMISSION_FACTORS.factors(event_type)
}

/// The subset of the factor table which applies to one event type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventFactors<'a> {
    /// Factors for a physical event
    Physical(&'a PhysicalFactors),
    /// Factors for a virtual event
    Virtual(&'a VirtualFactors),
}

impl EventFactors<'_> {
    /// The event type these factors apply to
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Physical(_) => EventType::Physical,
            Self::Virtual(_) => EventType::Virtual,
        }
    }

    /// The factors as label/value pairs, in table order.
    ///
    /// Commute factors are flattened into one entry per method, e.g. `Commute (Car)`.
    pub fn entries(&self) -> IndexMap<String, f64> {
        let mut entries = IndexMap::new();
        match self {
            Self::Physical(factors) => {
                entries.insert(AIR_TRAVEL.to_string(), factors.air_travel.value());
                entries.insert(CAR_TRAVEL.to_string(), factors.car_travel.value());
                entries.insert(ACCOMMODATION.to_string(), factors.accommodation.value());
                for (method, factor) in factors.commute.iter() {
                    entries.insert(format!("{COMMUTE} ({method})"), factor.value());
                }
            }
            Self::Virtual(factors) => {
                entries.insert(ELECTRICITY.to_string(), factors.electricity.value());
                entries.insert(
                    INTERNET_PROVIDER.to_string(),
                    factors.internet_provider.value(),
                );
                entries.insert(
                    WEB_CLUSTER_SERVERS.to_string(),
                    factors.web_cluster_servers.value(),
                );
                entries.insert(
                    PERSONAL_COMPUTERS.to_string(),
                    factors.personal_computers.value(),
                );
                entries.insert(MOBILE_DEVICES.to_string(), factors.mobile_devices.value());
            }
        }

        entries
    }
}
