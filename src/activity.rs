//! Activity records describing an event, which are the input to an emissions calculation.
use crate::factors::{CommuteMethod, EventType};
use crate::input::read_toml;
use crate::units::{Dimensionless, Distance, Energy, Quantity};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Activity quantities for a physical event.
///
/// Missing fields in input files take the values given by [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicalActivity {
    /// Total distance travelled by air (km)
    pub air_travel_distance: Distance,
    /// Total distance travelled by car (km)
    pub car_travel_distance: Distance,
    /// Nights of accommodation per attendee
    pub accommodation: Dimensionless,
    /// Number of participants
    pub participants: Quantity,
    /// The commute method, as a label from the commute factor table (e.g. "Car").
    ///
    /// This is checked when emissions are calculated, not when the record is created.
    pub commute_method: String,
    /// Total commute distance (km)
    pub commute_distance: Distance,
}

impl Default for PhysicalActivity {
    fn default() -> Self {
        Self {
            air_travel_distance: Distance(1000.0),
            car_travel_distance: Distance(1000.0),
            accommodation: Dimensionless(0.0),
            participants: Quantity(0.0),
            commute_method: CommuteMethod::default().to_string(),
            commute_distance: Distance(1000.0),
        }
    }
}

/// Activity quantities for a virtual event.
///
/// Missing fields in input files take the values given by [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VirtualActivity {
    /// Electricity consumption (kWh)
    pub electricity_consumption: Energy,
    /// Internet provider emission units
    pub internet_provider: Quantity,
    /// Web cluster server emission units
    pub web_cluster_servers: Quantity,
    /// Personal computer emission units
    pub personal_computers: Quantity,
    /// Mobile device emission units
    pub mobile_devices: Quantity,
}

impl Default for VirtualActivity {
    fn default() -> Self {
        Self {
            electricity_consumption: Energy(1000.0),
            internet_provider: Quantity(0.0),
            web_cluster_servers: Quantity(0.0),
            personal_computers: Quantity(0.0),
            mobile_devices: Quantity(0.0),
        }
    }
}

/// The input to an emissions calculation for a single event.
///
/// In input files, the `event_type` field selects the variant, e.g.:
///
/// ```toml
/// event_type = "Physical"
/// air_travel_distance = 1500.0
/// commute_method = "Car"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum CalculationInput {
    /// A physical event
    Physical(PhysicalActivity),
    /// A virtual event
    Virtual(VirtualActivity),
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self::Physical(PhysicalActivity::default())
    }
}

impl CalculationInput {
    /// Read a calculation input from a TOML file
    pub fn from_path(file_path: &Path) -> Result<Self> {
        read_toml(file_path)
    }

    /// The type of event this input describes
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Physical(_) => EventType::Physical,
            Self::Virtual(_) => EventType::Virtual,
        }
    }
}

impl From<PhysicalActivity> for CalculationInput {
    fn from(activity: PhysicalActivity) -> Self {
        Self::Physical(activity)
    }
}

impl From<VirtualActivity> for CalculationInput {
    fn from(activity: VirtualActivity) -> Self {
        Self::Virtual(activity)
    }
}
