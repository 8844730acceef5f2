//! Fixtures for tests

use crate::activity::{PhysicalActivity, VirtualActivity};
use crate::units::{Dimensionless, Distance, Energy, Quantity};
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!($result.unwrap_err().to_string(), $msg);
    };
}
pub(crate) use assert_error;

#[fixture]
pub fn physical_activity() -> PhysicalActivity {
    PhysicalActivity {
        air_travel_distance: Distance(2400.0),
        car_travel_distance: Distance(350.0),
        accommodation: Dimensionless(2.0),
        participants: Quantity(25.0),
        commute_method: "Car".into(),
        commute_distance: Distance(60.0),
    }
}

#[fixture]
pub fn virtual_activity() -> VirtualActivity {
    VirtualActivity {
        electricity_consumption: Energy(480.0),
        internet_provider: Quantity(1.5),
        web_cluster_servers: Quantity(3.0),
        personal_computers: Quantity(120.0),
        mobile_devices: Quantity(30.0),
    }
}
