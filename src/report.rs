//! Rendering calculation results for display.
use crate::calculator::Contribution;
use crate::factors::EventFactors;
use crate::units::Emissions;
use std::io::{self, Write};

/// Carbon offset projects listed after every result
pub const OFFSET_PROJECTS: [&str; 3] = [
    "Rimba Raya Biodiversity Reserve",
    "Eden Reforestation",
    "Second Life Ocean Plastic Recovery and Recycling",
];

/// Format emissions for display, rounded to 2 decimal places
pub fn format_emissions(emissions: Emissions) -> String {
    format!("{:.2} kg CO2", emissions.value())
}

/// Write the emission factors for an event type, one per line
pub fn write_factors<W: Write>(out: &mut W, factors: EventFactors) -> io::Result<()> {
    writeln!(out, "Emission Factors")?;
    for (label, value) in factors.entries() {
        writeln!(out, "{label}: {value}")?;
    }

    Ok(())
}

/// Write the full report for a calculation.
///
/// # Arguments
///
/// * `out` - Where to write the report
/// * `factors` - The factors used for the calculation
/// * `total` - The total emissions
/// * `breakdown` - Per-activity contributions, if these should be shown
pub fn write_report<W: Write>(
    out: &mut W,
    factors: EventFactors,
    total: Emissions,
    breakdown: Option<&[Contribution]>,
) -> io::Result<()> {
    write_factors(out, factors)?;

    writeln!(out)?;
    writeln!(out, "Total Emissions")?;
    writeln!(out, "Total: {}", format_emissions(total))?;

    if let Some(contributions) = breakdown {
        writeln!(out)?;
        writeln!(out, "Breakdown")?;
        for contribution in contributions {
            writeln!(
                out,
                "{}: {}",
                contribution.activity,
                format_emissions(contribution.emissions)
            )?;
        }
    }

    for project in OFFSET_PROJECTS {
        writeln!(out)?;
        writeln!(out, "{project}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::{EventType, factors};
    use rstest::rstest;

    fn render(breakdown: Option<&[Contribution]>) -> String {
        let mut out = Vec::new();
        write_report(
            &mut out,
            factors(EventType::Physical),
            Emissions(2818.0),
            breakdown,
        )
        .unwrap();

        String::from_utf8(out).unwrap()
    }

    #[rstest]
    #[case(2818.0, "2818.00 kg CO2")]
    #[case(207.07, "207.07 kg CO2")]
    #[case(0.0, "0.00 kg CO2")]
    #[case(1.0 / 3.0, "0.33 kg CO2")]
    #[case(-25.4, "-25.40 kg CO2")]
    fn test_format_emissions(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_emissions(Emissions(value)), expected);
    }

    #[test]
    fn test_write_factors() {
        let mut out = Vec::new();
        write_factors(&mut out, factors(EventType::Virtual)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Emission Factors
Electricity: 0.20707
Internet Provider: 3.7
Web_Cluster_Servers: 1
Personal Computers: 0.233
Mobile Devices: 7.06
"
        );
    }

    #[test]
    fn test_write_report() {
        let report = render(None);
        assert!(report.starts_with("Emission Factors\nAir Travel: 0.254\n"));
        assert!(report.contains("\nTotal Emissions\nTotal: 2818.00 kg CO2\n"));
        assert!(!report.contains("Breakdown"));
        assert!(report.ends_with("Second Life Ocean Plastic Recovery and Recycling\n"));

        // The total comes before the offset projects, which keep their order
        let positions: Vec<_> = OFFSET_PROJECTS
            .iter()
            .map(|project| report.find(project).unwrap())
            .collect();
        assert!(report.find("Total:").unwrap() < positions[0]);
        assert!(positions.is_sorted());
    }

    #[test]
    fn test_write_report_with_breakdown() {
        let breakdown = [
            Contribution {
                activity: "Air Travel".into(),
                emissions: Emissions(254.0),
            },
            Contribution {
                activity: "Commute (Car)".into(),
                emissions: Emissions(2400.0),
            },
        ];
        let report = render(Some(&breakdown));
        assert!(report.contains(
            "\nBreakdown\nAir Travel: 254.00 kg CO2\nCommute (Car): 2400.00 kg CO2\n"
        ));
    }
}
