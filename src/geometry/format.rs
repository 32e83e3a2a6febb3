use clap::ValueEnum;
use serde::Deserialize;

/// Unit suffixes for formatted areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabels {
    pub square_meters: &'static str,
    pub hectares: &'static str,
    pub square_kilometers: &'static str,
}

/// Which unit suffix set to render. Cyrillic matches the labels the
/// original field UI shows; ASCII is for plain-terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Cyrillic,
    Ascii,
}

const CYRILLIC_LABELS: UnitLabels = UnitLabels {
    square_meters: "м²",
    hectares: "га",
    square_kilometers: "км²",
};

const ASCII_LABELS: UnitLabels = UnitLabels {
    square_meters: "m2",
    hectares: "ha",
    square_kilometers: "km2",
};

impl UnitSystem {
    pub fn labels(&self) -> &'static UnitLabels {
        match self {
            UnitSystem::Cyrillic => &CYRILLIC_LABELS,
            UnitSystem::Ascii => &ASCII_LABELS,
        }
    }
}

/// Render a square-meter area as a human-scaled string.
///
/// Below 1 hectare the value stays in m²; below 1 km² it is shown in
/// hectares; everything larger in km². Always one decimal digit.
/// Negative input is a precondition violation and is formatted as-is.
pub fn format_area(area_m2: f64, units: &UnitLabels) -> String {
    if area_m2 < 10_000.0 {
        format!("{:.1} {}", area_m2, units.square_meters)
    } else if area_m2 < 1_000_000.0 {
        format!("{:.1} {}", area_m2 / 10_000.0, units.hectares)
    } else {
        format!("{:.1} {}", area_m2 / 1_000_000.0, units.square_kilometers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii(area: f64) -> String {
        format_area(area, UnitSystem::Ascii.labels())
    }

    #[test]
    fn test_square_meter_range() {
        assert_eq!(ascii(0.0), "0.0 m2");
        assert_eq!(ascii(123.45), "123.5 m2");
        assert_eq!(ascii(9999.9), "9999.9 m2");
    }

    #[test]
    fn test_hectare_range() {
        assert_eq!(ascii(10_000.0), "1.0 ha");
        assert_eq!(ascii(250_000.0), "25.0 ha");
        assert_eq!(ascii(999_999.9), "100.0 ha");
    }

    #[test]
    fn test_square_kilometer_range() {
        assert_eq!(ascii(1_000_000.0), "1.0 km2");
        assert_eq!(ascii(12_345_678.0), "12.3 km2");
    }

    #[test]
    fn test_cyrillic_labels() {
        let labels = UnitSystem::Cyrillic.labels();
        assert_eq!(format_area(0.0, labels), "0.0 м²");
        assert_eq!(format_area(50_000.0, labels), "5.0 га");
        assert_eq!(format_area(2_000_000.0, labels), "2.0 км²");
    }

    #[test]
    fn test_threshold_boundaries() {
        assert!(ascii(9999.9).ends_with("m2"));
        assert!(ascii(10_000.0).ends_with("ha"));
        assert!(ascii(999_999.9).ends_with("ha"));
        assert!(ascii(1_000_000.0).ends_with("km2"));
    }
}
