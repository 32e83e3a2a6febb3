use std::collections::BTreeMap;

use crate::domain::FieldPolygon;
use crate::geometry::{UnitLabels, format_area};

/// Crop bucket for fields with no crop assigned.
const UNASSIGNED_CROP: &str = "(no crop)";

/// Aggregate figures over a set of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary {
    pub count: usize,
    pub total_area_m2: f64,
    /// Total area per crop, BTreeMap for stable output order.
    pub by_crop: BTreeMap<String, f64>,
}

pub fn summarize(fields: &[FieldPolygon]) -> FieldSummary {
    let mut total_area_m2 = 0.0;
    let mut by_crop: BTreeMap<String, f64> = BTreeMap::new();

    for field in fields {
        let area = field.area_m2();
        total_area_m2 += area;

        let crop = field.crop.as_deref().unwrap_or(UNASSIGNED_CROP);
        *by_crop.entry(crop.to_string()).or_insert(0.0) += area;
    }

    FieldSummary {
        count: fields.len(),
        total_area_m2,
        by_crop,
    }
}

/// One sidebar-style line: name, crop, formatted area.
pub fn field_line(field: &FieldPolygon, units: &UnitLabels) -> String {
    let crop = field.crop.as_deref().unwrap_or(UNASSIGNED_CROP);
    format!(
        "{} [{}]: {}",
        field.name,
        crop,
        format_area(field.area_m2(), units)
    )
}

/// Full text report: one line per field, then the aggregate block.
pub fn render_report(fields: &[FieldPolygon], units: &UnitLabels) -> String {
    let mut out = String::new();

    for field in fields {
        out.push_str(&field_line(field, units));
        out.push('\n');
    }

    let summary = summarize(fields);
    out.push('\n');
    out.push_str(&format!("Fields: {}\n", summary.count));
    out.push_str(&format!(
        "Total area: {}\n",
        format_area(summary.total_area_m2, units)
    ));

    if summary.by_crop.len() > 1 {
        out.push_str("By crop:\n");
        for (crop, area) in &summary.by_crop {
            out.push_str(&format!("  {}: {}\n", crop, format_area(*area, units)));
        }
    }

    out
}
