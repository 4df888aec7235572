// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tabular clash report with a fixed column schema

use crate::Result;
use clash_lite_model::Clash;
use std::fs;
use std::path::Path;

/// Fixed report column order
pub const CSV_HEADERS: [&str; 14] = [
    "ID",
    "Type",
    "Severity",
    "Element 1 ID",
    "Element 1 Name",
    "Element 2 ID",
    "Element 2 Name",
    "Penetration Depth",
    "Volume",
    "Center X",
    "Center Y",
    "Center Z",
    "Resolved",
    "Notes",
];

/// Render clashes as a CSV report
///
/// One row per clash in input order, columns per [`CSV_HEADERS`]. Fields
/// containing delimiters, quotes, or newlines are quoted per RFC 4180.
pub fn to_csv(clashes: &[Clash]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADERS.join(","));
    out.push('\n');

    for clash in clashes {
        let row = [
            escape(&clash.id),
            clash.clash_type.to_string(),
            clash.severity.to_string(),
            clash.element1.id.0.to_string(),
            escape(&clash.element1.name),
            clash.element2.id.0.to_string(),
            escape(&clash.element2.name),
            format!("{:.4}", clash.penetration_depth),
            format!("{:.6}", clash.volume),
            format!("{:.3}", clash.center[0]),
            format!("{:.3}", clash.center[1]),
            format!("{:.3}", clash.center[2]),
            clash.resolved.to_string(),
            escape(clash.notes.as_deref().unwrap_or("")),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Render and write a CSV report to `path`
pub fn write_csv(clashes: &[Clash], path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, to_csv(clashes))?;
    Ok(())
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clash_lite_model::{
        ClashSeverity, ClashType, ElementCategory, ElementId, ElementRef,
    };

    fn sample_clash() -> Clash {
        Clash {
            id: "clash_1_2_0".to_string(),
            clash_type: ClashType::Hard,
            severity: ClashSeverity::Major,
            element1: ElementRef::new(ElementId(1), "Wall-A", ElementCategory::Wall),
            element2: ElementRef::new(ElementId(2), "Wall-B", ElementCategory::Wall),
            penetration_depth: 0.5,
            volume: 0.125,
            center: [0.75, 0.75, 0.75],
            resolved: false,
            notes: None,
        }
    }

    #[test]
    fn test_header_row() {
        let csv = to_csv(&[]);
        assert_eq!(
            csv,
            "ID,Type,Severity,Element 1 ID,Element 1 Name,Element 2 ID,Element 2 Name,\
             Penetration Depth,Volume,Center X,Center Y,Center Z,Resolved,Notes\n"
        );
    }

    #[test]
    fn test_row_values_and_order() {
        let csv = to_csv(&[sample_clash()]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "clash_1_2_0,hard,major,1,Wall-A,2,Wall-B,0.5000,0.125000,0.750,0.750,0.750,false,"
        );
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let mut clash = sample_clash();
        clash.element1.name = "Wall, north \"A\"".to_string();
        clash.resolved = true;
        clash.notes = Some("line one\nline two".to_string());

        let csv = to_csv(&[clash]);
        assert!(csv.contains("\"Wall, north \"\"A\"\"\""));
        assert!(csv.contains("\"line one\nline two\""));
        assert!(csv.contains(",true,"));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let clashes = vec![sample_clash()];
        let before = clashes.clone();
        let _ = to_csv(&clashes);
        assert_eq!(clashes, before);
    }
}
