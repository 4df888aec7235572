// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON clash report

use crate::Result;
use clash_lite_model::ClashDetectionResult;
use std::fs;
use std::path::Path;

/// Render a detection result as pretty-printed JSON
pub fn to_json(result: &ClashDetectionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render and write a JSON report to `path`
pub fn write_json(result: &ClashDetectionResult, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, to_json(result)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_result() -> ClashDetectionResult {
        ClashDetectionResult {
            clashes: vec![],
            total_checked: 10,
            hard_clashes: 0,
            soft_clashes: 0,
            clearance_violations: 0,
            processing_time_ms: 1.25,
            cancelled: false,
        }
    }

    #[test]
    fn test_json_round_trip() {
        let result = empty_result();
        let json = to_json(&result).unwrap();
        assert!(json.contains("\"total_checked\": 10"));
        let back: ClashDetectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
