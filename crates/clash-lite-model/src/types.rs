// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core identifier and category types for building elements

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe element identifier
///
/// Wraps the numeric id assigned by the upstream model parser
/// (e.g. an IFC express id).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize, Default)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ElementId {
    fn from(id: u64) -> Self {
        ElementId(id)
    }
}

impl From<ElementId> for u64 {
    fn from(id: ElementId) -> Self {
        id.0
    }
}

/// Building element category
///
/// Covers the categories the clash classifier distinguishes. Anything else is
/// captured with its original string representation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementCategory {
    // Structural
    Wall,
    Column,
    Beam,
    Slab,
    Footing,

    // MEP
    Pipe,
    Duct,
    CableCarrier,

    // Common non-structural
    Door,
    Window,
    Space,
    Roof,
    Covering,
    Furniture,

    /// Unknown category - stores the original name string
    Unknown(String),
}

impl FromStr for ElementCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl ElementCategory {
    /// Parse a category name into an ElementCategory
    ///
    /// Case-insensitive; accepts both bare names ("Wall") and IFC entity
    /// names ("IFCWALL", "IFCWALLSTANDARDCASE").
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "WALL" | "IFCWALL" | "IFCWALLSTANDARDCASE" | "IFCCURTAINWALL" => ElementCategory::Wall,
            "COLUMN" | "IFCCOLUMN" => ElementCategory::Column,
            "BEAM" | "IFCBEAM" => ElementCategory::Beam,
            "SLAB" | "IFCSLAB" => ElementCategory::Slab,
            "FOOTING" | "IFCFOOTING" => ElementCategory::Footing,

            "PIPE" | "IFCPIPESEGMENT" | "IFCPIPEFITTING" | "IFCPIPELEMENT" => {
                ElementCategory::Pipe
            }
            "DUCT" | "IFCDUCTSEGMENT" | "IFCDUCTFITTING" => ElementCategory::Duct,
            "CABLECARRIER" | "IFCCABLECARRIERSEGMENT" | "IFCCABLECARRIERFITTING" => {
                ElementCategory::CableCarrier
            }

            "DOOR" | "IFCDOOR" => ElementCategory::Door,
            "WINDOW" | "IFCWINDOW" => ElementCategory::Window,
            "SPACE" | "IFCSPACE" => ElementCategory::Space,
            "ROOF" | "IFCROOF" => ElementCategory::Roof,
            "COVERING" | "IFCCOVERING" => ElementCategory::Covering,
            "FURNITURE" | "IFCFURNITURE" | "IFCFURNISHINGELEMENT" => ElementCategory::Furniture,

            _ => ElementCategory::Unknown(s.to_string()),
        }
    }

    /// Get the canonical category name
    pub fn name(&self) -> &str {
        match self {
            ElementCategory::Wall => "WALL",
            ElementCategory::Column => "COLUMN",
            ElementCategory::Beam => "BEAM",
            ElementCategory::Slab => "SLAB",
            ElementCategory::Footing => "FOOTING",
            ElementCategory::Pipe => "PIPE",
            ElementCategory::Duct => "DUCT",
            ElementCategory::CableCarrier => "CABLECARRIER",
            ElementCategory::Door => "DOOR",
            ElementCategory::Window => "WINDOW",
            ElementCategory::Space => "SPACE",
            ElementCategory::Roof => "ROOF",
            ElementCategory::Covering => "COVERING",
            ElementCategory::Furniture => "FURNITURE",
            ElementCategory::Unknown(s) => s,
        }
    }

    /// Check if this category is a load-bearing structural element
    ///
    /// Structural-vs-structural overlaps classify as hard clashes.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ElementCategory::Wall
                | ElementCategory::Column
                | ElementCategory::Beam
                | ElementCategory::Slab
                | ElementCategory::Footing
        )
    }

    /// Check if this category is an MEP (mechanical/electrical/plumbing) element
    pub fn is_mep(&self) -> bool {
        matches!(
            self,
            ElementCategory::Pipe | ElementCategory::Duct | ElementCategory::CableCarrier
        )
    }
}

impl Default for ElementCategory {
    fn default() -> Self {
        ElementCategory::Unknown(String::new())
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Element summary embedded in clash records
///
/// Carries enough identity for report rows and for highlighting the element
/// in a downstream viewer.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ElementRef {
    /// Element id
    pub id: ElementId,
    /// Display name
    pub name: String,
    /// Element category
    pub category: ElementCategory,
}

impl ElementRef {
    /// Create a new element reference
    pub fn new(id: ElementId, name: impl Into<String>, category: ElementCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
        }
    }
}
