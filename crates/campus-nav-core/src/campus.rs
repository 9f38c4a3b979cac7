//! Built-in IIT Jodhpur campus map
//!
//! All edges are two-way; distances are in kilometres.

use crate::error::Result;
use crate::graph::{EdgeSpec, Graph};

/// (from, to, km)
const CAMPUS_EDGES: &[(&str, &str, f64)] = &[
    // Hostel rows
    ("I3", "I2", 0.06),
    ("I2", "Old_Mess", 0.05),
    ("Old_Mess", "B4", 0.06),
    ("B4", "B5", 0.05),
    ("B5", "B6", 0.05),
    ("B5", "B3", 0.07),
    ("B3", "B2", 0.05),
    ("B2", "B1", 0.05),
    ("B2", "New_Mess", 0.06),
    ("New_Mess", "G4", 0.05),
    ("G4", "G5", 0.05),
    ("G5", "G6", 0.05),
    ("G5", "G3", 0.06),
    ("G3", "G2", 0.05),
    ("G2", "G1", 0.05),
    ("G1", "Y4", 0.08),
    ("Y4", "Y3", 0.07),
    ("Y3", "O4", 0.08),
    ("O4", "O3", 0.07),
    ("O3", "Akaash_Complex", 0.12),
    ("Akaash_Complex", "Football_Field", 0.10),
    ("Football_Field", "PHC", 0.08),
    // Landmarks and academic area
    ("G6", "Tapri", 0.05),
    ("B6", "Tapri", 0.10),
    ("Tapri", "LHC1", 0.08),
    ("LHC1", "LHC2", 0.06),
    ("LHC1", "Chemistry", 0.07),
    ("Chemistry", "Physics", 0.06),
    ("Chemistry", "Bio", 0.06),
    ("Bio", "CSE", 0.08),
    ("CSE", "Maths", 0.07),
    ("Maths", "SME", 0.08),
    ("SME", "SOLA", 0.07),
    ("SOLA", "Shamiyana", 0.12),
    ("Shamiyana", "Civil", 0.10),
    ("Civil", "Mechanical", 0.08),
    ("Mechanical", "Electrical", 0.08),
    ("Electrical", "Materials", 0.09),
    ("Materials", "Physics", 0.10),
    // Cross connections
    ("New_Mess", "LHC1", 0.18),
    ("B3", "Tapri", 0.12),
    ("G1", "LHC2", 0.20),
    ("O4", "Physics", 0.30),
    ("Old_Mess", "Shamiyana", 0.45),
    ("B1", "CSE", 0.55),
];

/// Location names grouped for display
pub const LOCATION_GROUPS: &[(&str, &[&str])] = &[
    (
        "Hostels",
        &[
            "I3", "I2", "B1", "B2", "B3", "B4", "B5", "B6", "G1", "G2", "G3", "G4", "G5", "G6",
            "Y3", "Y4", "O3", "O4",
        ],
    ),
    ("Messes", &["Old_Mess", "New_Mess"]),
    (
        "Landmarks",
        &["Tapri", "Shamiyana", "Akaash_Complex", "Football_Field", "PHC"],
    ),
    ("LHCs", &["LHC1", "LHC2"]),
    (
        "Departments",
        &[
            "CSE",
            "Electrical",
            "Mechanical",
            "Civil",
            "Physics",
            "Chemistry",
            "Bio",
            "Materials",
            "Maths",
            "SME",
            "SOLA",
        ],
    ),
];

/// The campus edge list in insertion order
pub fn campus_edges() -> Vec<EdgeSpec> {
    CAMPUS_EDGES
        .iter()
        .map(|&(from, to, km)| EdgeSpec::new(from, to, km))
        .collect()
}

pub fn build_campus_map() -> Result<Graph> {
    Graph::from_edges(campus_edges())
}
