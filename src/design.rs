//! Design record for a seated angle connection.
//!
//! The calculation stage fills this record; the report only reads it. Every
//! field carries a default so a partial JSON document is enough to describe
//! a design (omitted fields keep the values below).

use crate::{ReportError, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Complete input of one design report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatedAngleDesign {
    pub preferences: DesignPreferences,
    pub connection: ConnectionParams,
    pub geometry: Geometry,
    pub results: DesignResults,
    pub metadata: ReportMetadata,
}

impl SeatedAngleDesign {
    /// Load a (possibly partial) design record from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        serde_json::from_str(&text).map_err(|source| ReportError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| ReportError::Json {
            path: "<design record>".into(),
            source,
        })
    }
}

/// Bolt hole type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleType {
    #[default]
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Over-sized")]
    OverSized,
}

impl fmt::Display for HoleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HoleType::Standard => write!(f, "Standard"),
            HoleType::OverSized => write!(f, "Over-sized"),
        }
    }
}

/// Edge preparation; selects the minimum edge distance multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeType {
    #[default]
    #[serde(rename = "Sheared and hand flame cut")]
    ShearedOrHandFlameCut,
    #[serde(rename = "Rolled, machine-flame cut, sawn and planed")]
    RolledOrMachined,
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EdgeType::ShearedOrHandFlameCut => write!(f, "Sheared and hand flame cut"),
            EdgeType::RolledOrMachined => {
                write!(f, "Rolled, machine-flame cut, sawn and planed")
            }
        }
    }
}

/// How the supported beam meets the supporting column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    #[default]
    #[serde(rename = "Column flange-Beam flange")]
    ColumnFlangeBeamFlange,
    #[serde(rename = "Column flange-Beam web")]
    ColumnFlangeBeamWeb,
    #[serde(rename = "Column web-Beam web")]
    ColumnWebBeamWeb,
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Connectivity::ColumnFlangeBeamFlange => "Column flange-Beam flange",
            Connectivity::ColumnFlangeBeamWeb => "Column flange-Beam web",
            Connectivity::ColumnWebBeamWeb => "Column web-Beam web",
        };
        f.write_str(s)
    }
}

/// Partial safety factors and designer preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignPreferences {
    /// Bolts, resistance of connection.
    pub gamma_mb: f64,
    /// Yielding or buckling.
    pub gamma_m0: f64,
    /// Ultimate stress.
    pub gamma_m1: f64,
    pub beam_col_clear_gap: u32,
    pub bolt_hole_clearance: f64,
    pub custom_hole_clearance: f64,
    pub bolt_hole_type: HoleType,
    pub bolt_fu_overwrite: Option<u32>,
    /// Slip factor for HSFG bolts.
    pub mu_f: f64,
    pub min_edge_multiplier: f64,
    pub type_of_edge: EdgeType,
    pub is_environ_corrosive: bool,
    pub design_method: String,
    /// Clearance of the bolt row from the root of the seated angle.
    pub root_clearance: f64,
}

impl Default for DesignPreferences {
    fn default() -> Self {
        Self {
            gamma_mb: 1.25,
            gamma_m0: 1.10,
            gamma_m1: 1.25,
            beam_col_clear_gap: 10,
            bolt_hole_clearance: 2.0,
            custom_hole_clearance: 2.0,
            bolt_hole_type: HoleType::Standard,
            bolt_fu_overwrite: None,
            mu_f: 0.48,
            min_edge_multiplier: 1.7,
            type_of_edge: EdgeType::ShearedOrHandFlameCut,
            is_environ_corrosive: false,
            design_method: "Limit State Design".to_string(),
            root_clearance: 5.0,
        }
    }
}

/// Sections, materials, loading and bolt specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionParams {
    pub top_angle: String,
    pub connectivity: Connectivity,
    pub beam_section: String,
    pub column_section: String,
    /// Material strengths (MPa).
    pub beam_fu: u32,
    pub beam_fy: u32,
    pub column_fu: u32,
    pub column_fy: u32,
    pub angle_fu: u32,
    pub angle_fy: u32,
    /// Factored shear force (kN).
    pub shear_force: f64,
    pub bolt_diameter: u32,
    pub bolt_type: String,
    pub bolt_grade: String,
    pub bolt_fu: u32,
    pub bolt_hole_diameter: u32,
    pub angle_sec: String,
}

impl Default for ConnectionParams {
    fn default() -> Self {
        Self {
            top_angle: "75 75 x 8".to_string(),
            connectivity: Connectivity::ColumnFlangeBeamFlange,
            beam_section: "MB 300".to_string(),
            column_section: "UC 203 x 203 x 86".to_string(),
            beam_fu: 410,
            beam_fy: 250,
            column_fu: 410,
            column_fy: 250,
            angle_fu: 410,
            angle_fy: 250,
            shear_force: 80.0,
            bolt_diameter: 16,
            bolt_type: "HSFG".to_string(),
            bolt_grade: "8.8".to_string(),
            bolt_fu: 800,
            bolt_hole_diameter: 18,
            angle_sec: "150 150 X 15".to_string(),
        }
    }
}

/// Member dimensions (mm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub beam_web_t: f64,
    pub beam_flange_t: f64,
    pub beam_depth: f64,
    pub beam_flange_width: f64,
    pub beam_root_radius: f64,
    pub column_flange_t: f64,
    pub column_depth: f64,
    pub column_flange_width: f64,
    pub column_root_radius: f64,
    pub angle_t: f64,
    /// Longer leg.
    pub angle_leg_a: f64,
    /// Shorter (outstanding) leg.
    pub angle_leg_b: f64,
    pub angle_root_radius: f64,
    pub angle_length: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            beam_web_t: 7.7,
            beam_flange_t: 13.1,
            beam_depth: 300.0,
            beam_flange_width: 140.0,
            beam_root_radius: 14.0,
            column_flange_t: 20.5,
            column_depth: 222.2,
            column_flange_width: 209.1,
            column_root_radius: 10.2,
            angle_t: 8.0,
            angle_leg_a: 75.0,
            angle_leg_b: 75.0,
            angle_root_radius: 7.0,
            angle_length: 140.0,
        }
    }
}

/// Capacities, bolt layout and the overall verdict from the calculation stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignResults {
    pub safe: bool,
    /// kN-mm
    pub moment_at_root_angle: f64,
    /// Moment capacity of the outstanding leg (kN-mm).
    pub moment_capacity_angle: f64,
    /// Outstanding leg in high shear (Cl 8.2.1).
    pub is_shear_high: bool,
    pub moment_high_shear_beta: f64,
    /// Moment capacity of the outstanding leg under low shear.
    pub leg_moment_d: f64,
    pub outstanding_leg_shear_capacity: f64,
    pub bolt_shear_capacity: f64,
    pub k_b: f64,
    pub bolt_bearing_capacity: f64,
    pub bolt_value: f64,
    pub bolts_required: u32,
    pub bolts_provided: u32,
    pub num_rows: u32,
    pub num_cols: u32,
    pub pitch: f64,
    pub gauge: f64,
    pub min_end_dist: f64,
    pub min_edge_dist: f64,
    pub min_pitch: f64,
    pub min_gauge: f64,
    pub end_dist: f64,
    pub edge_dist: f64,
    pub max_spacing: f64,
    pub max_edge_dist: f64,
}

impl Default for DesignResults {
    fn default() -> Self {
        Self {
            safe: true,
            moment_at_root_angle: 603.5,
            moment_capacity_angle: 1193.2,
            is_shear_high: false,
            moment_high_shear_beta: 1.0,
            leg_moment_d: 1193.2,
            outstanding_leg_shear_capacity: 333.4,
            bolt_shear_capacity: 56.6,
            k_b: 0.508,
            bolt_bearing_capacity: 125.0,
            bolt_value: 56.6,
            bolts_required: 2,
            bolts_provided: 2,
            num_rows: 1,
            num_cols: 2,
            pitch: 0.0,
            gauge: 60.0,
            min_end_dist: 37.4,
            min_edge_dist: 37.4,
            min_pitch: 50.0,
            min_gauge: 50.0,
            end_dist: 40.0,
            edge_dist: 40.0,
            max_spacing: 247.0,
            max_edge_dist: 92.4,
        }
    }
}

/// Identification printed in every report header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportMetadata {
    pub company_name: String,
    pub company_logo: String,
    pub group_team_name: String,
    pub designer: String,
    pub project_title: String,
    pub sub_title: String,
    pub job_number: String,
    pub client: String,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            company_name: "FOSSEE".to_string(),
            company_logo: String::new(),
            group_team_name: "Osdag".to_string(),
            designer: "Rachana".to_string(),
            project_title: "Onboarding Quiz".to_string(),
            sub_title: "Seated angle connection".to_string(),
            job_number: "SA_2".to_string(),
            client: "Osdag Reviewer".to_string(),
        }
    }
}
