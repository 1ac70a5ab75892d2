//! Profile metadata supplied by the designer (company, project, client).
//!
//! The record is a nested JSON object:
//!
//! ```json
//! {
//!   "ProfileSummary": {
//!     "CompanyName": "...", "CompanyLogo": "...",
//!     "Group/TeamName": "...", "Designer": "..."
//!   },
//!   "ProjectTitle": "...", "Subtitle": "...", "JobNumber": "...",
//!   "Client": "...", "AdditionalComments": "...", "Method": "..."
//! }
//! ```
//!
//! Every key except `Method` is required. `Method` is accepted and ignored;
//! the design method comes from the design preferences.

use crate::design::ReportMetadata;
use crate::diagnostics;
use crate::{ReportError, Result};

use serde_json::Value;
use std::fs;
use std::path::Path;

const PROFILE: &str = "ProfileSummary";

/// Validated profile metadata, all values already stringified.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub company_name: String,
    pub company_logo: String,
    pub group_team_name: String,
    pub designer: String,
    pub project_title: String,
    pub subtitle: String,
    pub job_number: String,
    pub client: String,
    pub additional_comments: String,
}

impl ProfileSummary {
    /// Validate a metadata record. All missing keys are reported together.
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut missing: Vec<String> = Vec::new();
        let profile = value.get(PROFILE);

        let mut nested = |key: &str| match profile.and_then(|p| p.get(key)) {
            Some(v) => stringify(&format!("{PROFILE}.{key}"), v),
            None => {
                missing.push(format!("{PROFILE}.{key}"));
                String::new()
            }
        };
        let company_name = nested("CompanyName");
        let company_logo = nested("CompanyLogo");
        let group_team_name = nested("Group/TeamName");
        let designer = nested("Designer");

        let mut top = |key: &str| match value.get(key) {
            Some(v) => stringify(key, v),
            None => {
                missing.push(key.to_string());
                String::new()
            }
        };
        let project_title = top("ProjectTitle");
        let subtitle = top("Subtitle");
        let job_number = top("JobNumber");
        let client = top("Client");
        let additional_comments = top("AdditionalComments");

        if !missing.is_empty() {
            return Err(ReportError::MissingField(missing.join(", ")));
        }

        Ok(Self {
            company_name,
            company_logo,
            group_team_name,
            designer,
            project_title,
            subtitle,
            job_number,
            client,
            additional_comments,
        })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        let value: Value = serde_json::from_str(&text).map_err(|source| ReportError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(&value)
    }

    /// Overwrite the header fields of `meta`; engineering fields live
    /// elsewhere and are never touched.
    pub fn apply_to(&self, meta: &mut ReportMetadata) {
        meta.company_name = self.company_name.clone();
        meta.company_logo = self.company_logo.clone();
        meta.group_team_name = self.group_team_name.clone();
        meta.designer = self.designer.clone();
        meta.project_title = self.project_title.clone();
        meta.sub_title = self.subtitle.clone();
        meta.job_number = self.job_number.clone();
        meta.client = self.client.clone();
    }
}

fn stringify(key: &str, v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => {
            diagnostics::warn(format!(
                "profile field '{}' is not a string; using {}",
                key, other
            ));
            other.to_string()
        }
    }
}
