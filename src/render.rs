//! Report rendering (HTML).

pub mod html;

use crate::design::SeatedAngleDesign;
use crate::diagnostics;
use crate::profile::ProfileSummary;
use crate::view::{self, HeaderView};
use crate::{ReportError, Result};

use chrono::{Local, NaiveDate};
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Builds the design report of one seated angle connection.
///
/// Construct it with defaults (or from a record filled by the calculation
/// stage), adjust fields if needed, then render once.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    design: SeatedAngleDesign,
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_design(design: SeatedAngleDesign) -> Self {
        Self { design }
    }

    pub fn design(&self) -> &SeatedAngleDesign {
        &self.design
    }

    pub fn design_mut(&mut self) -> &mut SeatedAngleDesign {
        &mut self.design
    }

    /// Render the report dated today and write it to `output`.
    pub fn render(&mut self, metadata: &Value, output: &Path, image_folder: &Path) -> Result<()> {
        self.render_on(Local::now().date_naive(), metadata, output, image_folder)
    }

    /// Render the report with an explicit date.
    ///
    /// The metadata is validated before anything touches the filesystem, so a
    /// missing key never leaves a file behind.
    pub fn render_on(
        &mut self,
        date: NaiveDate,
        metadata: &Value,
        output: &Path,
        image_folder: &Path,
    ) -> Result<()> {
        let profile = ProfileSummary::from_value(metadata)?;
        self.render_profile(date, &profile, output, image_folder)
    }

    /// Same as [`render_on`](Self::render_on) with an already validated profile.
    pub fn render_profile(
        &mut self,
        date: NaiveDate,
        profile: &ProfileSummary,
        output: &Path,
        image_folder: &Path,
    ) -> Result<()> {
        profile.apply_to(&mut self.design.metadata);
        if !self.design.results.safe {
            diagnostics::warn(format!(
                "design of job {} does not satisfy all checks; report concludes Fail",
                self.design.metadata.job_number
            ));
        }

        let html = self.to_html(date, &profile.additional_comments, image_folder)?;
        write_report(output, &html)
    }

    /// The full document as a string.
    pub fn to_html(&self, date: NaiveDate, comments: &str, image_folder: &Path) -> Result<String> {
        let report = view::build_report_view(&self.design, date, comments, image_folder);
        html::render_html_report(&report)
    }

    /// Header block repeated at the top of each section.
    pub fn design_report_header(&self, date: NaiveDate) -> String {
        html::design_report_header(&HeaderView::new(&self.design.metadata, date))
    }
}

fn write_report(path: &Path, html: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(html.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| ReportError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    fn metadata() -> Value {
        json!({
            "ProfileSummary": {
                "CompanyName": "Northwind Steel",
                "CompanyLogo": "logo.png",
                "Group/TeamName": "Connections",
                "Designer": "J. Doe"
            },
            "ProjectTitle": "Warehouse",
            "Subtitle": "Grid B",
            "JobNumber": "JOB-77",
            "Client": "Harbor Authority",
            "AdditionalComments": "Check <site> tolerances & report."
        })
    }

    #[test]
    fn render_overrides_metadata_but_not_engineering_fields() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.html");

        let mut assembler = ReportAssembler::new();
        assembler.design_mut().results.bolt_shear_capacity = 45.2;
        assembler
            .render_on(date(), &metadata(), &out, Path::new("imgs"))
            .unwrap();

        assert_eq!(assembler.design().metadata.client, "Harbor Authority");
        assert_eq!(assembler.design().metadata.designer, "J. Doe");
        assert_eq!(assembler.design().results.bolt_shear_capacity, 45.2);
        assert_eq!(assembler.design().connection.bolt_grade, "8.8");
    }

    #[test]
    fn header_is_pure_function_of_state_and_date() {
        let assembler = ReportAssembler::new();
        let a = assembler.design_report_header(date());
        let b = assembler.design_report_header(date());
        assert_eq!(a, b);
        assert!(a.contains("31 /01 /2025"));
        assert!(a.contains("Rachana"));
    }

    #[test]
    fn comments_are_escaped_in_document() {
        let assembler = ReportAssembler::new();
        let html = assembler
            .to_html(date(), "Check <site> tolerances & report.", Path::new("."))
            .unwrap();
        assert!(html.contains("Check &lt;site&gt; tolerances &amp; report."));
        assert!(!html.contains("<site>"));
    }

    #[test]
    fn missing_parent_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("no-such-dir").join("report.html");
        let err = ReportAssembler::new()
            .render_on(date(), &metadata(), &out, Path::new("."))
            .unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn rendering_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.html");
        fs::write(&out, "stale").unwrap();

        ReportAssembler::new()
            .render_on(date(), &metadata(), &out, Path::new("."))
            .unwrap();
        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("<!DOCTYPE html>"));
        assert!(!text.contains("stale"));
    }
}
