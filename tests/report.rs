use chrono::NaiveDate;
use seatangle_report::render::ReportAssembler;
use seatangle_report::ReportError;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sample_metadata(job_number: &str) -> Value {
    json!({
        "ProfileSummary": {
            "CompanyName": "FOSSEE",
            "CompanyLogo": "IIT Bombay",
            "Group/TeamName": "Osdag",
            "Designer": "Rachana"
        },
        "ProjectTitle": "Onboarding Quiz",
        "Subtitle": "Seated angle connection",
        "JobNumber": job_number,
        "Client": "Osdag Reviewer",
        "AdditionalComments": "Add more comments here.",
        "Method": "Limit State Design"
    })
}

fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 5).unwrap()
}

fn render(assembler: &mut ReportAssembler, dir: &TempDir, name: &str) -> String {
    let out = dir.path().join(name);
    assembler
        .render_on(fixed_date(), &sample_metadata("SA_2"), &out, Path::new("workspace"))
        .expect("render report");
    fs::read_to_string(out).expect("read report")
}

#[test]
fn default_report_end_to_end() {
    let dir = TempDir::new().unwrap();
    let html = render(&mut ReportAssembler::new(), &dir, "design_report_SA_2.html");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.trim_end().ends_with("</html>"));
    assert!(html.contains("Seated Angle"));
    assert!(html.contains("SA_2"));
    assert!(html.contains("<p align=left style=color:green><b>Pass</b></p>"));
    assert!(html.contains("Add more comments here."));
    assert!(html.contains("05 /11 /2024"));
}

#[test]
fn header_repeats_identically_in_every_section() {
    let dir = TempDir::new().unwrap();
    let mut assembler = ReportAssembler::new();
    let html = render(&mut assembler, &dir, "report.html");

    let header = assembler.design_report_header(fixed_date());
    assert_eq!(html.matches(&header).count(), 4);

    for value in ["FOSSEE", "Rachana", "SA_2", "Osdag Reviewer", "Onboarding Quiz"] {
        assert_eq!(header.matches(value).count(), 1, "{value} in header");
        assert_eq!(html.matches(value).count(), 4, "{value} in document");
    }
}

#[test]
fn quoted_header_values_appear_verbatim() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.html");

    let mut metadata = sample_metadata("SA_2");
    metadata["ProfileSummary"]["Designer"] = json!("O'Brien");
    metadata["ProjectTitle"] = json!("Bay \"C\" retrofit");

    let mut assembler = ReportAssembler::new();
    assembler
        .render_on(fixed_date(), &metadata, &out, Path::new("."))
        .unwrap();
    let html = fs::read_to_string(&out).unwrap();

    assert_eq!(html.matches("O'Brien").count(), 4);
    assert_eq!(html.matches("Bay \"C\" retrofit").count(), 4);
    assert!(!html.contains("&#39;"));
}

#[test]
fn rendering_is_deterministic_for_a_fixed_date() {
    let dir = TempDir::new().unwrap();
    let mut assembler = ReportAssembler::new();
    let first = render(&mut assembler, &dir, "a.html");
    let second = render(&mut assembler, &dir, "b.html");
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn banner_reads_fail_for_unsafe_design() {
    let dir = TempDir::new().unwrap();
    let mut assembler = ReportAssembler::new();
    assembler.design_mut().results.safe = false;
    let html = render(&mut assembler, &dir, "report.html");

    assert!(html.contains("<b>Fail</b>"));
    assert!(!html.contains("Pass"));

    assembler.design_mut().results.safe = true;
    let html = render(&mut assembler, &dir, "report.html");
    assert!(html.contains("<b>Pass</b>"));
    assert!(!html.contains("Fail"));
}

#[test]
fn moment_check_switches_between_shear_clauses() {
    let dir = TempDir::new().unwrap();
    let mut assembler = ReportAssembler::new();
    let low = render(&mut assembler, &dir, "low.html");

    assert!(low.contains("[Cl 8.2.1.2] is applicable"));
    assert!(!low.contains("[Cl 8.2.1.3]"));
    assert!(!low.contains("M<sub>dv</sub>"));
    assert!(!low.contains("beta = ((2V/"));

    {
        let results = &mut assembler.design_mut().results;
        results.is_shear_high = true;
        results.leg_moment_d = 1104.456;
        results.moment_high_shear_beta = 0.36;
        results.moment_capacity_angle = 987.6;
    }
    let high = render(&mut assembler, &dir, "high.html");

    assert!(high.contains("[Cl 8.2.1.3] is applicable"));
    assert!(!high.contains("[Cl 8.2.1.2]"));
    assert!(high.contains("=1104.46<br>"));
    assert!(high.contains("beta = ((2V/V<sub>d</sub>)-1)^2 = 0.36"));
    assert!(high.contains("M<sub>dv</sub> = 987.6"));
}

#[test]
fn bolt_shear_row_formula() {
    let dir = TempDir::new().unwrap();
    let mut assembler = ReportAssembler::new();
    {
        let design = assembler.design_mut();
        design.connection.bolt_diameter = 16;
        design.connection.bolt_grade = "8.8".to_string();
        design.connection.bolt_fu = 800;
        design.results.bolt_shear_capacity = 57.9;
    }
    let html = render(&mut assembler, &dir, "report.html");

    assert!(html.contains("<i>V</i><sub>dsb</sub> = (800*0.6126*16*16)"));
    assert!(html.contains("= 57.9<br> [cl. 10.3.3]"));
    assert!(html.contains("Bolt 16dia"));
}

#[test]
fn missing_client_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.html");

    let mut metadata = sample_metadata("SA_2");
    metadata.as_object_mut().unwrap().remove("Client");

    let err = ReportAssembler::new()
        .render_on(fixed_date(), &metadata, &out, Path::new("."))
        .unwrap_err();
    match err {
        ReportError::MissingField(key) => assert_eq!(key, "Client"),
        other => panic!("expected MissingField, got {other:?}"),
    }
    assert!(!out.exists());
}

#[test]
fn view_images_form_a_two_by_two_grid() {
    let dir = TempDir::new().unwrap();
    let html = render(&mut ReportAssembler::new(), &dir, "report.html");

    let folder = Path::new("workspace");
    let order: Vec<usize> = ["3D_Model.png", "seatTop.png", "seatSide.png", "seatFront.png"]
        .iter()
        .map(|name| {
            let path = folder.join(name).display().to_string();
            html.find(&format!("data=\"{}\"", path))
                .unwrap_or_else(|| panic!("{name} referenced"))
        })
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(html.matches("class=\"header2\"").count(), 4);
}
