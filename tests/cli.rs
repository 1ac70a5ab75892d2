use assert_cmd::Command;
use predicates::str::contains;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("seatangle-report").unwrap()
}

fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn profile() -> Value {
    json!({
        "ProfileSummary": {
            "CompanyName": "FOSSEE",
            "CompanyLogo": "IIT Bombay",
            "Group/TeamName": "Osdag",
            "Designer": "Rachana"
        },
        "ProjectTitle": "Onboarding Quiz",
        "Subtitle": "Seated angle connection",
        "JobNumber": "SA_2",
        "Client": "Osdag Reviewer",
        "AdditionalComments": "Add more comments here."
    })
}

#[test]
fn defaults_prints_design_record() {
    let out = cmd().arg("defaults").assert().success().get_output().stdout.clone();
    let design: Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(design["connection"]["bolt_diameter"], 16);
    assert_eq!(design["connection"]["connectivity"], "Column flange-Beam flange");
    assert_eq!(design["results"]["safe"], true);
}

#[test]
fn report_writes_html() {
    let tmp = TempDir::new().unwrap();
    let profile = write_json(tmp.path(), "profile.json", &profile());
    let out = tmp.path().join("design_report_SA_2.html");

    cmd()
        .args(["report", "--profile"])
        .arg(&profile)
        .arg("--images")
        .arg(tmp.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(contains("Wrote"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("SA_2"));
    assert!(html.contains("<b>Pass</b>"));
}

#[test]
fn report_uses_partial_design_record() {
    let tmp = TempDir::new().unwrap();
    let profile = write_json(tmp.path(), "profile.json", &profile());
    let design = write_json(
        tmp.path(),
        "design.json",
        &json!({
            "connection": { "bolt_diameter": 20 },
            "results": { "safe": false }
        }),
    );
    let out = tmp.path().join("report.html");

    cmd()
        .args(["report", "--profile"])
        .arg(&profile)
        .arg("--design")
        .arg(&design)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(contains("WARN"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("Bolt 20dia"));
    assert!(html.contains("<b>Fail</b>"));
}

#[test]
fn missing_profile_key_fails_without_output() {
    let tmp = TempDir::new().unwrap();
    let mut incomplete = profile();
    incomplete.as_object_mut().unwrap().remove("JobNumber");
    let profile = write_json(tmp.path(), "profile.json", &incomplete);
    let out = tmp.path().join("report.html");

    cmd()
        .args(["report", "--profile"])
        .arg(&profile)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("missing field in profile metadata: JobNumber"));

    assert!(!out.exists());
}

#[test]
fn invalid_design_json_is_reported() {
    let tmp = TempDir::new().unwrap();
    let profile = write_json(tmp.path(), "profile.json", &profile());
    let design = tmp.path().join("design.json");
    fs::write(&design, "{ not json").unwrap();

    cmd()
        .args(["report", "--profile"])
        .arg(&profile)
        .arg("--design")
        .arg(&design)
        .arg("-o")
        .arg(tmp.path().join("report.html"))
        .assert()
        .failure()
        .stderr(contains("invalid json"));
}
