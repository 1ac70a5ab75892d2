//! Report model: the design record laid out as sections and rows.
//!
//! Everything here is plain data; `render::html` turns it into markup. Cell
//! contents are already markup fragments (formulas use `<sub>`, `<br>`,
//! entities), so any text coming from outside the crate is escaped on the
//! way in.

use crate::design::{Connectivity, ReportMetadata, SeatedAngleDesign};
use crate::render::html::{escape_attr, escape_text, space, sub};

use chrono::NaiveDate;
use std::f64::consts::PI;
use std::path::Path;

/// Date format printed in the report header.
pub const DATE_FORMAT: &str = "%d /%m /%Y";

/// Image file names expected inside the image folder.
pub const IMAGE_3D: &str = "3D_Model.png";
pub const IMAGE_TOP: &str = "seatTop.png";
pub const IMAGE_SIDE: &str = "seatSide.png";
pub const IMAGE_FRONT: &str = "seatFront.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conclusion {
    Pass,
    Fail,
}

impl Conclusion {
    pub fn from_safe(safe: bool) -> Self {
        if safe {
            Conclusion::Pass
        } else {
            Conclusion::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Conclusion::Pass => "Pass",
            Conclusion::Fail => "Fail",
        }
    }

    /// Colored verdict paragraph used in the banner and the remark column.
    pub fn banner(self) -> String {
        let color = match self {
            Conclusion::Pass => "green",
            Conclusion::Fail => "red",
        };
        format!(
            "<p align=left style=color:{}><b>{}</b></p>",
            color,
            self.as_str()
        )
    }
}

/// Identification block repeated at the top of every section.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub company_name: String,
    pub project_title: String,
    pub group_team_name: String,
    pub subtitle: String,
    pub designer: String,
    pub job_number: String,
    pub date: String,
    pub client: String,
}

impl HeaderView {
    pub fn new(meta: &ReportMetadata, date: NaiveDate) -> Self {
        Self {
            company_name: escape_text(&meta.company_name),
            project_title: escape_text(&meta.project_title),
            group_team_name: escape_text(&meta.group_team_name),
            subtitle: escape_text(&meta.sub_title),
            designer: escape_text(&meta.designer),
            job_number: escape_text(&meta.job_number),
            date: date.format(DATE_FORMAT).to_string(),
            client: escape_text(&meta.client),
        }
    }
}

/// One row of the design summary table.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryEntry {
    /// Label spanning both columns.
    Heading {
        indent: usize,
        label: String,
        css: &'static str,
    },
    Field {
        indent: usize,
        label: String,
        value: String,
        label_css: &'static str,
        value_css: &'static str,
    },
}

impl SummaryEntry {
    fn heading(indent: usize, label: impl Into<String>, css: &'static str) -> Self {
        SummaryEntry::Heading {
            indent,
            label: label.into(),
            css,
        }
    }

    fn field(indent: usize, label: impl Into<String>, value: impl Into<String>) -> Self {
        SummaryEntry::Field {
            indent,
            label: label.into(),
            value: value.into(),
            label_css: "detail2",
            value_css: "detail2",
        }
    }

    /// Bold label with a blank value cell.
    fn label(indent: usize, label: impl Into<String>) -> Self {
        SummaryEntry::Field {
            indent,
            label: label.into(),
            value: " ".to_string(),
            label_css: "detail1",
            value_css: "detail1",
        }
    }

    /// Bold label, plain value (member sections).
    fn member(indent: usize, label: impl Into<String>, value: impl Into<String>) -> Self {
        SummaryEntry::Field {
            indent,
            label: label.into(),
            value: value.into(),
            label_css: "detail1",
            value_css: "detail2",
        }
    }
}

/// One verified criterion of the design check table.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRow {
    pub check: String,
    pub required: String,
    pub provided: String,
    pub remark: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckEntry {
    /// Table title spanning all four columns.
    Title(String),
    /// Check / Required / Provided / Remark.
    ColumnHeads,
    /// Component group spanning all four columns.
    Group(String),
    Check(CheckRow),
}

fn check(
    name: impl Into<String>,
    required: impl Into<String>,
    provided: impl Into<String>,
    remark: impl Into<String>,
) -> CheckEntry {
    CheckEntry::Check(CheckRow {
        check: name.into(),
        required: required.into(),
        provided: provided.into(),
        remark: remark.into(),
    })
}

/// Image references for the 2x2 views grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewImages {
    pub model_3d: String,
    pub top: String,
    pub side: String,
    pub front: String,
}

impl ViewImages {
    /// Paths are joined onto `folder`; the files are not required to exist.
    pub fn in_folder(folder: &Path) -> Self {
        let at = |name: &str| escape_attr(&folder.join(name).display().to_string());
        Self {
            model_3d: at(IMAGE_3D),
            top: at(IMAGE_TOP),
            side: at(IMAGE_SIDE),
            front: at(IMAGE_FRONT),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub header: HeaderView,
    pub conclusion: Conclusion,
    pub summary: Vec<SummaryEntry>,
    pub checks: Vec<CheckEntry>,
    pub images: ViewImages,
    /// Escaped free text.
    pub comments: String,
}

/// Lay out the full report for `design`.
pub fn build_report_view(
    design: &SeatedAngleDesign,
    date: NaiveDate,
    comments: &str,
    image_folder: &Path,
) -> ReportView {
    let conclusion = Conclusion::from_safe(design.results.safe);
    ReportView {
        header: HeaderView::new(&design.metadata, date),
        conclusion,
        summary: build_summary(design, conclusion),
        checks: build_checks(design, conclusion),
        images: ViewImages::in_folder(image_folder),
        comments: escape_text(comments),
    }
}

fn build_summary(design: &SeatedAngleDesign, conclusion: Conclusion) -> Vec<SummaryEntry> {
    let c = &design.connection;
    let r = &design.results;
    let hole = design.preferences.bolt_hole_type.to_string();

    let mut rows = vec![
        SummaryEntry::heading(0, "Design Conclusion", "header0"),
        SummaryEntry::Field {
            indent: 1,
            label: "Seated Angle".to_string(),
            value: conclusion.banner(),
            label_css: "detail1",
            value_css: "detail1",
        },
        SummaryEntry::heading(0, "Seated Angle", "header0"),
        SummaryEntry::heading(0, "Connection Properties", "detail"),
        SummaryEntry::heading(0, "Connection", "detail1"),
        SummaryEntry::field(1, "Connection Title", "Seated Angle"),
        SummaryEntry::field(1, "Connection Type", "Shear Connection"),
        SummaryEntry::label(0, "Connection Category"),
        SummaryEntry::field(1, "Connectivity", c.connectivity.to_string()),
        SummaryEntry::field(1, "Beam Connection", "Bolted"),
        SummaryEntry::field(1, "Column Connection", "Bolted"),
        SummaryEntry::label(0, "Loading (Factored Load)"),
        SummaryEntry::field(1, "Shear Force (kN)", num(c.shear_force)),
        SummaryEntry::heading(0, "Components", "detail1"),
    ];

    let members = [
        ("Column Section", &c.column_section, c.column_fu),
        ("Beam Section", &c.beam_section, c.beam_fu),
        ("Seated Angle Section", &c.angle_sec, c.angle_fu),
        ("Top Angle Section", &c.top_angle, c.angle_fu),
    ];
    for (label, section, fu) in members {
        rows.push(SummaryEntry::member(1, label, escape_text(section)));
        rows.push(SummaryEntry::field(2, "Material", format!("Fe {}", fu)));
        rows.push(SummaryEntry::field(2, "Hole", hole.clone()));
    }

    rows.extend([
        SummaryEntry::heading(1, "Bolts", "detail1"),
        SummaryEntry::field(2, "Type", escape_text(&c.bolt_type)),
        SummaryEntry::field(2, "Grade", escape_text(&c.bolt_grade)),
        SummaryEntry::field(2, "Diameter (mm)", c.bolt_diameter.to_string()),
        SummaryEntry::field(2, "Bolts - Required", r.bolts_required.to_string()),
        SummaryEntry::field(2, "Bolts - Provided", r.bolts_provided.to_string()),
        SummaryEntry::field(2, "Rows", r.num_rows.to_string()),
        SummaryEntry::field(2, "Columns", r.num_cols.to_string()),
        SummaryEntry::field(2, "Gauge (mm)", num(r.gauge)),
        SummaryEntry::field(2, "Pitch (mm)", num(r.pitch)),
        SummaryEntry::field(2, "End Distance (mm)", num(r.end_dist)),
        SummaryEntry::field(2, "Edge Distance (mm)", num(r.edge_dist)),
        SummaryEntry::heading(0, "Assembly", "detail1"),
        SummaryEntry::field(
            1,
            "Column-Beam Clearance (mm)",
            design.preferences.beam_col_clear_gap.to_string(),
        ),
    ]);

    rows
}

fn build_checks(design: &SeatedAngleDesign, conclusion: Conclusion) -> Vec<CheckEntry> {
    let mut rows = vec![CheckEntry::Title("Design Check".to_string()), CheckEntry::ColumnHeads];
    rows.extend(bolt_checks(design, &conclusion.banner()));
    rows.extend(seated_angle_checks(design, &conclusion.banner()));
    rows
}

/// Text of a measured value: integral values keep one decimal (`140.0`),
/// others print their shortest form (`7.7`, `0.6126`).
pub fn num(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
        format!("{:.1}", x)
    } else {
        x.to_string()
    }
}

/// `round(x, places)`.
pub fn round_to(x: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (x * f).round() / f
}

/// Bounds for pitch and gauge: `2.5 d` and `min(32 t, 300)`.
fn spacing_limits(bolt_diameter: u32, web_t: f64) -> (i64, i64) {
    let min = (2.5 * bolt_diameter as f64) as i64;
    let max = if 32.0 * web_t > 300.0 {
        300
    } else {
        (32.0 * web_t).ceil() as i64
    };
    (min, max)
}

fn bolt_checks(design: &SeatedAngleDesign, remark: &str) -> Vec<CheckEntry> {
    let c = &design.connection;
    let g = &design.geometry;
    let r = &design.results;
    let p = &design.preferences;

    let d = c.bolt_diameter;
    let t = g.beam_web_t;
    let d0 = c.bolt_hole_diameter;

    let mut rows = vec![CheckEntry::Group(format!("Bolt {}dia", d))];

    let area_factor = round_to(PI / 4.0 * 0.78, 4);
    rows.push(check(
        "Bolt shear capacity (kN)",
        " ",
        format!(
            "<i>V</i><sub>dsb</sub> = ({}*{}*{}*{})/ <br>(&#8730;3*{}*1000) = {}<br> [cl. 10.3.3]",
            c.bolt_fu,
            num(area_factor),
            d,
            d,
            num(p.gamma_mb),
            num(r.bolt_shear_capacity)
        ),
        " ",
    ));

    rows.push(check(
        "Bolt bearing capacity (kN)",
        format!(
            "<i>V<sub>dpb</sub></i> = 2.5 * k<sub>b</sub> * bolt_diameter * critical_thickness * <br>{} <i>f</i><sub>u</sub>/<i>gamma<sub>mb</sub></i> <br> [Cl. 10.3.4]",
            space(3)
        ),
        format!(
            "<i>V</i><sub>dpb</sub> = (2.5*{}*{}*{}*{})/({}*1000)  <br>{} ={} kN",
            num(r.k_b),
            d,
            num(t),
            c.beam_fu,
            num(p.gamma_mb),
            space(2),
            num(r.bolt_bearing_capacity)
        ),
        "",
    ));

    rows.push(check(
        "Bolt capacity (kN)",
        " ",
        format!(
            "Min ({}, {}) = {}",
            num(r.bolt_shear_capacity),
            num(r.bolt_bearing_capacity),
            num(r.bolt_value)
        ),
        "",
    ));

    // Fixed display value, not derived from shear_force / bolt_value.
    let bolts = "4";
    rows.push(check(
        "No. of bolts",
        format!("{}/{} = {}", num(c.shear_force), num(r.bolt_value), bolts),
        r.bolts_provided.to_string(),
        remark,
    ));
    rows.push(check("No. of columns", " ", r.num_cols.to_string(), remark));
    rows.push(check("No. of row(s)", " &#8804; 2", r.num_rows.to_string(), remark));

    let (min_spacing, max_spacing) = spacing_limits(d, t);
    rows.push(check(
        "Bolt pitch (mm)",
        format!(
            " &#8805; 2.5* {} = {},  &#8804; Min(32*{}, 300) = {}<br> [cl. 10.2.2]",
            d, min_spacing, num(t), max_spacing
        ),
        num(r.pitch),
        remark,
    ));
    rows.push(check(
        "Bolt gauge (mm)",
        format!(
            " &#8805; 2.5*{} = {}, &#8804; Min(32*{}, 300) = {} <br> [cl. 10.2.2]",
            d, min_spacing, num(t), max_spacing
        ),
        num(r.gauge),
        remark,
    ));

    let min_edge = p.min_edge_multiplier * d0 as f64;
    let max_edge = 12.0 * t;
    rows.push(check(
        "End distance (mm)",
        format!(
            " &#8805; {}*{} = {}, &#8804; 12*{} = {} <br> [cl. 10.2.4]",
            num(p.min_edge_multiplier),
            d0,
            num(min_edge),
            num(t),
            num(max_edge)
        ),
        num(r.end_dist),
        remark,
    ));
    rows.push(check(
        "Edge distance (mm)",
        format!(
            " &#8805; {}*{} = {}, &#8804; 12*{} = {}<br> [Cl. 10.2.4]",
            num(p.min_edge_multiplier),
            d0,
            num(min_edge),
            num(t),
            num(max_edge)
        ),
        num(r.edge_dist),
        remark,
    ));

    rows
}

fn seated_angle_checks(design: &SeatedAngleDesign, remark: &str) -> Vec<CheckEntry> {
    let c = &design.connection;
    let g = &design.geometry;
    let r = &design.results;
    let gamma_m0 = design.preferences.gamma_m0;

    let mut rows = vec![CheckEntry::Group(format!(
        "Seated Angle {}",
        escape_text(&c.angle_sec)
    ))];

    let length_req = match c.connectivity {
        Connectivity::ColumnFlangeBeamWeb => format!(
            "= min(supported_beam_width, supporting_column_width) <br> = min({}, {})",
            num(g.beam_flange_width),
            num(g.column_flange_width)
        ),
        Connectivity::ColumnWebBeamWeb | Connectivity::ColumnFlangeBeamFlange => {
            format!("=width of supported beam <br> ={}", num(g.beam_flange_width))
        }
    };
    rows.push(check(
        "Length (mm)",
        length_req,
        num(g.angle_length),
        remark,
    ));

    rows.push(check(
        "Outstanding leg length (mm)",
        format!(
            "b = R * {}/{}{}<br> [Cl. 8.7.4]",
            sub("gamma", "m0"),
            sub("t", "w"),
            sub("f", "yw")
        ),
        num(g.angle_leg_b),
        remark,
    ));

    let v_dp = sub("V", "dp");
    rows.push(check(
        format!("Shear capacity of outstanding <br>{} leg (kN)", space(1)),
        format!(
            "{v_dp} &#8805; V <br>{v_dp} &#8805; {}kN <br> [Cl. 8.4.1]",
            num(c.shear_force)
        ),
        format!(
            "{v_dp}={}{}/<br> &#8730; 3 *{}({}*{}) * {}/<br> &#8730; 3 *{}<br>={}",
            sub("A", "v"),
            sub("f", "yw"),
            sub("gamma", "m0"),
            num(g.angle_length),
            num(g.angle_t),
            c.angle_fy,
            num(gamma_m0),
            num(r.outstanding_leg_shear_capacity)
        ),
        remark,
    ));

    let (required, provided) = moment_capacity_fields(design);
    rows.push(check(
        format!("Moment capacity of outstanding <br>{} leg (kN-mm)", space(1)),
        required,
        provided,
        remark,
    ));

    rows
}

/// Required/provided cells of the outstanding leg moment check. The clause
/// and the capacity expression depend on whether the leg is in high shear.
fn moment_capacity_fields(design: &SeatedAngleDesign) -> (String, String) {
    let c = &design.connection;
    let g = &design.geometry;
    let r = &design.results;
    let gamma_m0 = design.preferences.gamma_m0;

    let m_d = sub("M", "d");
    let m_dv = sub("M", "dv");
    let elastic = format!("{}{}/{}", sub("Z", "e"), sub("f", "y"), sub("gamma", "m0"));

    let mut provided = format!(
        "{m_d}={}{}{}/{}<br> = 1.0* {}*({}^2/4)*{}/{}<br>",
        sub("beta", "b"),
        sub("Z", "p"),
        sub("f", "y"),
        sub("gamma", "m0"),
        num(g.angle_length),
        num(g.angle_t),
        c.angle_fy,
        num(gamma_m0)
    );

    let mut required: String;
    if r.is_shear_high {
        required = format!("As V &#8805; 0.6 {},<br>[Cl 8.2.1.3] is applicable <br>", sub("V", "d"));
        required += &format!("<br>{m_dv} &#8805; Moment at root of angle");
        required += &format!("<br>{m_dv} &#8805; {}<br>", num(r.moment_at_root_angle));

        provided += &format!("={}<br>", num(round_to(r.leg_moment_d, 2)));
        provided += &format!("<br>{m_dv}= min( (1 - beta){m_d} , 1.2 {elastic} ) <br>");
        provided += &format!(
            "{}beta = ((2V/{})-1)^2 = {}<br>",
            space(2),
            sub("V", "d"),
            num(r.moment_high_shear_beta)
        );
        provided += &format!("<br>{m_dv} = {}", num(r.moment_capacity_angle));
    } else {
        required = format!("As V &#8804; 0.6 {},<br>[Cl 8.2.1.2] is applicable <br>", sub("V", "d"));
        required += &format!("{m_d} &#8805; Moment at root of angle");
        required += &format!("<br>{m_d} &#8805; {}<br>", num(r.moment_at_root_angle));

        provided += &format!("<br>={}", num(r.moment_capacity_angle));
    }

    required += "<br>To avoid irreversible deformation under service loads,";
    required += &format!("<br>{m_d} &#8804; 1.5{elastic}<br>");

    (required, provided)
}
