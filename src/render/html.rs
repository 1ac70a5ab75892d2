use crate::view::{CheckEntry, HeaderView, ReportView, SummaryEntry};
use crate::Result;

use std::fmt::Write;

/// Document skeleton. Filled with `replace` rather than `format!()` because
/// the stylesheet is full of `{}`.
const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Design Report: Seated Angle</title>
    <style>
        table{width:100%; border-collapse:collapse; border:1px solid black}
        th,td {padding:3px}
        td.detail{background-color:#D5DF93; font-size:20; font-family:Helvetica, Arial, Sans Serif; font-weight:bold}
        td.detail1{font-size:20; font-family:Helvetica, Arial, Sans Serif; font-weight:bold}
        td.detail2{font-size:20; font-family:Helvetica, Arial, Sans Serif}
        td.header0{background-color:#8fac3a; font-size:20; font-family:Helvetica, Arial, Sans Serif; font-weight:bold}
        td.header1{background-color:#E6E6E6; font-size:20; font-family:Helvetica, Arial, Sans Serif; font-weight:bold}
        td.header2{font-size:20; width:50%}
    </style>
</head>
<body>
__BODY__</body>
</html>
"#;

const TABLE_OPEN: &str = r#"<table border-collapse="collapse" border="1px solid black" width=100%>"#;
const PAGE_BREAK: &str = r#"<h1 style="page-break-before:always"></h1>"#;

/// Enclose `param` in angle brackets.
pub fn tag(param: &str) -> String {
    format!("<{}>", param)
}

pub fn nl() -> &'static str {
    "\n"
}

/// `n` tab stops of visible indentation (four `&nbsp;` each).
pub fn space(n: usize) -> String {
    "&nbsp;".repeat(4 * n)
}

/// `n` literal spaces of source indentation.
pub fn html_space(n: usize) -> String {
    " ".repeat(n)
}

pub fn sub(text: &str, subscript: &str) -> String {
    format!("{}<sub>{}</sub>", text, subscript)
}

/// Escape text placed in element content. Quotes are left as typed.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text placed inside a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in escape_text(s).chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Options of a design summary row.
#[derive(Debug, Clone)]
pub struct RowOptions<'a> {
    /// Second cell content; ignored when the label spans.
    pub text_two: &'a str,
    /// Class of the second cell; defaults to the label's class.
    pub text_two_css: Option<&'a str>,
    pub col_span: u8,
    /// Wrap the cells in `<tr>`; header cells share a row and set this off.
    pub is_row: bool,
}

impl Default for RowOptions<'_> {
    fn default() -> Self {
        Self {
            text_two: " ",
            text_two_css: None,
            col_span: 1,
            is_row: true,
        }
    }
}

/// Label/value row (or a spanning label when `col_span != 1`) indented by
/// `indent` tab stops.
pub fn summary_row(indent: usize, text_one: &str, text_one_css: &str, opts: &RowOptions) -> String {
    let mut row = String::new();
    if opts.is_row {
        row.push_str(&tag("tr"));
        row.push_str(nl());
    }

    if opts.col_span != 1 {
        row += &format!(
            "{}<td colspan={} class=\"{}\">{}{}{}{}",
            html_space(4),
            opts.col_span,
            text_one_css,
            space(indent),
            text_one,
            tag("/td"),
            nl()
        );
    } else {
        row += &format!(
            "{}<td class=\"{}\">{}{}{}{}",
            html_space(4),
            text_one_css,
            space(indent),
            text_one,
            tag("/td"),
            nl()
        );
        row += &format!(
            "{}<td class=\"{}\">{}{}{}",
            html_space(4),
            opts.text_two_css.unwrap_or(text_one_css),
            opts.text_two,
            tag("/td"),
            nl()
        );
    }

    if opts.is_row {
        row.push_str(&tag("/tr"));
        row.push_str(nl());
    }
    row
}

/// Options of a design check row.
#[derive(Debug, Clone)]
pub struct CheckRowOptions<'a> {
    /// `4` renders only the first cell, spanning the table.
    pub col_span: u8,
    pub css: [&'a str; 4],
}

impl Default for CheckRowOptions<'_> {
    fn default() -> Self {
        Self {
            col_span: 1,
            css: ["detail1", "detail2", "detail2", "detail1"],
        }
    }
}

/// Check / required / provided / remark row.
pub fn check_row(cells: [&str; 4], opts: &CheckRowOptions) -> String {
    let mut row = format!("{}{}{}", nl(), tag("tr"), nl());

    if opts.col_span == 4 {
        row += &format!(
            "{}<td colspan=4 class=\"{}\">{}{}{}",
            html_space(4),
            opts.css[0],
            cells[0],
            tag("/td"),
            nl()
        );
    } else {
        for (i, (text, css)) in cells.iter().zip(opts.css).enumerate() {
            let indent = if i == 0 { space(1) } else { String::new() };
            row += &format!(
                "{}<td class=\"{}\">{}{}{}{}",
                html_space(4),
                css,
                indent,
                text,
                tag("/td"),
                nl()
            );
        }
    }

    row.push_str(&tag("/tr"));
    row.push_str(nl());
    row
}

fn header_pair(label: &str, value: &str) -> String {
    summary_row(
        0,
        label,
        "detail",
        &RowOptions {
            text_two: value,
            is_row: false,
            ..Default::default()
        },
    )
}

/// Identification table shown at the top of every section.
pub fn design_report_header(h: &HeaderView) -> String {
    let mut s = format!("{} {}{}{}", nl(), nl(), TABLE_OPEN, nl());

    s += &format!("{}{}", tag("tr"), nl());
    s += &format!(
        "{}<td colspan=\"2\" align=\"center\"><object type=\"image/PNG\" data=\"cmpylogoSeatAngle.png\" height=60></object>{}{}",
        html_space(1),
        tag("/td"),
        nl()
    );
    s += &format!(
        "{}<td colspan=\"2\" align=\"center\"><font face=\"Helvetica, Arial, Sans Serif\" size=\"3\">Created with</font>{}<object type=\"image/PNG\" data=\"Osdag_header.png\" height=60></object>{}{}",
        html_space(1),
        "&nbsp;".repeat(5),
        tag("/td"),
        nl()
    );
    s += &format!("{}{}", tag("/tr"), nl());

    let pairs = [
        (("Company Name", &h.company_name), ("Project Title", &h.project_title)),
        (("Group/Team Name", &h.group_team_name), ("Subtitle", &h.subtitle)),
        (("Designer", &h.designer), ("Job Number", &h.job_number)),
        (("Date", &h.date), ("Client", &h.client)),
    ];
    for ((l1, v1), (l2, v2)) in pairs {
        s += &format!("{}{}", tag("tr"), nl());
        s += &header_pair(l1, v1);
        s += &header_pair(l2, v2);
        s += &format!("{}{}", tag("/tr"), nl());
    }

    s += &format!("{}{} {}", tag("/table"), nl(), nl());
    s += &format!("{}{}{} {}", tag("hr"), tag("/hr"), nl(), nl());
    s
}

fn summary_entry(entry: &SummaryEntry) -> String {
    match entry {
        SummaryEntry::Heading { indent, label, css } => summary_row(
            *indent,
            label,
            css,
            &RowOptions {
                col_span: 2,
                ..Default::default()
            },
        ),
        SummaryEntry::Field {
            indent,
            label,
            value,
            label_css,
            value_css,
        } => summary_row(
            *indent,
            label,
            label_css,
            &RowOptions {
                text_two: value,
                text_two_css: Some(*value_css),
                ..Default::default()
            },
        ),
    }
}

fn check_entry(entry: &CheckEntry) -> String {
    match entry {
        CheckEntry::Title(title) => check_row(
            [title.as_str(), "", "", ""],
            &CheckRowOptions {
                col_span: 4,
                css: ["detail"; 4],
            },
        ),
        CheckEntry::ColumnHeads => check_row(
            ["Check", "Required", "Provided", "Remark"],
            &CheckRowOptions {
                css: ["header1"; 4],
                ..Default::default()
            },
        ),
        CheckEntry::Group(label) => check_row(
            [label.as_str(), "", "", ""],
            &CheckRowOptions {
                col_span: 4,
                ..Default::default()
            },
        ),
        CheckEntry::Check(row) => check_row(
            [
                row.check.as_str(),
                row.required.as_str(),
                row.provided.as_str(),
                row.remark.as_str(),
            ],
            &CheckRowOptions::default(),
        ),
    }
}

fn image_cell(path: &str, width: u32) -> String {
    format!(
        "{}<td align=\"center\" class=\"header2\"><object type=\"image/PNG\" data=\"{}\" width=\"{}\"></object>{}{}",
        html_space(4),
        path,
        width,
        tag("/td"),
        nl()
    )
}

/// Serialize a laid-out report into a complete HTML document.
pub fn render_html_report(report: &ReportView) -> Result<String> {
    let header = design_report_header(&report.header);
    let mut body = String::new();

    // Design summary
    body.push_str(&header);
    writeln!(body, "{}", TABLE_OPEN)?;
    for entry in &report.summary {
        body.push_str(&summary_entry(entry));
    }
    writeln!(body, " ")?;
    write!(body, "{}{}", tag("/table"), PAGE_BREAK)?;

    // Design checks
    body.push_str(&header);
    body.push_str(TABLE_OPEN);
    for entry in &report.checks {
        body.push_str(&check_entry(entry));
    }
    write!(body, "{}{}", tag("/table"), PAGE_BREAK)?;

    // Views, 2x2
    body.push_str(&header);
    body.push_str(TABLE_OPEN);
    body.push_str(&summary_entry(&SummaryEntry::Heading {
        indent: 0,
        label: "Views".to_string(),
        css: "detail",
    }));
    let images = &report.images;
    for (left, right) in [
        ((&images.model_3d, 450), (&images.top, 400)),
        ((&images.side, 400), (&images.front, 450)),
    ] {
        writeln!(body, "{}", tag("tr"))?;
        body.push_str(&image_cell(left.0, left.1));
        body.push_str(&image_cell(right.0, right.1));
        writeln!(body, "{}", tag("/tr"))?;
    }
    writeln!(body, "{}", tag("/table"))?;
    writeln!(body, " ")?;
    write!(body, "{}", PAGE_BREAK)?;

    // Additional comments
    body.push_str(&header);
    writeln!(body, "{}{}", tag("hr"), tag("/hr"))?;
    writeln!(body, " ")?;
    writeln!(body, "{}", TABLE_OPEN)?;
    writeln!(
        body,
        "{}<col width=30%>{}<col width=70%>",
        html_space(1),
        html_space(1)
    )?;
    writeln!(body, "{}{}", html_space(1), tag("tr"))?;
    writeln!(
        body,
        "{}<td class=\"detail1\">Additional Comments{}",
        html_space(2),
        tag("/td")
    )?;
    writeln!(
        body,
        "{}<td class=\"detail2\" align=\"justify\">{}{}",
        html_space(2),
        report.comments,
        tag("/td")
    )?;
    writeln!(body, "{}{}", html_space(1), tag("/tr"))?;
    writeln!(body, "{}", tag("/table"))?;

    Ok(TEMPLATE.replace("__BODY__", &body))
}
