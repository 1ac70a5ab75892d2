use seatangle_report::design::SeatedAngleDesign;
use seatangle_report::diagnostics;
use seatangle_report::profile::ProfileSummary;
use seatangle_report::render::ReportAssembler;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seatangle-report")]
#[command(about = "Seated angle connection design report generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the HTML design report.
    Report {
        /// Profile metadata (company, designer, project, client, comments).
        #[arg(long)]
        profile: PathBuf,

        /// Design record from the calculation stage; omitted fields keep defaults.
        #[arg(long)]
        design: Option<PathBuf>,

        /// Folder holding the view images referenced by the report.
        #[arg(long, default_value = ".")]
        images: PathBuf,

        #[arg(short = 'o', long)]
        out: PathBuf,
    },
    /// Print the default design record as JSON.
    Defaults {
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report {
            profile,
            design,
            images,
            out,
        } => {
            // 1) Validate metadata before anything is written.
            let profile = ProfileSummary::from_json_file(&profile).with_context(|| {
                diagnostics::error_message(format!("load profile {}", profile.display()))
            })?;

            // 2) Design record (defaults when not supplied).
            let design = match design {
                Some(path) => SeatedAngleDesign::from_json_file(&path).with_context(|| {
                    diagnostics::error_message(format!("load design {}", path.display()))
                })?,
                None => SeatedAngleDesign::default(),
            };

            // 3) Render + write.
            let mut assembler = ReportAssembler::from_design(design);
            assembler
                .render_profile(Local::now().date_naive(), &profile, &out, &images)
                .with_context(|| {
                    diagnostics::error_message(format!("write report {}", out.display()))
                })?;
            diagnostics::note(format!("Wrote {}", out.display()));
        }
        Commands::Defaults { out } => {
            let json = SeatedAngleDesign::default().to_json_pretty()?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json + "\n")
                        .with_context(|| diagnostics::error_message(format!("write {}", path.display())))?;
                    diagnostics::note(format!("Wrote {}", path.display()));
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}
