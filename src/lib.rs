//! Design report generator for seated angle connections.
//!
//! The calculation stage fills a [`design::SeatedAngleDesign`]; the
//! [`render::ReportAssembler`] turns it, together with the designer's
//! [`profile::ProfileSummary`], into a static HTML report.

pub mod design;
pub mod diagnostics;
pub mod error;
pub mod profile;
pub mod render;
pub mod view;

pub use error::ReportError;

pub type Result<T, E = ReportError> = std::result::Result<T, E>;
