//! `mapf-output` — diagnostic report writers for pathfind outcomes.
//!
//! Writing a report never feeds back into the computation; these backends
//! exist so results can be eyeballed, plotted, or archived.
//!
//! | Feature  | Backend                 | Output                              |
//! |----------|-------------------------|-------------------------------------|
//! | *(none)* | [`CsvReport`]           | `scene.csv`, `paths.csv`            |
//! | *(none)* | [`TextReport`]          | human-readable dump to any `Write`  |
//! | `sqlite` | [`SqliteReport`]        | `report.db`                         |
//!
//! All backends implement [`ReportWriter`]; [`write_report`] drives one end
//! to end for a scenario/outcome pair.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mapf_output::{write_report, CsvReport};
//!
//! let outcome = mapf_engine::pathfind(&scenario, &config)?;
//! let mut report = CsvReport::new(Path::new("./out"))?;
//! write_report(&mut report, &scenario, &outcome)?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvReport;
pub use error::{OutputError, OutputResult};
pub use row::{path_rows, scene_rows, PathRow, SceneRow};
pub use text::TextReport;
pub use writer::{write_report, ReportWriter};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteReport;
