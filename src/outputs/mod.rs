//! Report files written by the `analyze` command.
//!
//! # Submodules
//!
//! - [`json`]: Writes the [`CompanyReport`](crate::models::CompanyReport) as JSON
//! - [`markdown`]: Renders the report as a readable Markdown document
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── tesla/
//!     └── 2025-05-06.json
//!
//! markdown_output_dir/
//! └── tesla_2025-05-06.md
//! ```

pub mod json;
pub mod markdown;
