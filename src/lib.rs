//! # tabsift
//!
//! Filter, sort and aggregate small tabular files from the command line.
//!
//! - Loading of CSV, TSV, JSON records and Parquet into text-valued rows
//! - Conjunctive `column op number` filters (`<`, `>`, `=`, `<=`, `>=`)
//! - Stable numeric ordering by one column
//! - Single-column `avg` / `min` / `max`
//! - Grid, box or JSON output
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use tabsift::data::loader::load_file;
//! use tabsift::query::{self, AggregationKind, AggregationRequest, QueryOutcome};
//!
//! fn main() -> anyhow::Result<()> {
//!     let dataset = load_file(Path::new("products.csv"))?;
//!
//!     let request = AggregationRequest { column: "price".into(), kind: AggregationKind::Avg };
//!     let outcome = query::run(
//!         &dataset.rows,
//!         &["rating>=4.5".to_string()],
//!         None,
//!         Some(&request),
//!     )?;
//!
//!     if let QueryOutcome::Scalar(avg) = outcome {
//!         println!("average price of well-rated products: {:.2}", avg.value);
//!     }
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod query;
pub mod render;
