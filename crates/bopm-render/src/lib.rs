//! # BOPM Render
//!
//! Presentation layer for a priced binomial lattice.
//!
//! - [`label_edges`]: joins linker edges with priced nodes
//! - [`DotGraph`]: Graphviz DOT text of the lattice
//! - [`SheetExport`]: `.xlsx` workbook (or CSV grid) with inputs, constants
//!   and every node
//! - [`Summary`]: one-screen description of a run, with warnings
//!
//! ## Example
//!
//! ```rust
//! use bopm_config::DisplayConfig;
//! use bopm_core::prelude::*;
//! use bopm_render::{DotGraph, Summary};
//!
//! let pricing = price(&ContractParameters::new(15.0, 14.0, 1.0, 2, 0.08, 0.25)).unwrap();
//!
//! let summary = Summary::new(&pricing, 4);
//! assert_eq!(summary.value_line(), "Current payoff at time T0 = 2.6661");
//!
//! let dot = DotGraph::new(&pricing, &DisplayConfig::default()).unwrap();
//! assert_eq!(dot.edges().len(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod dot;
pub mod error;
pub mod labels;
pub mod sheet;
pub mod summary;

pub use dot::DotGraph;
pub use error::{RenderError, RenderResult};
pub use labels::{format_value, label_edges, LabeledEdge, NodeLabel};
pub use sheet::{CellStyle, CellValue, SheetCell, SheetExport, SHEET_NAME, SHEET_PRECISION};
pub use summary::{warnings, Summary};
