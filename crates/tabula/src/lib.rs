//! Tabula: tabular data interchange through a canonical text matrix.
//!
//! Every supported format is read into a [`Matrix`] of text cells and written
//! back out from one. Readers and writers are registered in a [`Registry`];
//! an [`Orchestrator`] picks the pair for the formats selected on a
//! [`Surface`] and runs the pipeline.

mod converter;
mod format;
mod lines;
mod matrix;
mod options;
mod orchestrator;
mod registry;
mod surface;

pub use converter::{AdapterDecl, ConvertError, Reader, Role, Writer};
pub use format::Format;
pub use lines::LineBuilder;
pub use matrix::{Cell, Matrix, Row};
pub use options::ConvertOptions;
pub use orchestrator::{Orchestrator, convert, swap};
pub use registry::Registry;
pub use surface::Surface;
