//! Application layer: use cases built on the domain tree.

pub mod demo;
pub mod error;

pub use demo::{run_demo, DemoReport, Snapshot};
pub use error::{ApplicationError, ApplicationResult};
