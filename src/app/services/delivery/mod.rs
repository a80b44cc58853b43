//! Encoding and delivery collaborators
//!
//! The assembler's output is handed record by record to an
//! [`ObservationEncoder`] and the resulting bytes to an
//! [`ObservationSink`]. Retry and backoff belong to sink implementations;
//! the pipeline treats any delivery error as final for the run.

pub mod encoder;
pub mod sink;

pub use encoder::{JsonEncoder, ObservationEncoder};
pub use sink::{DryRunSink, ObservationSink, WriterSink};
