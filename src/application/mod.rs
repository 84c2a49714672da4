pub mod exporter;

pub use exporter::{Exporter, ExporterPhase, PollOutcome};
