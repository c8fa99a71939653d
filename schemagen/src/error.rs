use models::telemetry::TelemetryConfigError;

use snafu::Snafu;
use std::path::PathBuf;

/// The crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// The crate-wide error type.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Unable to initialize telemetry: '{}'", source))]
    TelemetryInit { source: TelemetryConfigError },

    #[snafu(display("Unable to render schema document: '{}'", source))]
    RenderSchema { source: serde_json::Error },

    #[snafu(display("Unable to write schema document to '{}': '{}'", path.display(), source))]
    WriteOutput {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("Unable to write schema document to stdout: '{}'", source))]
    WriteStdout { source: std::io::Error },
}
