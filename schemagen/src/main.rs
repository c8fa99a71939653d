/*!

schemagen writes the JSON Schema of every catalog enumeration and resource model as a single JSON
object keyed by type name.

!*/
mod error;

use crate::error::Result;
use models::resources::{
    AutoScalingResourceMetric, ContainerEvent, HttpRouteMatchHeader, ListOrdering,
    SecretResourceProperties, VolumeProviderParametersAzureFile, VolumeResourceProperties,
};
use models::{
    telemetry, AutoScalingMetricKind, ContainerEventKind, HeaderMatchType, Ordering, SecretKind,
    VolumeProvider,
};

use argh::FromArgs;
use schemars::schema_for;
use serde_json::{Map, Value};
use snafu::ResultExt;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::{event, Level};

/// Pairs each type with its root schema, using the type's own name as the key.
macro_rules! root_schemas {
    ($($ty:ty),+ $(,)?) => {
        vec![$((stringify!($ty), schema_for!($ty))),+]
    };
}

/// Write the JSON Schema of the mesh models.
#[derive(FromArgs, Debug)]
struct Args {
    /// write the schema document to this path instead of stdout
    #[argh(option)]
    output: Option<PathBuf>,

    /// emit single-line JSON instead of pretty-printed JSON
    #[argh(switch)]
    compact: bool,
}

fn main() {
    let args: Args = argh::from_env();

    if let Err(error) = run(args) {
        event!(Level::ERROR, %error, "schemagen failed.");
        eprintln!("{}", error);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    telemetry::init_telemetry_from_env().context(error::TelemetryInitSnafu)?;

    let document = schema_document().context(error::RenderSchemaSnafu)?;
    let rendered = render(&document, args.compact).context(error::RenderSchemaSnafu)?;

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", rendered))
                .context(error::WriteOutputSnafu { path: path.clone() })?;
            event!(Level::INFO, path = %path.display(), "Wrote schema document.");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", rendered).context(error::WriteStdoutSnafu)?;
        }
    }

    Ok(())
}

fn schema_document() -> serde_json::Result<Value> {
    let schemas = root_schemas![
        AutoScalingMetricKind,
        ContainerEventKind,
        HeaderMatchType,
        Ordering,
        SecretKind,
        VolumeProvider,
        AutoScalingResourceMetric,
        ContainerEvent,
        HttpRouteMatchHeader,
        ListOrdering,
        SecretResourceProperties,
        VolumeProviderParametersAzureFile,
        VolumeResourceProperties,
    ];

    let mut document = Map::new();
    for (name, schema) in schemas {
        event!(Level::DEBUG, name, "Generated schema.");
        document.insert(name.to_string(), serde_json::to_value(schema)?);
    }
    Ok(Value::Object(document))
}

fn render(document: &Value, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(document)
    } else {
        serde_json::to_string_pretty(document)
    }
}
