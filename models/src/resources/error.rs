use crate::catalog::VolumeProvider;

use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display(
        "Volume with provider '{}' must specify 'azureFileParameters'.",
        provider
    ))]
    MissingAzureFileParameters { provider: VolumeProvider },
}
