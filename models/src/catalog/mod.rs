//! Closed, string-backed value sets used to type fields of the mesh resource models.
//!
//! Every enumeration here maps each member to the exact string the service sends and expects.
//! Matching is case-sensitive. A string outside an enumeration's table is an error, never a
//! default: the service grows these sets independently of this client, and a silent fallback
//! would hide that drift.
#[macro_use]
mod macros;
pub mod error;

pub use self::error::Error as CatalogError;
use self::error::{Result, UnrecognizedEnumValueSnafu};

use snafu::OptionExt;
use tracing::{event, Level};

/// A closed enumeration with a stable wire-string mapping.
pub trait WireEnum: Copy + Eq + Sized + 'static {
    /// The symbolic name of the enumeration, used in error messages.
    const TYPE_NAME: &'static str;
    /// All members, in declaration order.
    const VARIANTS: &'static [Self];

    /// The canonical wire string for this member.
    fn as_wire_str(&self) -> &'static str;

    /// Looks up the member whose wire string is exactly `value`.
    fn parse_wire(value: &str) -> Result<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_wire_str() == value)
            .context(UnrecognizedEnumValueSnafu {
                type_name: Self::TYPE_NAME,
                value,
            })
            .map_err(|error: CatalogError| {
                event!(Level::DEBUG, %error, "Rejected unrecognized enumeration value.");
                error
            })
    }
}

/// Parses `value` as a member of `T`.
pub fn parse<T: WireEnum>(value: &str) -> Result<T> {
    T::parse_wire(value)
}

/// Returns the wire string of `member`.
pub fn serialize<T: WireEnum>(member: T) -> &'static str {
    member.as_wire_str()
}

wire_enum! {
    /// Classifies the metric an auto scaling policy is driven by.
    pub enum AutoScalingMetricKind {
        /// Resource usage reported for the service's code packages (e.g. cpu, memory).
        Resource => "Resource",
    }
}

wire_enum! {
    /// The kind of an event reported by a container.
    pub enum ContainerEventKind {
        ContainerInstanceEvent => "ContainerInstanceEvent",
    }
}

wire_enum! {
    /// How an HTTP route compares a request header against the configured value.
    pub enum HeaderMatchType {
        /// The header value must equal the configured value.
        Exact => "exact",
    }
}

wire_enum! {
    /// Sort direction for list results.
    pub enum Ordering {
        /// Descending order.
        Desc => "Desc",
        /// Ascending order.
        Asc => "Asc",
    }
}

impl Default for Ordering {
    fn default() -> Self {
        Ordering::Asc
    }
}

wire_enum! {
    /// How the value of a secret resource is provisioned.
    pub enum SecretKind {
        /// A simple secret whose value is provided inline, in the resource description.
        InlinedValue => "InlinedValue",
    }
}

wire_enum! {
    /// The backing provider of a volume resource.
    pub enum VolumeProvider {
        /// Volume backed by an Azure Files file share.
        SFAzureFile => "SFAzureFile",
    }
}
