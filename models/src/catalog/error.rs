use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// The string is not in the wire table of the enumeration. Values are never defaulted, since the
    /// service may have added members this client does not know about yet.
    #[snafu(display("Unrecognized value '{}' for {}", value, type_name))]
    UnrecognizedEnumValue {
        type_name: &'static str,
        value: String,
    },
}

impl Error {
    /// Name of the enumeration that rejected the value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Error::UnrecognizedEnumValue { type_name, .. } => *type_name,
        }
    }

    /// The rejected wire string, exactly as received.
    pub fn value(&self) -> &str {
        match self {
            Error::UnrecognizedEnumValue { value, .. } => value,
        }
    }
}
