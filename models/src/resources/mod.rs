//! Request and response model objects whose fields are typed by the catalog enumerations.
mod error;

pub use self::error::Error as ResourceError;
use self::error::{MissingAzureFileParametersSnafu, Result};

use crate::catalog::{
    AutoScalingMetricKind, ContainerEventKind, HeaderMatchType, Ordering, SecretKind,
    VolumeProvider,
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use snafu::ensure;

/// Describes a header to match against when routing an HTTP request.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HttpRouteMatchHeader {
    /// Name of the header to match in the request.
    pub name: String,
    /// Value of the header to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub match_type: HeaderMatchType,
}

impl HttpRouteMatchHeader {
    pub fn exact<N, V>(name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        HttpRouteMatchHeader {
            name: name.into(),
            value: Some(value.into()),
            match_type: HeaderMatchType::Exact,
        }
    }

    /// Returns whether a request header value satisfies this rule.
    pub fn matches(&self, header_value: &str) -> bool {
        match self.match_type {
            HeaderMatchType::Exact => self.value.as_deref() == Some(header_value),
        }
    }
}

/// A metric that drives an auto scaling policy, identified by resource name (e.g. "cpu").
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutoScalingResourceMetric {
    pub kind: AutoScalingMetricKind,
    pub name: String,
}

/// An event reported for a container instance.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContainerEvent {
    pub kind: ContainerEventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The number of times the event has occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Date/time of the first event, as reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_timestamp: Option<String>,
    /// Date/time of the last event, as reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The event type, e.g. "Normal" or "Warning".
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretResourceProperties {
    pub kind: SecretKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The type of the content stored in the secret value, e.g. "text/plain".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Parameters for a volume backed by an Azure Files file share.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolumeProviderParametersAzureFile {
    pub account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_key: Option<String>,
    pub share_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolumeResourceProperties {
    pub provider: VolumeProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_file_parameters: Option<VolumeProviderParametersAzureFile>,
}

impl VolumeResourceProperties {
    pub fn azure_file(parameters: VolumeProviderParametersAzureFile) -> Self {
        VolumeResourceProperties {
            provider: VolumeProvider::SFAzureFile,
            description: None,
            azure_file_parameters: Some(parameters),
        }
    }

    /// Checks that the provider-specific parameters required by `provider` are present.
    pub fn validate(&self) -> Result<()> {
        match self.provider {
            VolumeProvider::SFAzureFile => ensure!(
                self.azure_file_parameters.is_some(),
                MissingAzureFileParametersSnafu {
                    provider: self.provider
                }
            ),
        }
        Ok(())
    }
}

/// Sort options for list queries.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListOrdering {
    /// The property to sort by. The service picks its own default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default)]
    pub ordering: Ordering,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_route_match_header() {
        let header: HttpRouteMatchHeader = serde_json::from_value(json!({
            "name": "accept",
            "value": "application/json",
            "type": "exact"
        }))
        .unwrap();
        assert_eq!(
            header,
            HttpRouteMatchHeader::exact("accept", "application/json")
        );
        assert!(header.matches("application/json"));
        assert!(!header.matches("Application/JSON"));

        assert_eq!(
            serde_json::to_value(&header).unwrap(),
            json!({
                "name": "accept",
                "value": "application/json",
                "type": "exact"
            })
        );
    }

    #[test]
    fn test_header_without_value_never_matches() {
        let header: HttpRouteMatchHeader =
            serde_json::from_value(json!({ "name": "x-mesh", "type": "exact" })).unwrap();
        assert_eq!(header.value, None);
        assert!(!header.matches(""));
    }

    #[test]
    fn test_unrecognized_enum_value_fails_decoding() {
        let test_cases = vec![
            (
                serde_json::from_value::<HttpRouteMatchHeader>(
                    json!({ "name": "accept", "type": "prefix" }),
                )
                .unwrap_err(),
                "Unrecognized value 'prefix' for HeaderMatchType",
            ),
            (
                serde_json::from_value::<AutoScalingResourceMetric>(
                    json!({ "kind": "resource", "name": "cpu" }),
                )
                .unwrap_err(),
                "Unrecognized value 'resource' for AutoScalingMetricKind",
            ),
            (
                serde_json::from_value::<VolumeResourceProperties>(json!({ "provider": "NFS" }))
                    .unwrap_err(),
                "Unrecognized value 'NFS' for VolumeProvider",
            ),
            (
                serde_json::from_value::<ListOrdering>(json!({ "ordering": "ASC" })).unwrap_err(),
                "Unrecognized value 'ASC' for Ordering",
            ),
        ];
        for (error, expected) in test_cases {
            assert!(
                error.to_string().contains(expected),
                "'{}' does not mention '{}'",
                error,
                expected
            );
        }
    }

    #[test]
    fn test_container_event() {
        let event: ContainerEvent = serde_json::from_value(json!({
            "kind": "ContainerInstanceEvent",
            "name": "Created",
            "count": 1,
            "firstTimestamp": "2018-08-14T20:28:46Z",
            "lastTimestamp": "2018-08-14T20:28:46Z",
            "message": "Created container",
            "type": "Normal"
        }))
        .unwrap();
        assert_eq!(event.kind, ContainerEventKind::ContainerInstanceEvent);
        assert_eq!(event.count, Some(1));
        assert_eq!(event.event_type.as_deref(), Some("Normal"));

        let minimal: ContainerEvent =
            serde_json::from_value(json!({ "kind": "ContainerInstanceEvent" })).unwrap();
        assert_eq!(
            serde_json::to_value(&minimal).unwrap(),
            json!({ "kind": "ContainerInstanceEvent" })
        );
    }

    #[test]
    fn test_secret_properties() {
        let secret: SecretResourceProperties = serde_json::from_value(json!({
            "kind": "InlinedValue",
            "contentType": "text/plain"
        }))
        .unwrap();
        assert_eq!(secret.kind, SecretKind::InlinedValue);
        assert_eq!(secret.content_type.as_deref(), Some("text/plain"));
        assert_eq!(secret.description, None);
    }

    #[test]
    fn test_volume_validation() {
        let volume = VolumeResourceProperties::azure_file(VolumeProviderParametersAzureFile {
            account_name: "meshstorage".to_string(),
            account_key: None,
            share_name: "data".to_string(),
        });
        assert!(volume.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&volume).unwrap(),
            json!({
                "provider": "SFAzureFile",
                "azureFileParameters": {
                    "accountName": "meshstorage",
                    "shareName": "data"
                }
            })
        );

        let volume: VolumeResourceProperties =
            serde_json::from_value(json!({ "provider": "SFAzureFile" })).unwrap();
        let error = volume.validate().unwrap_err();
        assert!(matches!(
            error,
            ResourceError::MissingAzureFileParameters {
                provider: VolumeProvider::SFAzureFile
            }
        ));
        assert_eq!(
            error.to_string(),
            "Volume with provider 'SFAzureFile' must specify 'azureFileParameters'."
        );
    }

    #[test]
    fn test_list_ordering_defaults_to_ascending() {
        let ordering: ListOrdering = serde_json::from_value(json!({})).unwrap();
        assert_eq!(ordering, ListOrdering::default());
        assert_eq!(ordering.ordering, Ordering::Asc);

        let ordering: ListOrdering =
            serde_json::from_value(json!({ "orderBy": "name", "ordering": "Desc" })).unwrap();
        assert_eq!(ordering.order_by.as_deref(), Some("name"));
        assert_eq!(ordering.ordering, Ordering::Desc);
    }
}
