//! HostedControlPlane (hypershift.openshift.io/v1beta1)
//!
//! Identity of one hosted cluster as seen from its control plane namespace.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::PlatformType;

/// Hosted control plane identity and platform
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "hypershift.openshift.io",
    version = "v1beta1",
    kind = "HostedControlPlane",
    namespaced,
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct HostedControlPlaneSpec {
    /// Unique identifier of this hosted cluster's infrastructure
    #[serde(rename = "infraID")]
    pub infra_id: String,

    /// Platform the hosted cluster's nodes run on
    pub platform: PlatformSpec,
}

/// Platform section of a hosted control plane
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct PlatformSpec {
    /// Platform type
    #[serde(rename = "type")]
    pub platform_type: PlatformType,
}

impl HostedControlPlane {
    /// Infrastructure ID used to scope labels and selectors
    pub fn infra_id(&self) -> &str {
        &self.spec.infra_id
    }

    /// Platform the hosted cluster runs on
    pub fn platform(&self) -> PlatformType {
        self.spec.platform.platform_type
    }
}
