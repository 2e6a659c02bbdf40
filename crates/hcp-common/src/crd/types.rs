//! Supporting types shared by the ingress CRDs

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Infrastructure platform a hosted cluster runs on
///
/// Values outside the known set deserialize to [`PlatformType::Other`]
/// instead of failing, so a newer management cluster never blocks
/// reconciliation of an older guest.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Hash)]
pub enum PlatformType {
    /// Amazon Web Services
    #[serde(rename = "AWS")]
    Aws,
    /// Microsoft Azure
    Azure,
    /// IBM Cloud
    #[serde(rename = "IBMCloud")]
    IbmCloud,
    /// KubeVirt virtual machines on the management cluster
    Kubevirt,
    /// No platform integration (bare metal, user-managed networking)
    None,
    /// Agent-based installs
    Agent,
    /// IBM Power Virtual Server
    #[serde(rename = "PowerVS")]
    PowerVs,
    /// OpenStack
    OpenStack,
    /// Any platform this crate does not know about
    #[serde(other)]
    Other,
}

impl PlatformType {
    /// Canonical API string for this platform
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Azure => "Azure",
            Self::IbmCloud => "IBMCloud",
            Self::Kubevirt => "Kubevirt",
            Self::None => "None",
            Self::Agent => "Agent",
            Self::PowerVs => "PowerVS",
            Self::OpenStack => "OpenStack",
            Self::Other => "Other",
        }
    }
}

impl From<&str> for PlatformType {
    /// Case-insensitive parse. Unknown strings map to [`PlatformType::Other`].
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "aws" => Self::Aws,
            "azure" => Self::Azure,
            "ibmcloud" => Self::IbmCloud,
            "kubevirt" => Self::Kubevirt,
            "none" => Self::None,
            "agent" => Self::Agent,
            "powervs" => Self::PowerVs,
            "openstack" => Self::OpenStack,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for PlatformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pod toleration, reduced to the fields the ingress operator honors
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Toleration {
    /// Taint key the toleration applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Key/value relationship ("Exists" or "Equal")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// Taint value the toleration matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Taint effect to match (empty matches all effects)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
}

impl Toleration {
    /// Toleration matching `key=value` with any effect
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

/// Reference to an object in the same namespace
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct LocalObjectReference {
    /// Name of the referenced object
    pub name: String,
}

impl LocalObjectReference {
    /// Reference the object with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("AWS", PlatformType::Aws)]
    #[case("IBMCloud", PlatformType::IbmCloud)]
    #[case("PowerVS", PlatformType::PowerVs)]
    #[case("Kubevirt", PlatformType::Kubevirt)]
    #[case("None", PlatformType::None)]
    fn platform_parses_api_strings(#[case] raw: &str, #[case] expected: PlatformType) {
        assert_eq!(PlatformType::from(raw), expected);
        let yaml: PlatformType =
            serde_yaml::from_str(raw).expect("known platform should deserialize");
        assert_eq!(yaml, expected);
        assert_eq!(expected.to_string(), raw);
    }

    #[test]
    fn platform_parse_is_case_insensitive() {
        assert_eq!(PlatformType::from("ibmcloud"), PlatformType::IbmCloud);
        assert_eq!(PlatformType::from("KUBEVIRT"), PlatformType::Kubevirt);
    }

    #[test]
    fn unknown_platform_degrades_to_other() {
        assert_eq!(PlatformType::from("GCP"), PlatformType::Other);
        assert_eq!(PlatformType::from(""), PlatformType::Other);

        let yaml: PlatformType =
            serde_yaml::from_str("GCP").expect("unknown platform should not fail");
        assert_eq!(yaml, PlatformType::Other);
    }

    #[test]
    fn toleration_omits_unset_fields() {
        let yaml = serde_yaml::to_string(&Toleration::new("dedicated", "edge"))
            .expect("Toleration serialization should succeed");
        assert!(yaml.contains("key: dedicated"));
        assert!(yaml.contains("value: edge"));
        assert!(!yaml.contains("operator"));
        assert!(!yaml.contains("effect"));
    }
}
