//! Common types for hosted control plane ingress: CRDs, manifests, errors and utilities

#![deny(missing_docs)]

pub mod crd;
pub mod error;
pub mod kube_utils;
pub mod manifests;
pub mod telemetry;

pub use error::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Label carrying the infrastructure ID of a hosted cluster
///
/// Scopes selectors and labels so resources from different hosted clusters
/// sharing a management cluster never match each other.
pub const INFRA_ID_LABEL: &str = "hypershift.openshift.io/infra-id";

/// Label key KubeVirt puts on every VM launcher pod
pub const KUBEVIRT_WORKLOAD_LABEL: &str = "kubevirt.io";

/// Value of [`KUBEVIRT_WORKLOAD_LABEL`] on VM launcher pods
pub const KUBEVIRT_VIRT_LAUNCHER: &str = "virt-launcher";

/// Namespace of the guest cluster ingress operator
pub const INGRESS_OPERATOR_NAMESPACE: &str = "openshift-ingress-operator";

/// Namespace of the guest cluster router pods and their services
pub const INGRESS_NAMESPACE: &str = "openshift-ingress";
