//! Default IngressController publishing strategy
//!
//! Maps platform and topology facts to the spec of the guest cluster's
//! default IngressController. The spec is written once, on creation. After
//! that the object belongs to the guest cluster's administrators and is never
//! overwritten.
//!
//! Two paths:
//! - [`build_initial_spec`] computes the spec for an object about to be created
//! - [`reconcile_default_ingress_controller`] applies it to a template, and is a
//!   no-op for objects that already exist

use tracing::{debug, instrument, warn};

use hcp_common::crd::{
    EndpointPublishingStrategy, IngressController, IngressControllerProtocol,
    IngressControllerSpec, LoadBalancerScope, LocalObjectReference, NodePlacement, PlatformType,
    Toleration,
};
use hcp_common::kube_utils::{is_persisted, noop_reconcile, NamespacedName};
use hcp_common::manifests::{
    ingress_default_ingress_controller, ingress_default_ingress_controller_cert,
};
use hcp_common::Result;

/// Taint key of the IBM Cloud edge worker pool
pub const EDGE_TOLERATION_KEY: &str = "dedicated";

/// Taint value of the IBM Cloud edge worker pool
pub const EDGE_TOLERATION_VALUE: &str = "edge";

/// Facts the default IngressController spec is derived from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngressControllerParams {
    /// Ingress domain of the hosted cluster (e.g., "apps.guest.example.com")
    pub domain: String,
    /// Platform the hosted cluster runs on
    pub platform: PlatformType,
    /// Router replica count
    pub replicas: i32,
    /// IBM Cloud with user-provisioned infrastructure
    pub is_ibm_cloud_upi: bool,
    /// Hosted cluster is reachable only over a private network
    pub is_private: bool,
}

/// Platform-specific side fields of the spec
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PlatformIngressPolicy {
    /// Schedule routers onto dedicated edge nodes
    edge_tolerations: bool,
    /// Serve the management-provided wildcard certificate
    default_certificate: bool,
}

const EDGE_POLICY: PlatformIngressPolicy = PlatformIngressPolicy {
    edge_tolerations: true,
    default_certificate: false,
};

const STANDARD_POLICY: PlatformIngressPolicy = PlatformIngressPolicy {
    edge_tolerations: false,
    default_certificate: true,
};

// No wildcard arm: a new PlatformType must be given an explicit entry.
fn platform_policy(platform: PlatformType) -> PlatformIngressPolicy {
    match platform {
        PlatformType::IbmCloud => EDGE_POLICY,
        PlatformType::Aws
        | PlatformType::Azure
        | PlatformType::Kubevirt
        | PlatformType::None
        | PlatformType::Agent
        | PlatformType::PowerVs
        | PlatformType::OpenStack
        | PlatformType::Other => STANDARD_POLICY,
    }
}

fn publishing_strategy(params: &IngressControllerParams) -> EndpointPublishingStrategy {
    if params.is_private {
        return EndpointPublishingStrategy::private();
    }

    match params.platform {
        PlatformType::IbmCloud if params.is_ibm_cloud_upi => {
            EndpointPublishingStrategy::node_port_with_protocol(IngressControllerProtocol::Tcp)
        }
        PlatformType::IbmCloud => {
            EndpointPublishingStrategy::load_balancer_with_scope(LoadBalancerScope::External)
        }
        PlatformType::Kubevirt => EndpointPublishingStrategy::node_port(),
        PlatformType::None => EndpointPublishingStrategy::HostNetwork,
        PlatformType::Aws
        | PlatformType::Azure
        | PlatformType::Agent
        | PlatformType::PowerVs
        | PlatformType::OpenStack
        | PlatformType::Other => EndpointPublishingStrategy::load_balancer(),
    }
}

fn default_certificate() -> LocalObjectReference {
    let cert = ingress_default_ingress_controller_cert();
    LocalObjectReference::new(cert.metadata.name.unwrap_or_default())
}

fn edge_node_placement() -> NodePlacement {
    NodePlacement {
        tolerations: vec![Toleration::new(EDGE_TOLERATION_KEY, EDGE_TOLERATION_VALUE)],
    }
}

/// Spec of a default IngressController that does not exist yet
///
/// Private clusters always publish privately; the platform then only decides
/// tolerations and certificate. IBM Cloud routers always run on edge nodes
/// and bring their own certificate, whatever the strategy.
pub fn build_initial_spec(params: &IngressControllerParams) -> IngressControllerSpec {
    let policy = platform_policy(params.platform);

    IngressControllerSpec {
        domain: params.domain.clone(),
        replicas: Some(params.replicas),
        endpoint_publishing_strategy: Some(publishing_strategy(params)),
        node_placement: policy.edge_tolerations.then(edge_node_placement),
        default_certificate: policy
            .default_certificate
            .then(default_certificate),
    }
}

/// Initialize the spec of the default IngressController
///
/// Objects that already exist (non-empty resource version) are left exactly
/// as they are, whatever the parameters say.
#[instrument(
    skip_all,
    fields(
        ingress_controller = %NamespacedName::of(&*ingress_controller),
        platform = %params.platform,
    )
)]
pub fn reconcile_default_ingress_controller(
    ingress_controller: &mut IngressController,
    params: &IngressControllerParams,
) -> Result<()> {
    if is_persisted(&*ingress_controller) {
        debug!("ingress controller already exists, leaving spec untouched");
        return noop_reconcile(ingress_controller);
    }

    if params.platform == PlatformType::Other {
        warn!("unrecognized platform, using default load balancer publishing");
    }

    ingress_controller.spec = build_initial_spec(params);

    debug!(
        strategy = ingress_controller
            .spec
            .endpoint_publishing_strategy
            .as_ref()
            .map(EndpointPublishingStrategy::type_name),
        private = params.is_private,
        "initialized ingress controller spec"
    );
    Ok(())
}

/// Desired default IngressController given what the cluster currently holds
///
/// `None` means the object does not exist; the manifest template is populated
/// and returned for creation. An existing object is returned unchanged.
pub fn desired_default_ingress_controller(
    existing: Option<IngressController>,
    params: &IngressControllerParams,
) -> Result<IngressController> {
    let mut ingress_controller = existing.unwrap_or_else(ingress_default_ingress_controller);
    reconcile_default_ingress_controller(&mut ingress_controller, params)?;
    Ok(ingress_controller)
}
