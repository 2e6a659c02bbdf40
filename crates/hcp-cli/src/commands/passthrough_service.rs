//! passthrough-service command

use std::path::PathBuf;

use clap::Args;
use k8s_openapi::api::core::v1::Service;

use hcp_common::crd::{HostedControlPlane, HostedControlPlaneSpec, PlatformSpec, PlatformType};
use hcp_common::manifests::ingress_default_ingress_passthrough_service;
use hcp_ingress::reconcile_default_ingress_passthrough_service;

use super::{read_yaml, to_yaml};
use crate::{Error, Result};

/// Render the KubeVirt ingress passthrough Service
#[derive(Args, Debug)]
pub struct PassthroughServiceArgs {
    /// Guest router NodePort Service YAML (`-` for stdin)
    #[arg(short = 'f', long = "node-port-service")]
    pub node_port_service: PathBuf,

    /// Infrastructure ID of the hosted cluster
    #[arg(
        long,
        env = "HCP_INFRA_ID",
        required_unless_present = "hosted_control_plane"
    )]
    pub infra_id: Option<String>,

    /// HostedControlPlane YAML to take the infrastructure ID from; wins over --infra-id
    #[arg(long)]
    pub hosted_control_plane: Option<PathBuf>,

    /// Hosted control plane namespace; defaults to the HostedControlPlane's namespace
    #[arg(long, env = "HCP_NAMESPACE")]
    pub namespace: Option<String>,

    /// Current passthrough Service YAML to converge instead of a fresh one
    #[arg(long)]
    pub current: Option<PathBuf>,
}

pub fn run(args: PassthroughServiceArgs) -> Result<()> {
    let node_port_service: Service = read_yaml(&args.node_port_service)?;
    let hcp = match &args.hosted_control_plane {
        Some(path) => read_yaml(path)?,
        None => kubevirt_control_plane(args.infra_id.as_deref().unwrap_or_default(), &args)?,
    };
    let current: Option<Service> = match &args.current {
        Some(path) => Some(read_yaml(path)?),
        None => None,
    };
    println!(
        "{}",
        render(args.namespace.as_deref(), current, &node_port_service, &hcp)?
    );
    Ok(())
}

fn kubevirt_control_plane(
    infra_id: &str,
    args: &PassthroughServiceArgs,
) -> Result<HostedControlPlane> {
    if infra_id.is_empty() {
        return Err(Error::validation("infra ID must not be empty"));
    }
    let mut hcp = HostedControlPlane::new(
        infra_id,
        HostedControlPlaneSpec {
            infra_id: infra_id.to_string(),
            platform: PlatformSpec {
                platform_type: PlatformType::Kubevirt,
            },
        },
    );
    hcp.metadata.namespace = args.namespace.clone();
    Ok(hcp)
}

/// Desired passthrough Service as YAML
///
/// The namespace comes from `namespace`, then from the current Service, then
/// from the HostedControlPlane.
pub fn render(
    namespace: Option<&str>,
    current: Option<Service>,
    node_port_service: &Service,
    hcp: &HostedControlPlane,
) -> Result<String> {
    let mut service = match current {
        Some(svc) => svc,
        None => {
            let ns = namespace
                .or(hcp.metadata.namespace.as_deref())
                .ok_or_else(|| {
                    Error::validation("namespace is required when the HostedControlPlane has none")
                })?;
            ingress_default_ingress_passthrough_service(ns)
        }
    };
    if let Some(ns) = namespace {
        service.metadata.namespace = Some(ns.to_string());
    }

    reconcile_default_ingress_passthrough_service(&mut service, node_port_service, hcp)?;
    to_yaml(&service)
}
