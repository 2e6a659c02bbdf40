//! ingress-controller command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use hcp_common::crd::{IngressController, PlatformType};
use hcp_common::kube_utils::is_persisted;
use hcp_ingress::{desired_default_ingress_controller, IngressControllerParams};

use super::{read_yaml, to_yaml};
use crate::Result;

/// Render the guest cluster default IngressController
#[derive(Args, Debug)]
pub struct IngressControllerArgs {
    /// Ingress domain of the hosted cluster
    #[arg(long, env = "HCP_INGRESS_DOMAIN")]
    pub domain: String,

    /// Platform type (AWS, Azure, IBMCloud, Kubevirt, None, ...); unknown
    /// platforms get the default load balancer strategy
    #[arg(long, env = "HCP_PLATFORM", value_parser = parse_platform)]
    pub platform: PlatformType,

    /// Router replica count
    #[arg(
        long,
        env = "HCP_INGRESS_REPLICAS",
        default_value_t = 2,
        value_parser = clap::value_parser!(i32).range(0..)
    )]
    pub replicas: i32,

    /// IBM Cloud with user-provisioned infrastructure
    #[arg(long)]
    pub ibm_cloud_upi: bool,

    /// Hosted cluster is reachable only over a private network
    #[arg(long)]
    pub private: bool,

    /// Current IngressController YAML (`-` for stdin); omit if it does not exist yet
    #[arg(short = 'f', long = "current")]
    pub current: Option<PathBuf>,
}

impl IngressControllerArgs {
    fn params(&self) -> IngressControllerParams {
        IngressControllerParams {
            domain: self.domain.clone(),
            platform: self.platform,
            replicas: self.replicas,
            is_ibm_cloud_upi: self.ibm_cloud_upi,
            is_private: self.private,
        }
    }
}

fn parse_platform(s: &str) -> std::result::Result<PlatformType, String> {
    Ok(PlatformType::from(s))
}

pub fn run(args: IngressControllerArgs) -> Result<()> {
    let current: Option<IngressController> = match &args.current {
        Some(path) => Some(read_yaml(path)?),
        None => None,
    };
    println!("{}", render(&args, current)?);
    Ok(())
}

/// Desired IngressController as YAML
pub fn render(args: &IngressControllerArgs, current: Option<IngressController>) -> Result<String> {
    let existed = current.as_ref().is_some_and(is_persisted);
    let desired = desired_default_ingress_controller(current, &args.params())?;
    if existed {
        info!("ingress controller already exists, rendering it unchanged");
    }
    to_yaml(&desired)
}
