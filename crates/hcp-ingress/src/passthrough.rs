//! Default ingress passthrough Service
//!
//! On KubeVirt the guest router's NodePort Service is reachable only on the
//! VM launcher pods. The passthrough Service lives in the hosted control plane
//! namespace and forwards 80/443 unmodified to those node ports, selecting
//! the launcher pods of this one hosted cluster by infra ID.

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use tracing::{debug, instrument, warn};

use hcp_common::crd::HostedControlPlane;
use hcp_common::kube_utils::NamespacedName;
use hcp_common::{Error, Result, INFRA_ID_LABEL, KUBEVIRT_VIRT_LAUNCHER, KUBEVIRT_WORKLOAD_LABEL};

/// Plain HTTP router port
pub const HTTP_PORT: i32 = 80;

/// HTTPS router port, passed through without TLS termination
pub const HTTPS_PORT: i32 = 443;

/// Name of the HTTP port on the passthrough Service
pub const HTTP_PORT_NAME: &str = "http-80";

/// Name of the HTTPS port on the passthrough Service
pub const HTTPS_PORT_NAME: &str = "https-443";

const MISSING_NODE_PORT: &str = "missing required port or node port";

/// Node ports allocated to the guest router's 80 and 443
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RouterNodePorts {
    http: i32,
    https: i32,
}

fn allocated_node_port(node_port_service: &Service, port: i32) -> Result<i32> {
    node_port_service
        .spec
        .as_ref()
        .and_then(|spec| spec.ports.as_deref())
        .unwrap_or_default()
        .iter()
        .find(|p| p.port == port)
        .and_then(|p| p.node_port)
        .filter(|node_port| *node_port != 0)
        .ok_or_else(|| {
            Error::validation_for_field(
                NamespacedName::of(node_port_service).to_string(),
                format!("spec.ports[port={port}].nodePort"),
                MISSING_NODE_PORT,
            )
        })
}

fn router_node_ports(node_port_service: &Service) -> Result<RouterNodePorts> {
    Ok(RouterNodePorts {
        http: allocated_node_port(node_port_service, HTTP_PORT)?,
        https: allocated_node_port(node_port_service, HTTPS_PORT)?,
    })
}

fn tcp_port(name: &str, port: i32, target_port: i32) -> ServicePort {
    ServicePort {
        name: Some(name.to_string()),
        port,
        protocol: Some("TCP".to_string()),
        target_port: Some(IntOrString::Int(target_port)),
        ..Default::default()
    }
}

/// Populate the passthrough Service from the guest router's NodePort Service
///
/// `node_port_service` must expose 80 and 443 with allocated (non-zero) node
/// ports; any other ports on it are ignored. On error `service` is not
/// touched, so a half-built Service can never be applied.
///
/// Labels already on `service` are kept. Type, selector and ports are replaced.
#[instrument(
    skip_all,
    fields(
        service = %NamespacedName::of(&*service),
        infra_id = %hcp.infra_id(),
        platform = %hcp.platform(),
    )
)]
pub fn reconcile_default_ingress_passthrough_service(
    service: &mut Service,
    node_port_service: &Service,
    hcp: &HostedControlPlane,
) -> Result<()> {
    let node_ports = router_node_ports(node_port_service).inspect_err(|e| {
        warn!(error = %e, "router node ports not allocated yet");
    })?;

    let infra_id = hcp.infra_id().to_string();

    service
        .metadata
        .labels
        .get_or_insert_with(BTreeMap::new)
        .insert(INFRA_ID_LABEL.to_string(), infra_id.clone());

    let spec = service.spec.get_or_insert_with(ServiceSpec::default);
    spec.type_ = Some("ClusterIP".to_string());
    spec.selector = Some(BTreeMap::from([
        (
            KUBEVIRT_WORKLOAD_LABEL.to_string(),
            KUBEVIRT_VIRT_LAUNCHER.to_string(),
        ),
        (INFRA_ID_LABEL.to_string(), infra_id),
    ]));
    spec.ports = Some(vec![
        tcp_port(HTTP_PORT_NAME, HTTP_PORT, node_ports.http),
        tcp_port(HTTPS_PORT_NAME, HTTPS_PORT, node_ports.https),
    ]);

    debug!(
        http_node_port = node_ports.http,
        https_node_port = node_ports.https,
        "reconciled ingress passthrough service"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use hcp_common::crd::{HostedControlPlaneSpec, PlatformSpec, PlatformType};
    use hcp_common::manifests::{
        ingress_default_ingress_node_port_service, ingress_default_ingress_passthrough_service,
    };
    use rstest::rstest;

    const INFRA_ID: &str = "12345678";
    const NODE_PORT: i32 = 8080;
    const SECURE_NODE_PORT: i32 = 6443;

    fn hcp() -> HostedControlPlane {
        HostedControlPlane::new(
            "guest",
            HostedControlPlaneSpec {
                infra_id: INFRA_ID.to_string(),
                platform: PlatformSpec {
                    platform_type: PlatformType::Kubevirt,
                },
            },
        )
    }

    fn port(port: i32, node_port: Option<i32>) -> ServicePort {
        ServicePort {
            port,
            node_port,
            ..Default::default()
        }
    }

    fn node_port_service(ports: Vec<ServicePort>) -> Service {
        let mut svc = ingress_default_ingress_node_port_service();
        svc.spec = Some(ServiceSpec {
            ports: Some(ports),
            ..Default::default()
        });
        svc
    }

    fn expected_ports() -> Vec<ServicePort> {
        vec![
            ServicePort {
                port: 80,
                name: Some("http-80".to_string()),
                protocol: Some("TCP".to_string()),
                target_port: Some(IntOrString::Int(NODE_PORT)),
                ..Default::default()
            },
            ServicePort {
                port: 443,
                name: Some("https-443".to_string()),
                protocol: Some("TCP".to_string()),
                target_port: Some(IntOrString::Int(SECURE_NODE_PORT)),
                ..Default::default()
            },
        ]
    }

    fn assert_passthrough(svc: &Service) {
        let spec = svc.spec.as_ref().expect("spec should be set");
        let selector = spec.selector.as_ref().expect("selector should be set");
        assert_eq!(
            selector.get("kubevirt.io").map(String::as_str),
            Some("virt-launcher")
        );
        assert_eq!(
            selector
                .get("hypershift.openshift.io/infra-id")
                .map(String::as_str),
            Some(INFRA_ID)
        );
        assert_eq!(spec.type_.as_deref(), Some("ClusterIP"));

        let labels = svc.metadata.labels.as_ref().expect("labels should be set");
        assert_eq!(
            labels
                .get("hypershift.openshift.io/infra-id")
                .map(String::as_str),
            Some(INFRA_ID)
        );

        let ports = spec.ports.as_ref().expect("ports should be set");
        assert_eq!(ports.len(), 2);
        for expected in expected_ports() {
            assert!(ports.contains(&expected), "missing {expected:?}");
        }
    }

    #[rstest]
    #[case::valid(vec![
        port(443, Some(SECURE_NODE_PORT)),
        port(80, Some(NODE_PORT)),
    ])]
    #[case::valid_with_additional_ports(vec![
        port(22, Some(2222)),
        port(443, Some(SECURE_NODE_PORT)),
        port(80, Some(NODE_PORT)),
        port(9999, Some(9999)),
    ])]
    fn builds_passthrough_service(#[case] ports: Vec<ServicePort>) {
        let mut svc = Service::default();

        reconcile_default_ingress_passthrough_service(&mut svc, &node_port_service(ports), &hcp())
            .expect("valid node port service should succeed");

        assert_passthrough(&svc);
    }

    #[rstest]
    #[case::missing_secure_node_port(vec![port(443, None), port(80, Some(NODE_PORT))], 443)]
    #[case::zero_secure_node_port(vec![port(443, Some(0)), port(80, Some(NODE_PORT))], 443)]
    #[case::missing_node_port(vec![port(443, Some(SECURE_NODE_PORT)), port(80, None)], 80)]
    #[case::zero_node_port(vec![port(443, Some(SECURE_NODE_PORT)), port(80, Some(0))], 80)]
    #[case::missing_secure_port(vec![port(80, Some(NODE_PORT))], 443)]
    #[case::missing_port(vec![port(443, Some(SECURE_NODE_PORT))], 80)]
    #[case::no_ports(vec![], 80)]
    fn rejects_incomplete_node_port_service(
        #[case] ports: Vec<ServicePort>,
        #[case] missing: i32,
    ) {
        let mut svc = ingress_default_ingress_passthrough_service("clusters-guest");
        let before = svc.clone();

        let err = reconcile_default_ingress_passthrough_service(
            &mut svc,
            &node_port_service(ports),
            &hcp(),
        )
        .expect_err("incomplete node port service should fail");

        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.to_string().contains(MISSING_NODE_PORT));
        assert_eq!(
            err.field(),
            Some(format!("spec.ports[port={missing}].nodePort").as_str())
        );
        assert_eq!(err.resource(), Some("openshift-ingress/router-nodeport-default"));
        assert_eq!(svc, before);
    }

    #[test]
    fn node_port_service_without_spec_is_rejected() {
        let mut svc = Service::default();
        let result = reconcile_default_ingress_passthrough_service(
            &mut svc,
            &ingress_default_ingress_node_port_service(),
            &hcp(),
        );
        assert!(result.is_err());
        assert_eq!(svc, Service::default());
    }

    /// Story: the passthrough Service is rebuilt on every pass; user labels on
    /// it survive while stale ports and selectors are replaced.
    #[test]
    fn story_existing_service_is_converged() {
        let mut svc = ingress_default_ingress_passthrough_service("clusters-guest");
        svc.metadata.labels = Some(BTreeMap::from([(
            "team".to_string(),
            "networking".to_string(),
        )]));
        svc.spec = Some(ServiceSpec {
            type_: Some("NodePort".to_string()),
            selector: Some(BTreeMap::from([("app".to_string(), "stale".to_string())])),
            ports: Some(vec![port(8443, Some(30000))]),
            ..Default::default()
        });

        let template = node_port_service(vec![
            port(80, Some(NODE_PORT)),
            port(443, Some(SECURE_NODE_PORT)),
        ]);
        reconcile_default_ingress_passthrough_service(&mut svc, &template, &hcp())
            .expect("valid node port service should succeed");

        assert_passthrough(&svc);
        let labels = svc.metadata.labels.as_ref().expect("labels should be set");
        assert_eq!(labels.get("team").map(String::as_str), Some("networking"));
        let selector = svc
            .spec
            .as_ref()
            .and_then(|s| s.selector.as_ref())
            .expect("selector should be set");
        assert_eq!(selector.len(), 2);
        assert_eq!(
            svc.metadata.name.as_deref(),
            Some("default-ingress-passthrough-service")
        );
    }

    #[test]
    fn reconcile_is_idempotent() {
        let template = node_port_service(vec![
            port(80, Some(NODE_PORT)),
            port(443, Some(SECURE_NODE_PORT)),
        ]);

        let mut first = Service::default();
        reconcile_default_ingress_passthrough_service(&mut first, &template, &hcp())
            .expect("valid node port service should succeed");
        let mut second = first.clone();
        reconcile_default_ingress_passthrough_service(&mut second, &template, &hcp())
            .expect("valid node port service should succeed");

        assert_eq!(first, second);
        assert_eq!(
            serde_yaml::to_string(&first).expect("service should serialize"),
            serde_yaml::to_string(&second).expect("service should serialize")
        );
    }
}
