//! Default object templates for guest cluster ingress
//!
//! Each function returns an object carrying identity only. Reconcilers fill
//! in the spec, so a template with no resource version means "not created yet".

use k8s_openapi::api::core::v1::{Secret, Service};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use crate::crd::{IngressController, IngressControllerSpec};
use crate::{INGRESS_NAMESPACE, INGRESS_OPERATOR_NAMESPACE};

/// Name of the guest cluster default IngressController
pub const DEFAULT_INGRESS_CONTROLLER_NAME: &str = "default";

/// Name of the Secret holding the default ingress wildcard certificate
pub const DEFAULT_INGRESS_CERT_NAME: &str = "default-ingress-cert";

/// Name of the NodePort Service the ingress operator creates for the default router
pub const DEFAULT_INGRESS_NODE_PORT_SERVICE_NAME: &str = "router-nodeport-default";

/// Name of the passthrough Service in the hosted control plane namespace
pub const DEFAULT_INGRESS_PASSTHROUGH_SERVICE_NAME: &str = "default-ingress-passthrough-service";

fn object_meta(name: &str, namespace: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some(namespace.to_string()),
        ..Default::default()
    }
}

/// The guest cluster's default IngressController with an empty spec
pub fn ingress_default_ingress_controller() -> IngressController {
    let mut ic = IngressController::new(
        DEFAULT_INGRESS_CONTROLLER_NAME,
        IngressControllerSpec::default(),
    );
    ic.metadata.namespace = Some(INGRESS_OPERATOR_NAMESPACE.to_string());
    ic
}

/// Secret referenced as the default certificate of the default IngressController
pub fn ingress_default_ingress_controller_cert() -> Secret {
    Secret {
        metadata: object_meta(DEFAULT_INGRESS_CERT_NAME, INGRESS_NAMESPACE),
        ..Default::default()
    }
}

/// NodePort Service of the default router, whose allocated node ports feed
/// the passthrough Service
pub fn ingress_default_ingress_node_port_service() -> Service {
    Service {
        metadata: object_meta(DEFAULT_INGRESS_NODE_PORT_SERVICE_NAME, INGRESS_NAMESPACE),
        ..Default::default()
    }
}

/// Passthrough Service living in the hosted control plane namespace
pub fn ingress_default_ingress_passthrough_service(namespace: &str) -> Service {
    Service {
        metadata: object_meta(DEFAULT_INGRESS_PASSTHROUGH_SERVICE_NAME, namespace),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::kube_utils::{is_persisted, NamespacedName};

    #[test]
    fn templates_are_not_persisted() {
        assert!(!is_persisted(&ingress_default_ingress_controller()));
        assert!(!is_persisted(&ingress_default_ingress_node_port_service()));
        assert!(!is_persisted(
            &ingress_default_ingress_passthrough_service("clusters-guest")
        ));
    }

    #[test]
    fn default_ingress_controller_identity() {
        let ic = ingress_default_ingress_controller();
        assert_eq!(
            NamespacedName::of(&ic),
            NamespacedName::new("openshift-ingress-operator", "default")
        );
        assert_eq!(ic.spec, IngressControllerSpec::default());
    }

    #[test]
    fn passthrough_service_lives_in_given_namespace() {
        let svc = ingress_default_ingress_passthrough_service("clusters-guest");
        assert_eq!(
            NamespacedName::of(&svc),
            NamespacedName::new("clusters-guest", DEFAULT_INGRESS_PASSTHROUGH_SERVICE_NAME)
        );
        assert!(svc.spec.is_none());
    }

    #[test]
    fn cert_lives_next_to_router() {
        let cert = ingress_default_ingress_controller_cert();
        assert_eq!(cert.metadata.name.as_deref(), Some(DEFAULT_INGRESS_CERT_NAME));
        assert_eq!(cert.metadata.namespace.as_deref(), Some(INGRESS_NAMESPACE));
    }
}
