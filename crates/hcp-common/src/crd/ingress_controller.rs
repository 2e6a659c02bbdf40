//! IngressController (operator.openshift.io/v1)
//!
//! The guest cluster's ingress operator reads this object to decide how the
//! router is exposed. Only the spec fields the hosted control plane manages
//! are modelled.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::{LocalObjectReference, Toleration};

/// Desired configuration of an ingress controller
///
/// Example:
/// ```yaml
/// apiVersion: operator.openshift.io/v1
/// kind: IngressController
/// metadata:
///   name: default
///   namespace: openshift-ingress-operator
/// spec:
///   domain: apps.example.com
///   replicas: 2
///   endpointPublishingStrategy:
///     type: NodePortService
///     nodePort:
///       protocol: TCP
///   nodePlacement:
///     tolerations:
///       - key: dedicated
///         value: edge
/// ```
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "operator.openshift.io",
    version = "v1",
    kind = "IngressController",
    namespaced,
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct IngressControllerSpec {
    /// DNS domain served by this controller
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,

    /// Desired number of router replicas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    /// How the router is exposed to clients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_publishing_strategy: Option<EndpointPublishingStrategy>,

    /// Scheduling constraints for router pods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_placement: Option<NodePlacement>,

    /// Secret holding the wildcard certificate served for unsecured routes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_certificate: Option<LocalObjectReference>,
}

/// Endpoint publishing strategy, tagged by `type` on the wire
///
/// Only the body belonging to the selected type can exist, which is what the
/// upstream API asks of its one-of fields.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum EndpointPublishingStrategy {
    /// Router published through a cloud load balancer Service
    LoadBalancerService {
        /// Load balancer parameters; absent means operator defaults
        #[serde(
            rename = "loadBalancer",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        load_balancer: Option<LoadBalancerStrategy>,
    },
    /// Router published through a NodePort Service
    NodePortService {
        /// NodePort parameters; absent means operator defaults
        #[serde(rename = "nodePort", default, skip_serializing_if = "Option::is_none")]
        node_port: Option<NodePortStrategy>,
    },
    /// Router binds directly to node ports 80/443
    HostNetwork,
    /// Router reachable only from inside the cluster network
    Private {
        /// Private strategy parameters
        #[serde(default)]
        private: PrivateStrategy,
    },
}

impl EndpointPublishingStrategy {
    /// Load balancer with operator defaults
    pub fn load_balancer() -> Self {
        Self::LoadBalancerService {
            load_balancer: None,
        }
    }

    /// Load balancer with an explicit scope
    pub fn load_balancer_with_scope(scope: LoadBalancerScope) -> Self {
        Self::LoadBalancerService {
            load_balancer: Some(LoadBalancerStrategy { scope }),
        }
    }

    /// NodePort with operator defaults
    pub fn node_port() -> Self {
        Self::NodePortService { node_port: None }
    }

    /// NodePort with an explicit protocol
    pub fn node_port_with_protocol(protocol: IngressControllerProtocol) -> Self {
        Self::NodePortService {
            node_port: Some(NodePortStrategy { protocol }),
        }
    }

    /// Private, cluster-internal only
    pub fn private() -> Self {
        Self::Private {
            private: PrivateStrategy::default(),
        }
    }

    /// API name of the strategy type
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::LoadBalancerService { .. } => "LoadBalancerService",
            Self::NodePortService { .. } => "NodePortService",
            Self::HostNetwork => "HostNetwork",
            Self::Private { .. } => "Private",
        }
    }
}

/// Parameters for the LoadBalancerService strategy
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct LoadBalancerStrategy {
    /// Whether the load balancer is reachable from outside the cloud network
    pub scope: LoadBalancerScope,
}

/// Reachability of a cloud load balancer
#[derive(Clone, Copy, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub enum LoadBalancerScope {
    /// Publicly reachable
    External,
    /// Reachable only inside the cloud network
    Internal,
}

/// Parameters for the NodePortService strategy
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct NodePortStrategy {
    /// Protocol spoken on the node ports
    pub protocol: IngressControllerProtocol,
}

/// Connection protocol spoken between the load balancer and the router
#[derive(Clone, Copy, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub enum IngressControllerProtocol {
    /// Plain TCP
    #[serde(rename = "TCP")]
    Tcp,
    /// PROXY protocol
    #[serde(rename = "PROXY")]
    Proxy,
}

/// Parameters for the Private strategy (currently none)
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct PrivateStrategy {}

/// Scheduling constraints for router pods
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodePlacement {
    /// Tolerations added to router pods
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tolerations: Vec<Toleration>,
}
