//! Resource definitions consumed and produced by the ingress reconcilers
//!
//! These mirror the upstream OpenShift and HyperShift APIs closely enough to
//! round-trip through YAML, carrying only the fields the reconcilers read or write.

mod hosted_control_plane;
mod ingress_controller;
mod types;

pub use hosted_control_plane::{HostedControlPlane, HostedControlPlaneSpec, PlatformSpec};
pub use ingress_controller::{
    EndpointPublishingStrategy, IngressController, IngressControllerProtocol,
    IngressControllerSpec, LoadBalancerScope, LoadBalancerStrategy, NodePlacement,
    NodePortStrategy, PrivateStrategy,
};
pub use types::{LocalObjectReference, PlatformType, Toleration};
