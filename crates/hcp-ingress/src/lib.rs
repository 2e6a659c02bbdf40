//! Desired state of hosted cluster ingress objects
//!
//! Pure functions from platform and topology facts to object fields. Callers
//! fetch or template the objects, run these reconcilers, and persist the result.
//!
//! # Modules
//!
//! - [`strategy`] - default IngressController publishing strategy, node placement
//!   and certificate, written once on creation
//! - [`passthrough`] - ClusterIP Service forwarding 80/443 to the guest router's node ports

#![deny(missing_docs)]

pub mod passthrough;
pub mod strategy;

pub use passthrough::reconcile_default_ingress_passthrough_service;
pub use strategy::{
    build_initial_spec, desired_default_ingress_controller, reconcile_default_ingress_controller,
    IngressControllerParams,
};
