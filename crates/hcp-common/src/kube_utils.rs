//! Shared Kubernetes object helpers
//!
//! Nothing here talks to an API server. These helpers read and decode
//! object identity so reconcilers can decide between create and update paths.

use kube::Resource;

use crate::Result;

/// Separator between namespace and name in an encoded reference
pub const NAMESPACED_NAME_SEPARATOR: char = '/';

// =============================================================================
// NamespacedName
// =============================================================================

/// Namespace and name of an object
///
/// An empty namespace means the reference did not carry one (cluster-scoped
/// objects, or a bare name in an annotation).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespacedName {
    /// Object namespace, empty when absent
    pub namespace: String,
    /// Object name
    pub name: String,
}

impl NamespacedName {
    /// Build a reference from its parts
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Identity of an existing object
    pub fn of<K: Resource>(obj: &K) -> Self {
        let meta = obj.meta();
        Self {
            namespace: meta.namespace.clone().unwrap_or_default(),
            name: meta.name.clone().unwrap_or_default(),
        }
    }
}

impl From<&str> for NamespacedName {
    fn from(encoded: &str) -> Self {
        parse_namespaced_name(encoded)
    }
}

impl std::fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(
                f,
                "{}{}{}",
                self.namespace, NAMESPACED_NAME_SEPARATOR, self.name
            )
        }
    }
}

/// Decode a `namespace/name` reference
///
/// Splits on the first separator only, so everything after it is the name.
/// A string without a separator is a bare name. Never fails: annotation
/// values may be hand-edited and a best-effort decode is preferable to
/// dropping the reference.
///
/// ```
/// use hcp_common::kube_utils::parse_namespaced_name;
///
/// let nn = parse_namespaced_name("clusters/guest");
/// assert_eq!(nn.namespace, "clusters");
/// assert_eq!(nn.name, "guest");
/// ```
pub fn parse_namespaced_name(encoded: &str) -> NamespacedName {
    match encoded.split_once(NAMESPACED_NAME_SEPARATOR) {
        Some((namespace, name)) => NamespacedName::new(namespace, name),
        None => NamespacedName::new("", encoded),
    }
}

// =============================================================================
// Create vs update
// =============================================================================

/// Whether the object was read back from the API server
///
/// Objects built from a manifest template have no resource version; anything
/// persisted has a non-empty one.
pub fn is_persisted<K: Resource>(obj: &K) -> bool {
    obj.meta()
        .resource_version
        .as_deref()
        .is_some_and(|rv| !rv.is_empty())
}

/// Mutation that leaves the object as it is
///
/// Used on the update path of objects whose spec is only initialized once.
pub fn noop_reconcile<K>(_obj: &mut K) -> Result<()> {
    Ok(())
}
