//! parse-name command

use clap::Args;

use hcp_common::kube_utils::{parse_namespaced_name, NamespacedName};

use crate::Result;

/// Decode a "namespace/name" reference
#[derive(Args, Debug)]
pub struct ParseNameArgs {
    /// Encoded reference, e.g. an annotation value
    pub encoded: String,
}

pub fn run(args: ParseNameArgs) -> Result<()> {
    println!("{}", render(&parse_namespaced_name(&args.encoded)));
    Ok(())
}

fn render(nn: &NamespacedName) -> String {
    format!("Namespace: {}\nName:      {}", nn.namespace, nn.name)
}
