use anyhow::Context;
use serde::Deserialize;

/// Crates that must not own a source of randomness.
const RNG_FREE_CRATES: &[&str] = &["sandbox-domain"];

/// Dependencies that would give a crate its own generator.
const RNG_CRATES: &[&str] = &["rand", "rand_core", "getrandom", "fastrand"];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let violations = rng_violations(&metadata);
    if !violations.is_empty() {
        anyhow::bail!(
            "Architecture check failed - randomness must be injected:\n  {}",
            violations.join("\n  ")
        );
    }

    println!("arch-check passed");
    Ok(())
}

/// Lists `crate -> dependency` pairs where an RNG-free crate pulls in a
/// generator. Dev-dependencies are allowed.
fn rng_violations(metadata: &Metadata) -> Vec<String> {
    metadata
        .packages
        .iter()
        .filter(|package| RNG_FREE_CRATES.contains(&package.name.as_str()))
        .flat_map(|package| {
            package
                .dependencies
                .iter()
                .filter(|dep| dep.kind.as_deref() != Some("dev"))
                .filter(|dep| RNG_CRATES.contains(&dep.name.as_str()))
                .map(move |dep| format!("{} -> {}", package.name, dep.name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: serde_json::Value) -> Metadata {
        serde_json::from_value(json).expect("valid metadata")
    }

    #[test]
    fn domain_without_rand_passes() {
        let metadata = metadata(serde_json::json!({
            "packages": [
                { "name": "sandbox-domain", "dependencies": [
                    { "name": "serde", "kind": null },
                    { "name": "rand", "kind": "dev" }
                ]},
                { "name": "sandbox-engine", "dependencies": [
                    { "name": "rand", "kind": null }
                ]}
            ]
        }));
        assert!(rng_violations(&metadata).is_empty());
    }

    #[test]
    fn domain_with_rand_fails() {
        let metadata = metadata(serde_json::json!({
            "packages": [
                { "name": "sandbox-domain", "dependencies": [
                    { "name": "rand", "kind": null }
                ]}
            ]
        }));
        assert_eq!(rng_violations(&metadata), vec!["sandbox-domain -> rand"]);
    }
}
