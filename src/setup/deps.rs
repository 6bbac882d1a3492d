use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path};

use super::command::CommandRunner;

pub const MANIFEST: &str = "package.json";

/// A dev dependency the front-end build needs.
#[derive(Clone, Debug)]
pub struct Requirement {
    pub label: &'static str,
    /// Package whose presence marks the requirement as met.
    pub probe: &'static str,
    pub install: &'static [&'static str],
    /// Only required when the manifest depends on this package.
    pub when_depends_on: Option<&'static str>,
}

pub const REQUIREMENTS: [Requirement; 3] = [
    Requirement {
        label: "TypeScript",
        probe: "typescript",
        install: &["typescript"],
        when_depends_on: None,
    },
    Requirement {
        label: "React types",
        probe: "@types/react",
        install: &["@types/react", "@types/react-dom"],
        when_depends_on: None,
    },
    Requirement {
        label: "react-input-mask types",
        probe: "@types/react-input-mask",
        install: &["@types/react-input-mask"],
        when_depends_on: Some("react-input-mask"),
    },
];

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    dev_dependencies: BTreeMap<String, serde_json::Value>,
}

/// Whether `package` is listed in the manifest's dependencies or
/// devDependencies. An unreadable manifest lists nothing.
pub fn manifest_depends_on(root: &Path, package: &str) -> bool {
    let manifest = fs::read_to_string(root.join(MANIFEST))
        .ok()
        .and_then(|contents| serde_json::from_str::<Manifest>(&contents).ok())
        .unwrap_or_default();

    manifest.dependencies.contains_key(package) || manifest.dev_dependencies.contains_key(package)
}

pub fn is_installed(runner: &dyn CommandRunner, package: &str) -> bool {
    match runner.output("npm", &["list", package]) {
        Some(listing) => !listing.trim().is_empty() && !listing.contains("(empty)"),
        None => false,
    }
}

pub fn install(runner: &dyn CommandRunner, packages: &[&str]) -> bool {
    let mut args = vec!["install", "--save-dev"];
    args.extend_from_slice(packages);

    runner.run("npm", &args)
}
