//! One-off preparation of a front-end project exported from a design tool.
//!
//! Every step is safe to repeat: missing dev dependencies are installed,
//! missing TypeScript configs are written, and `.ts` files that contain
//! markup are renamed to `.tsx`. Nothing is ever deleted or overwritten.

mod command;
mod configs;
mod deps;
mod migrate;
mod status;

use std::{
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub use command::{CommandRunner, SystemRunner};
pub use deps::{Requirement, MANIFEST, REQUIREMENTS};
pub use migrate::{find_markup_sources, looks_like_markup};
pub use status::Console;

const SOURCE_DIR: &str = "src";

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("package.json not found in {}", .0.display())]
    MissingManifest(PathBuf),
}

/// What a run changed, step by step.
#[derive(Debug, Default)]
pub struct Summary {
    pub installed: Vec<&'static str>,
    pub failed_installs: Vec<&'static str>,
    pub created: Vec<PathBuf>,
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub failed_writes: Vec<PathBuf>,
}

impl Summary {
    /// Number of filesystem changes made, including dependency installs.
    pub fn writes(&self) -> usize {
        self.installed.len() + self.created.len() + self.renamed.len()
    }
}

pub struct Setup<'a, W> {
    root: &'a Path,
    runner: &'a dyn CommandRunner,
    console: Console<W>,
    summary: Summary,
}

impl<'a, W: Write> Setup<'a, W> {
    pub fn new(root: &'a Path, runner: &'a dyn CommandRunner, console: Console<W>) -> Self {
        Self { root, runner, console, summary: Summary::default() }
    }

    /// Runs every step in order. Only a missing manifest stops the run;
    /// every other failure is reported and the remaining steps still run.
    pub fn run(mut self) -> Result<(Summary, Console<W>), SetupError> {
        self.console.success("🔧 Project Setup");
        self.console.success("==============================\n");

        if !self.root.join(MANIFEST).is_file() {
            self.console.error(&format!(
                "❌ Error: {MANIFEST} not found. Please run this from the project root.",
            ));
            return Err(SetupError::MissingManifest(self.root.to_owned()));
        }

        self.dependencies();
        self.config_documents();
        self.markup_sources();

        self.console.success("\n✅ Setup complete!");
        self.console.success("\nNext steps:");
        self.console.info("  1. Run 'npm install' if you haven't already");
        self.console.info("  2. Run 'npm run dev' to start the development server");
        self.console.info("  3. Run 'npm run build' to test the build\n");

        Ok((self.summary, self.console))
    }

    fn dependencies(&mut self) {
        self.console.info("📦 Step 1: Checking and installing missing dependencies...\n");

        for requirement in &REQUIREMENTS {
            if let Some(dependency) = requirement.when_depends_on {
                if !deps::manifest_depends_on(self.root, dependency) {
                    self.console.success(&format!("✓ {} not needed", requirement.label));
                    continue;
                }
            }

            if deps::is_installed(self.runner, requirement.probe) {
                self.console.success(&format!("✓ {} already installed", requirement.label));
                continue;
            }

            self.console.warn(&format!("⚠️  {} not found. Installing...", requirement.label));

            if deps::install(self.runner, requirement.install) {
                tracing::info!(packages = ?requirement.install, "installed");
                self.summary.installed.push(requirement.probe);
                self.console.success(&format!("✓ {} installed\n", requirement.label));
            } else {
                tracing::warn!(packages = ?requirement.install, "install failed");
                self.summary.failed_installs.push(requirement.probe);
                self.console.error(&format!("\n❌ Error: Installing {}", requirement.label));
            }
        }
    }

    fn config_documents(&mut self) {
        self.console.info("\n📝 Step 2: Checking TypeScript configuration...\n");

        for document in &configs::DOCUMENTS {
            let path = self.root.join(document.name);

            match configs::ensure(self.root, document) {
                Ok(true) => {
                    self.console.warn(&format!("⚠️  {} not found. Created it.", document.name));
                    self.console.success(&format!("✓ Created {}", document.name));
                    self.summary.created.push(path);
                }
                Ok(false) => {
                    self.console.success(&format!("✓ {} already exists", document.name));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to write config");
                    self.console.error(&format!("❌ Error: could not write {}: {e}", document.name));
                    self.summary.failed_writes.push(path);
                }
            }
        }
    }

    fn markup_sources(&mut self) {
        self.console.info("\n🔍 Step 3: Checking for .ts files containing JSX...\n");

        let source_dir = self.root.join(SOURCE_DIR);
        if !source_dir.is_dir() {
            self.console.warn("⚠️  src directory not found. Skipping JSX check.");
            return;
        }

        let sources = migrate::find_markup_sources(&source_dir);
        if sources.is_empty() {
            self.console.success("✓ No .ts files with JSX found");
            return;
        }

        for source in sources {
            let shown = source.strip_prefix(self.root).unwrap_or(&source).display().to_string();
            self.console.warn(&format!("⚠️  Found JSX in .ts file: {shown}"));

            match migrate::rename_to_markup(&source) {
                Ok(migrate::Rename::Renamed(target)) => {
                    let shown_target = target.strip_prefix(self.root).unwrap_or(&target).display().to_string();
                    self.console.success(&format!("   → Renamed to {shown_target}"));
                    self.summary.renamed.push((source, target));
                }
                Ok(migrate::Rename::Conflict(target)) => {
                    self.console.warn(&format!("   → {} already exists, left unchanged", target.display()));
                }
                Err(e) => {
                    tracing::warn!(path = %source.display(), error = %e, "rename failed");
                    self.console.error(&format!("   → Could not rename: {e}"));
                    self.summary.failed_writes.push(source);
                }
            }
        }

        if !self.summary.renamed.is_empty() {
            self.console.success(&format!(
                "\n✓ Fixed {} file(s) with JSX in .ts extension",
                self.summary.renamed.len(),
            ));
        }
    }
}

/// Prepares the project at `root`, reporting progress to `out`.
pub fn run<W: Write>(root: &Path, runner: &dyn CommandRunner, out: W) -> Result<Summary, SetupError> {
    let (summary, _) = Setup::new(root, runner, Console::new(out)).run()?;
    Ok(summary)
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::{deps::tests::FakeNpm, status::tests::Closed};
    use std::fs;

    const MANIFEST_JSON: &str = r#"{ "name": "site", "dependencies": { "react": "^18.0.0" } }"#;

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST), MANIFEST_JSON).unwrap();
        fs::create_dir_all(dir.path().join("src/components")).unwrap();
        fs::write(dir.path().join("src/components/Hero.ts"), "export const Hero = () => <div />;").unwrap();
        fs::write(dir.path().join("src/main.tsx"), "<App />").unwrap();
        fs::write(dir.path().join("src/util.ts"), "export const one = 1;").unwrap();
        dir
    }

    fn run_plain(root: &Path, npm: &FakeNpm) -> (Result<Summary, SetupError>, String) {
        let result = Setup::new(root, npm, Console::plain(Vec::new()))
            .run()
            .map(|(summary, console)| (summary, String::from_utf8(console.into_inner()).unwrap()));

        match result {
            Ok((summary, out)) => (Ok(summary), out),
            Err(e) => (Err(e), String::new()),
        }
    }

    #[test]
    fn missing_manifest_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        let err = run(dir.path(), &FakeNpm::default(), &mut out).unwrap_err();

        assert!(matches!(err, SetupError::MissingManifest(_)));
        assert!(String::from_utf8(out).unwrap().contains("package.json not found"));
        assert!(!dir.path().join("tsconfig.json").exists());
    }

    #[test]
    fn first_run_prepares_the_project() {
        let dir = project();
        let npm = FakeNpm::default();

        let (summary, out) = run_plain(dir.path(), &npm);
        let summary = summary.unwrap();

        assert_eq!(summary.installed, vec!["typescript", "@types/react"]);
        assert_eq!(summary.created.len(), 2);
        assert_eq!(summary.renamed.len(), 1);
        assert!(dir.path().join("tsconfig.json").is_file());
        assert!(dir.path().join("tsconfig.node.json").is_file());
        assert!(dir.path().join("src/components/Hero.tsx").is_file());
        assert!(dir.path().join("src/util.ts").is_file());
        assert!(out.contains("✓ react-input-mask types not needed"), "{out}");
        assert!(out.contains("Fixed 1 file(s)"), "{out}");
    }

    #[test]
    fn second_run_changes_nothing() {
        let dir = project();
        let npm = FakeNpm::default();

        let (first, _) = run_plain(dir.path(), &npm);
        assert!(first.unwrap().writes() > 0);
        let installs_after_first = npm.installs.borrow().len();

        let (second, out) = run_plain(dir.path(), &npm);
        let second = second.unwrap();

        assert_eq!(second.writes(), 0);
        assert_eq!(npm.installs.borrow().len(), installs_after_first);
        assert!(out.contains("✓ tsconfig.json already exists"), "{out}");
        assert!(out.contains("✓ No .ts files with JSX found"), "{out}");
    }

    #[test]
    fn failed_install_does_not_stop_later_steps() {
        let dir = project();
        let npm = FakeNpm {
            broken: ["typescript".to_owned()].into_iter().collect(),
            ..FakeNpm::default()
        };

        let (summary, out) = run_plain(dir.path(), &npm);
        let summary = summary.unwrap();

        assert_eq!(summary.failed_installs, vec!["typescript"]);
        assert_eq!(summary.installed, vec!["@types/react"]);
        assert_eq!(summary.created.len(), 2);
        assert_eq!(summary.renamed.len(), 1);
        assert!(out.contains("❌ Error: Installing TypeScript"), "{out}");
    }

    #[test]
    fn conditional_requirement_follows_the_manifest() {
        let dir = project();
        fs::write(
            dir.path().join(MANIFEST),
            r#"{ "dependencies": { "react-input-mask": "^2.0.4" } }"#,
        ).unwrap();
        let npm = FakeNpm::with_installed(&["typescript", "@types/react"]);

        let (summary, _) = run_plain(dir.path(), &npm);

        assert_eq!(summary.unwrap().installed, vec!["@types/react-input-mask"]);
    }

    #[test]
    fn existing_configs_are_kept() {
        let dir = project();
        fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();

        let (summary, _) = run_plain(dir.path(), &FakeNpm::default());

        assert_eq!(summary.unwrap().created, vec![dir.path().join("tsconfig.node.json")]);
        assert_eq!(fs::read_to_string(dir.path().join("tsconfig.json")).unwrap(), "{}");
    }

    #[test]
    fn missing_source_dir_skips_migration() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST), MANIFEST_JSON).unwrap();

        let (summary, out) = run_plain(dir.path(), &FakeNpm::default());

        assert!(summary.unwrap().renamed.is_empty());
        assert!(out.contains("src directory not found"), "{out}");
    }

    #[test]
    fn colored_console_wraps_status_lines() {
        let dir = project();
        let npm = FakeNpm::with_installed(&["typescript", "@types/react"]);

        let (_, console) = Setup::new(dir.path(), &npm, Console::colored(Vec::new())).run().unwrap();

        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.contains("\x1b[32m✓ TypeScript already installed\x1b[0m"), "{out}");
    }

    #[test]
    fn unwritable_output_does_not_stop_the_run() {
        let dir = project();
        let npm = FakeNpm::with_installed(&["typescript", "@types/react"]);

        let summary = run(dir.path(), &npm, Closed).unwrap();

        assert_eq!(summary.created.len(), 2);
        assert_eq!(summary.renamed.len(), 1);
        assert!(dir.path().join("tsconfig.json").is_file());
        assert!(dir.path().join("src/components/Hero.tsx").is_file());
    }

    #[test]
    fn missing_manifest_is_fatal_even_when_output_fails() {
        let dir = tempfile::tempdir().unwrap();

        let err = run(dir.path(), &FakeNpm::default(), Closed).unwrap_err();

        assert!(matches!(err, SetupError::MissingManifest(_)));
    }
}
