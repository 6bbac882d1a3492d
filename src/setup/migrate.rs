use regex::Regex;
use std::{
    fs,
    io,
    path::{Path, PathBuf},
    sync::OnceLock,
};
use walkdir::{DirEntry, WalkDir};

const SKIPPED_DIRS: [&str; 2] = ["node_modules", ".git"];
const SOURCE_EXTENSION: &str = ".ts";
const MARKUP_EXTENSION: &str = ".tsx";

fn markup_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[A-Za-z]|</[A-Za-z]|/>").expect("valid markup pattern"))
}

pub fn looks_like_markup(contents: &str) -> bool {
    markup_pattern().is_match(contents)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_str().is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn is_plain_source(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(SOURCE_EXTENSION) && !name.ends_with(MARKUP_EXTENSION))
}

/// Finds `.ts` files under `dir` whose contents contain markup.
///
/// Dependency and version-control directories are not descended into, and
/// files that can't be read are skipped. Contents are decoded lossily, so
/// invalid UTF-8 doesn't hide markup.
pub fn find_markup_sources(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_plain_source(entry.path()) {
            continue;
        }

        match fs::read(entry.path()) {
            Ok(bytes) if looks_like_markup(&String::from_utf8_lossy(&bytes)) => found.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => tracing::debug!(path = %entry.path().display(), error = %e, "skipping unreadable file"),
        }
    }

    found
}

/// Swaps the trailing `.ts` of the file name for `.tsx`.
pub fn markup_path(path: &Path) -> PathBuf {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => {
            let stem = name.strip_suffix(SOURCE_EXTENSION).unwrap_or(name);
            path.with_file_name(format!("{stem}{MARKUP_EXTENSION}"))
        }
        None => path.with_extension(&MARKUP_EXTENSION[1..]),
    }
}

#[derive(Debug)]
pub enum Rename {
    Renamed(PathBuf),
    /// The `.tsx` counterpart already exists; nothing was touched.
    Conflict(PathBuf),
}

pub fn rename_to_markup(path: &Path) -> io::Result<Rename> {
    let target = markup_path(path);

    if target.exists() {
        return Ok(Rename::Conflict(target));
    }

    fs::rename(path, &target)?;
    Ok(Rename::Renamed(target))
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn markup_heuristic() {
        assert!(looks_like_markup("return <div>hi</div>;"));
        assert!(looks_like_markup("</Button>"));
        assert!(looks_like_markup("<Icon />"));
        assert!(looks_like_markup("x />"));
        assert!(!looks_like_markup("const a = b < 3 && c > 2;"));
        assert!(!looks_like_markup("if (a <= 2) { b = a >> 1; }"));
    }

    #[test]
    fn generic_type_parameters_match_like_tags() {
        // Array<T> has no space after `<`, so it reads as a tag
        assert!(looks_like_markup("Array<T>"));
    }

    #[test]
    fn finds_only_plain_sources_with_markup() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "src/App.ts", "export const App = () => <main />;");
        write(root, "src/util.ts", "export const add = (a: number, b: number) => a + b;");
        write(root, "src/Page.tsx", "export const Page = () => <div />;");
        write(root, "src/nested/deep/Card.ts", "return <section></section>;");
        write(root, "src/styles.css", "a > b {}");

        let found = find_markup_sources(&root.join("src"));

        assert_eq!(found, vec![
            root.join("src/App.ts"),
            root.join("src/nested/deep/Card.ts"),
        ]);
    }

    #[test]
    fn skips_dependency_and_vcs_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "src/node_modules/pkg/index.ts", "<div />");
        write(root, "src/.git/hooks/x.ts", "<div />");
        write(root, "src/ok.ts", "plain");

        assert!(find_markup_sources(&root.join("src")).is_empty());
    }

    #[test]
    fn renames_to_markup_extension() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "App.ts", "<main />");
        let path = dir.path().join("App.ts");

        let Rename::Renamed(target) = rename_to_markup(&path).unwrap() else {
            panic!("expected a rename");
        };

        assert_eq!(target, dir.path().join("App.tsx"));
        assert!(!path.exists());
        assert_eq!(fs::read_to_string(target).unwrap(), "<main />");
    }

    #[test]
    fn markup_path_replaces_only_the_suffix() {
        assert_eq!(markup_path(Path::new("src/App.ts")), PathBuf::from("src/App.tsx"));
        assert_eq!(markup_path(Path::new("src/api.d.ts")), PathBuf::from("src/api.d.tsx"));
        assert_eq!(markup_path(Path::new("src/.ts")), PathBuf::from("src/.tsx"));
    }

    #[test]
    fn invalid_utf8_still_reads_as_markup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Legacy.ts");
        fs::write(&path, b"// caf\xe9\nexport const L = () => <div />;").unwrap();

        assert_eq!(find_markup_sources(dir.path()), vec![path]);
    }

    #[test]
    fn existing_targets_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "App.ts", "<main />");
        write(dir.path(), "App.tsx", "<other />");

        let result = rename_to_markup(&dir.path().join("App.ts")).unwrap();

        assert!(matches!(result, Rename::Conflict(_)));
        assert_eq!(fs::read_to_string(dir.path().join("App.ts")).unwrap(), "<main />");
        assert_eq!(fs::read_to_string(dir.path().join("App.tsx")).unwrap(), "<other />");
    }
}
