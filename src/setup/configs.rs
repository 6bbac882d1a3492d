use serde_json::{json, Value};
use std::{
    fs::{self, OpenOptions},
    io::{self, ErrorKind, Write},
    path::Path,
};

pub struct ConfigDocument {
    pub name: &'static str,
    pub contents: fn() -> Value,
}

pub const DOCUMENTS: [ConfigDocument; 2] = [
    ConfigDocument { name: "tsconfig.json", contents: tsconfig },
    ConfigDocument { name: "tsconfig.node.json", contents: tsconfig_node },
];

fn tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "target": "ES2020",
            "useDefineForClassFields": true,
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "skipLibCheck": true,
            "moduleResolution": "bundler",
            "allowImportingTsExtensions": true,
            "resolveJsonModule": true,
            "isolatedModules": true,
            "noEmit": true,
            "jsx": "react-jsx",
            "strict": true,
            "noUnusedLocals": true,
            "noUnusedParameters": true,
            "noFallthroughCasesInSwitch": true,
            "baseUrl": ".",
            "paths": {
                "@/*": ["./src/*"]
            }
        },
        "include": ["src"],
        "references": [{ "path": "./tsconfig.node.json" }]
    })
}

fn tsconfig_node() -> Value {
    json!({
        "compilerOptions": {
            "composite": true,
            "skipLibCheck": true,
            "module": "ESNext",
            "moduleResolution": "bundler",
            "allowSyntheticDefaultImports": true
        },
        "include": ["vite.config.ts"]
    })
}

/// Writes the document unless a file with its name already exists.
///
/// Returns whether the file was created. A partial write is removed again
/// so a later run can retry it.
pub fn ensure(root: &Path, document: &ConfigDocument) -> io::Result<bool> {
    let path = root.join(document.name);
    let contents = serde_json::to_string_pretty(&(document.contents)())?;

    let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e),
    };

    write_or_remove(&path, file, contents.as_bytes())?;
    Ok(true)
}

fn write_or_remove(path: &Path, mut file: impl Write, contents: &[u8]) -> io::Result<()> {
    let result = file.write_all(contents).and_then(|()| file.flush());
    drop(file);

    if let Err(e) = result {
        if let Err(remove) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %remove, "failed to remove partial config");
        }
        return Err(e);
    }

    Ok(())
}
