//! Declaration file introspection.
//!
//! Only two line shapes are recognized:
//!
//! - `export { Name } from './Name'` in a component sub-module's `index.d.ts`
//! - `export type Name = ...;` in the aggregate types file
//!
//! Everything else is ignored rather than treated as an error.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use sailkit_common_config::ResolvedPaths;
use sailkit_common_fs as fs;
use serde::Serialize;
use tracing::debug;

/// Public declaration file of a component sub-module.
pub const MODULE_INDEX: &str = "index.d.ts";

/// A public, instantiable component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ExportedSymbol {
    pub name: String,
    /// Sub-module directory the symbol was found in.
    pub source_module: String,
}

/// A verbatim single-line type alias, without `export` or the trailing `;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeAliasDefinition {
    pub signature: String,
}

fn export_list_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?m)^export[ \t]*\{([^}\n]*)\}(?:[ \t]*from[ \t]*['"][^'"\n]*['"])?[ \t]*;?[ \t]*\r?$"#)
            .expect("export list pattern is valid")
    })
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_$][\w$]*$").expect("identifier pattern is valid"))
}

fn type_alias_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^type [A-Za-z_$][\w$]*(?:<.*>)?\s*=\s*\S").expect("type alias pattern is valid")
    })
}

/// Public name of one `export { ... }` list item, if it is a component.
fn component_name(item: &str) -> Option<&str> {
    let item = item.trim();
    if item.is_empty() || item.starts_with("type ") {
        return None;
    }

    // `Local as Public` exposes `Public`
    let name = match item.split_once(" as ") {
        Some((_, public)) => public.trim(),
        None => item,
    };

    if !identifier_pattern().is_match(name) {
        return None;
    }
    if !name.starts_with(|c: char| c.is_ascii_uppercase()) || name.ends_with("Props") {
        return None;
    }
    Some(name)
}

/// Extract component names from a sub-module declaration file, in file order.
///
/// Type-only re-exports (`export type { ... }`, inline `type X` items) and
/// `*Props` names are excluded, as are names that do not start uppercase.
pub fn extract_component_exports(content: &str) -> Vec<String> {
    let mut names = Vec::new();
    for caps in export_list_pattern().captures_iter(content) {
        for item in caps[1].split(',') {
            if let Some(name) = component_name(item) {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
    }
    names
}

/// Extract top-level `export type` aliases from a types file, in file order.
pub fn extract_type_aliases(content: &str) -> Vec<TypeAliasDefinition> {
    let mut aliases: Vec<TypeAliasDefinition> = Vec::new();

    for line in content.lines() {
        // Top-level only: indented lines belong to namespaces or declarations
        let Some(rest) = line.strip_prefix("export ") else {
            continue;
        };
        let rest = rest.trim_end();
        let signature = rest.strip_suffix(';').unwrap_or(rest).trim_end();

        if !type_alias_pattern().is_match(signature) {
            continue;
        }
        if aliases.iter().any(|a| a.signature == signature) {
            continue;
        }
        aliases.push(TypeAliasDefinition {
            signature: signature.to_string(),
        });
    }

    aliases
}

/// Reads the installed package's declaration files. Read-only.
#[derive(Debug, Clone)]
pub struct PackageIntrospector {
    components_dir: PathBuf,
    types_file: PathBuf,
}

impl PackageIntrospector {
    pub fn new(components_dir: impl Into<PathBuf>, types_file: impl Into<PathBuf>) -> Self {
        Self {
            components_dir: components_dir.into(),
            types_file: types_file.into(),
        }
    }

    pub fn from_paths(paths: &ResolvedPaths) -> Self {
        Self::new(&paths.components_dir, &paths.types_file)
    }

    /// Exported components across all sub-modules, sorted by name.
    ///
    /// A missing components directory yields an empty list. When two
    /// sub-modules export the same name, the first in directory order owns it.
    pub fn components(&self) -> Vec<ExportedSymbol> {
        let modules = match fs::list_dirs(&self.components_dir) {
            Ok(modules) => modules,
            Err(e) => {
                debug!(dir = %self.components_dir.display(), error = %e, "no component modules");
                return Vec::new();
            }
        };

        let mut symbols: BTreeMap<String, String> = BTreeMap::new();
        for module in modules {
            let module_name = module
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            let Some(content) = read_declaration(&module.join(MODULE_INDEX)) else {
                continue;
            };

            for name in extract_component_exports(&content) {
                symbols.entry(name).or_insert_with(|| module_name.clone());
            }
        }

        debug!(count = symbols.len(), "introspected component exports");
        symbols
            .into_iter()
            .map(|(name, source_module)| ExportedSymbol {
                name,
                source_module,
            })
            .collect()
    }

    /// Type aliases exported by the aggregate types file, in file order.
    pub fn type_aliases(&self) -> Vec<TypeAliasDefinition> {
        match read_declaration(&self.types_file) {
            Some(content) => extract_type_aliases(&content),
            None => Vec::new(),
        }
    }
}

/// Read a declaration file; missing or unreadable files yield `None`.
fn read_declaration(path: &Path) -> Option<String> {
    match fs::read_to_string(path, fs::DEFAULT_MAX_READ) {
        Ok(content) => Some(content),
        Err(e) if e.is_not_found() => None,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping unreadable declaration file");
            None
        }
    }
}
