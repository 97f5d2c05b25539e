//! Steering document rendering.
//!
//! Output is fully deterministic for a given input so that unchanged inputs
//! produce byte-identical documents.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use crate::categorize::Categorized;
use crate::introspect::TypeAliasDefinition;

/// Inclusion rule understood by the downstream steering consumer.
pub const INCLUSION_FILE_MATCH: &str = "fileMatch";

/// Wrong names people reach for, and what to use instead.
const COMMON_MISTAKES: &[(&str, &str)] = &[
    ("Button", "`ButtonWidget`"),
    ("Card", "`CardLayout`"),
    ("Text", "`TextItem` or `RichTextDisplayField`"),
    ("Heading", "`HeadingField`"),
    ("Tabs", "`TabsField`"),
    ("Tag", "`TagField`"),
];

/// The two-field frontmatter block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frontmatter {
    pub inclusion: String,
    pub file_match_pattern: String,
}

impl Frontmatter {
    /// Scope a document to files matching `pattern`.
    pub fn file_match(pattern: impl Into<String>) -> Self {
        Self {
            inclusion: INCLUSION_FILE_MATCH.to_string(),
            file_match_pattern: pattern.into(),
        }
    }

    fn render(&self) -> String {
        format!(
            "---\ninclusion: {}\nfileMatchPattern: \"{}\"\n---\n",
            self.inclusion, self.file_match_pattern
        )
    }
}

/// A generated markdown document and where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteeringDocument {
    pub path: PathBuf,
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl SteeringDocument {
    /// Full file contents: frontmatter followed by the body.
    pub fn contents(&self) -> String {
        format!("{}\n{}", self.frontmatter.render(), self.body)
    }
}

/// Human name of a package, e.g. `@pglevy/sailwind` becomes `Sailwind`.
pub fn display_name(package: &str) -> String {
    let base = package.rsplit('/').next().unwrap_or(package);
    let mut chars = base.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn code_list(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Body of the component list document.
pub fn render_components_body(package: &str, categorized: &Categorized) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "# Available {} Components\n", display_name(package));
    let _ = writeln!(
        body,
        "Import these from `{package}`. Do not look in `src/components/` for these; they come \
         from the npm package. Use exact names (case-sensitive).\n"
    );
    let _ = writeln!(body, "```tsx\nimport {{ ComponentName }} from '{package}'\n```");

    for (label, members) in categorized.sections() {
        let _ = writeln!(body, "\n**{label}:** {}", code_list(members));
    }

    let _ = writeln!(body, "\n**Total: {} components**\n", categorized.total());
    let _ = writeln!(body, "Common name mistakes to avoid:");
    for (wrong, right) in COMMON_MISTAKES {
        let _ = writeln!(body, "- ❌ `{wrong}` → ✅ {right}");
    }

    body
}

/// Body of the type reference document.
pub fn render_types_body(package: &str, aliases: &[TypeAliasDefinition]) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "# {} Type Definitions\n", display_name(package));
    let _ = writeln!(
        body,
        "Prop value types exported by `{package}`. Pass these exact literal values to component \
         props, and import the type names when annotating your own code.\n"
    );
    let _ = writeln!(body, "```ts");
    for alias in aliases {
        let _ = writeln!(body, "{}", alias.signature);
    }
    let _ = writeln!(body, "```\n");
    let _ = writeln!(body, "**Total: {} types**", aliases.len());
    body
}

/// Build the component list document.
pub fn components_document(
    path: impl Into<PathBuf>,
    pattern: &str,
    package: &str,
    categorized: &Categorized,
) -> SteeringDocument {
    SteeringDocument {
        path: path.into(),
        frontmatter: Frontmatter::file_match(pattern),
        body: render_components_body(package, categorized),
    }
}

/// Build the type reference document.
pub fn types_document(
    path: impl Into<PathBuf>,
    pattern: &str,
    package: &str,
    aliases: &[TypeAliasDefinition],
) -> SteeringDocument {
    SteeringDocument {
        path: path.into(),
        frontmatter: Frontmatter::file_match(pattern),
        body: render_types_body(package, aliases),
    }
}
