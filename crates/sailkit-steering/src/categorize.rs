//! Component categorization.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

/// Label of the overflow bucket.
pub const OTHER_LABEL: &str = "Other";

/// Known components grouped for readers, in display order. The table may name
/// components the installed package version does not have.
pub const CATEGORY_TABLE: &[(&str, &[&str])] = &[
    (
        "Layout",
        &["CardLayout", "CollapsibleSection", "ApplicationHeader", "SideNavAdmin"],
    ),
    (
        "Display",
        &[
            "HeadingField",
            "RichTextDisplayField",
            "TextItem",
            "Icon",
            "ImageField",
            "MessageBanner",
            "TagField",
            "TagItem",
            "StampField",
            "ProgressBar",
            "MilestoneField",
        ],
    ),
    (
        "Input",
        &[
            "TextField",
            "DropdownField",
            "MultipleDropdownField",
            "CheckboxField",
            "RadioButtonField",
            "SwitchField",
            "ToggleField",
            "SliderField",
        ],
    ),
    (
        "Actions",
        &["ButtonWidget", "ButtonArrayLayout", "DialogField", "TabsField"],
    ),
    ("Utility", &["FieldLabel", "FieldWrapper"]),
];

/// One category and the installed components that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentCategory {
    pub label: String,
    /// Alphabetical.
    pub members: Vec<String>,
}

/// Result of partitioning component names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Categorized {
    /// Every configured category, in table order, possibly empty.
    pub categories: Vec<ComponentCategory>,
    /// Names no category claims, alphabetical.
    pub other: Vec<String>,
}

impl Categorized {
    /// Number of distinct names across all buckets.
    pub fn total(&self) -> usize {
        self.categories.iter().map(|c| c.members.len()).sum::<usize>() + self.other.len()
    }

    /// Non-empty buckets in display order, `Other` last.
    pub fn sections(&self) -> Vec<(&str, &[String])> {
        let mut sections: Vec<(&str, &[String])> = self
            .categories
            .iter()
            .filter(|c| !c.members.is_empty())
            .map(|c| (c.label.as_str(), c.members.as_slice()))
            .collect();
        if !self.other.is_empty() {
            sections.push((OTHER_LABEL, self.other.as_slice()));
        }
        sections
    }
}

/// Partition names using [`CATEGORY_TABLE`].
pub fn categorize<S: AsRef<str>>(names: &[S]) -> Categorized {
    categorize_with(CATEGORY_TABLE, names)
}

/// Partition names using an explicit table.
///
/// Each input name lands in exactly one bucket: the first category that lists
/// it, otherwise `Other`. Duplicate input names collapse.
pub fn categorize_with<S: AsRef<str>>(table: &[(&str, &[&str])], names: &[S]) -> Categorized {
    let present: BTreeSet<&str> = names.iter().map(AsRef::<str>::as_ref).collect();
    let mut claimed: HashSet<&str> = HashSet::new();

    let categories = table
        .iter()
        .map(|(label, configured)| {
            let mut members: Vec<String> = configured
                .iter()
                .copied()
                .filter(|name| present.contains(*name) && claimed.insert(*name))
                .map(str::to_string)
                .collect();
            members.sort();
            ComponentCategory {
                label: label.to_string(),
                members,
            }
        })
        .collect();

    let other = present
        .iter()
        .filter(|name| !claimed.contains(**name))
        .map(|name| name.to_string())
        .collect();

    Categorized { categories, other }
}
