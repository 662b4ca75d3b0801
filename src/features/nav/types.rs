//! Menu tree model. The wire format (and the hand-written catalog) is
//! classified once at load time into leaves and branches; render code never
//! re-derives what an entry is. A branch may also carry a path: clicking it
//! navigates and toggles its children, which some catalog entries rely on.

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// A single validated node in the sidebar tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuEntry {
    /// Unique among its siblings; doubles as the accordion key for top-level
    /// entries.
    pub label: String,
    /// Material symbol identifier, when the row shows an icon.
    pub icon: Option<String>,
    /// Disabled entries render inert and never navigate.
    pub enabled: bool,
    pub kind: EntryKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EntryKind {
    /// Navigable row without children.
    Leaf { path: String },
    /// Expandable row; optionally navigable as well.
    Branch {
        path: Option<String>,
        children: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    pub fn leaf(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            enabled: true,
            kind: EntryKind::Leaf { path: path.into() },
        }
    }

    pub fn branch(label: impl Into<String>, children: Vec<MenuEntry>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            enabled: true,
            kind: EntryKind::Branch {
                path: None,
                children,
            },
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Gives a branch a navigable path of its own (the dual case).
    pub fn navigable(mut self, branch_path: impl Into<String>) -> Self {
        if let EntryKind::Branch { path, .. } = &mut self.kind {
            *path = Some(branch_path.into());
        }
        self
    }

    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Leaf { path } => Some(path),
            EntryKind::Branch { path, .. } => path.as_deref(),
        }
    }

    pub fn children(&self) -> &[MenuEntry] {
        match &self.kind {
            EntryKind::Leaf { .. } => &[],
            EntryKind::Branch { children, .. } => children,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self.kind, EntryKind::Branch { .. })
    }
}

/// Named, ordered group of top-level entries within a module's sidebar.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuSection {
    pub name: String,
    pub entries: Vec<MenuEntry>,
}

/// Validation failures raised while classifying a menu tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// An entry label is empty or whitespace.
    EmptyLabel,
    /// Two siblings share a label.
    DuplicateLabel(String),
    /// An entry declares neither a path nor children.
    Dangling(String),
    /// A leaf declares an empty path.
    EmptyPath(String),
    /// A section object in the wire payload did not hold exactly one section.
    AmbiguousSection,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyLabel => write!(formatter, "menu entry label is empty"),
            CatalogError::DuplicateLabel(label) => {
                write!(formatter, "duplicate sibling label {label:?}")
            }
            CatalogError::Dangling(label) => {
                write!(formatter, "entry {label:?} has neither a path nor children")
            }
            CatalogError::EmptyPath(label) => {
                write!(formatter, "entry {label:?} declares an empty path")
            }
            CatalogError::AmbiguousSection => {
                write!(formatter, "section object must hold exactly one section")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Raw wire shape of an entry, as served by the catalog endpoint. Classified
/// into [`MenuEntry`] by [`EntrySpec::classify`]; never rendered directly.
#[derive(Clone, Debug, Deserialize)]
pub struct EntrySpec {
    pub label: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub children: Vec<EntrySpec>,
}

fn default_enabled() -> bool {
    true
}

impl EntrySpec {
    /// Classifies the raw entry into a leaf or branch, validating the whole
    /// subtree.
    pub fn classify(self) -> Result<MenuEntry, CatalogError> {
        let label = self.label.trim().to_string();
        if label.is_empty() {
            return Err(CatalogError::EmptyLabel);
        }

        let kind = if self.children.is_empty() {
            let path = self.path.unwrap_or_default();
            if path.trim().is_empty() {
                return Err(if path.is_empty() {
                    CatalogError::Dangling(label)
                } else {
                    CatalogError::EmptyPath(label)
                });
            }
            EntryKind::Leaf { path }
        } else {
            EntryKind::Branch {
                path: self.path.filter(|path| !path.trim().is_empty()),
                children: classify_siblings(self.children)?,
            }
        };

        Ok(MenuEntry {
            label,
            icon: self.icon,
            enabled: self.enabled,
            kind,
        })
    }
}

/// Classifies a sibling list, rejecting duplicate labels.
pub fn classify_siblings(specs: Vec<EntrySpec>) -> Result<Vec<MenuEntry>, CatalogError> {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(specs.len());
    for spec in specs {
        let entry = spec.classify()?;
        if !seen.insert(entry.label.clone()) {
            return Err(CatalogError::DuplicateLabel(entry.label));
        }
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::{CatalogError, EntryKind, EntrySpec, classify_siblings};

    fn spec(json: &str) -> EntrySpec {
        serde_json::from_str(json).expect("valid entry spec")
    }

    #[test]
    fn classifies_a_leaf_with_defaults() {
        let entry = spec(r#"{"label":"TDS","path":"/organization/tds-settings/tds"}"#)
            .classify()
            .expect("leaf classifies");
        assert!(entry.enabled);
        assert!(!entry.is_branch());
        assert_eq!(entry.path(), Some("/organization/tds-settings/tds"));
    }

    #[test]
    fn classifies_a_branch_and_keeps_child_order() {
        let entry = spec(
            r#"{"label":"Tax Settings","children":[
                {"label":"TDS","path":"/tax/tds"},
                {"label":"GST","path":"/tax/gst"}
            ]}"#,
        )
        .classify()
        .expect("branch classifies");
        assert!(entry.is_branch());
        assert_eq!(entry.path(), None);
        let labels: Vec<_> = entry.children().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["TDS", "GST"]);
    }

    #[test]
    fn a_branch_may_also_navigate() {
        let entry = spec(
            r#"{"label":"Menus","path":"/organization/app-menus","children":[
                {"label":"Horizontal","path":"/organization/app-menus/horizontal-ca"}
            ]}"#,
        )
        .classify()
        .expect("dual entry classifies");
        assert!(entry.is_branch());
        assert_eq!(entry.path(), Some("/organization/app-menus"));
    }

    #[test]
    fn rejects_an_entry_with_no_target() {
        let err = spec(r#"{"label":"Ghost"}"#).classify().unwrap_err();
        assert_eq!(err, CatalogError::Dangling("Ghost".to_string()));
    }

    #[test]
    fn rejects_blank_labels_and_blank_paths() {
        assert_eq!(
            spec(r#"{"label":"  ","path":"/x"}"#).classify().unwrap_err(),
            CatalogError::EmptyLabel
        );
        assert_eq!(
            spec(r#"{"label":"Blank","path":"  "}"#).classify().unwrap_err(),
            CatalogError::EmptyPath("Blank".to_string())
        );
    }

    #[test]
    fn rejects_duplicate_sibling_labels() {
        let specs = vec![
            spec(r#"{"label":"Currency","path":"/a"}"#),
            spec(r#"{"label":"Currency","path":"/b"}"#),
        ];
        assert_eq!(
            classify_siblings(specs).unwrap_err(),
            CatalogError::DuplicateLabel("Currency".to_string())
        );
    }

    #[test]
    fn disabled_flag_survives_classification() {
        let entry = spec(r#"{"label":"Legacy","path":"/legacy","enabled":false}"#)
            .classify()
            .expect("classifies");
        assert!(!entry.enabled);
        assert!(matches!(entry.kind, EntryKind::Leaf { .. }));
    }
}
