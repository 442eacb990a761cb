//! Ordered dropdown-level sequence over a metric tree

use shared::models::MetricNode;

use super::HealthSourceError;

/// Separator used in query scopes and stored paths
pub const PATH_SEPARATOR: &str = "|";
/// Separator used in the UI rendering of a path
pub const DISPLAY_SEPARATOR: &str = " / ";

/// One dropdown level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLevel {
    /// The node name chosen at this level, if any
    pub selection: Option<String>,
    /// `|`-joined selections of all prior levels; the query scope for this
    /// level's options
    pub path: String,
    /// Whether the selection is a metric (terminal) rather than a folder
    pub is_leaf: bool,
}

impl PathLevel {
    fn empty(path: String) -> Self {
        Self {
            selection: None,
            path,
            is_leaf: false,
        }
    }
}

/// Dependent-dropdown tree navigator
///
/// Levels form an explicit ordered sequence. Selecting at level `i`
/// invalidates every deeper level; a folder selection opens exactly one
/// new empty level scoped by the accumulated path, a leaf selection ends
/// the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricPathPicker {
    levels: Vec<PathLevel>,
}

impl Default for MetricPathPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricPathPicker {
    pub fn new() -> Self {
        Self {
            levels: vec![PathLevel::empty(String::new())],
        }
    }

    pub fn levels(&self) -> &[PathLevel] {
        &self.levels
    }

    /// The query scope for options at `index`
    pub fn scope_at(&self, index: usize) -> Result<&str, HealthSourceError> {
        self.levels
            .get(index)
            .map(|level| level.path.as_str())
            .ok_or(HealthSourceError::LevelOutOfRange {
                index,
                len: self.levels.len(),
            })
    }

    /// Record a selection at `index`
    ///
    /// Deeper levels are stale once an ancestor changes and are dropped.
    pub fn select(&mut self, index: usize, node: &MetricNode) -> Result<(), HealthSourceError> {
        if index >= self.levels.len() {
            return Err(HealthSourceError::LevelOutOfRange {
                index,
                len: self.levels.len(),
            });
        }

        self.levels[index].selection = Some(node.name.clone());
        self.levels[index].is_leaf = node.is_leaf;
        self.levels.truncate(index + 1);

        if !node.is_leaf {
            let path = self.joined_through(index);
            self.levels.push(PathLevel::empty(path));
        }
        Ok(())
    }

    /// Selections through `index`, `|`-joined
    fn joined_through(&self, index: usize) -> String {
        self.levels[..=index]
            .iter()
            .filter_map(|level| level.selection.as_deref())
            .collect::<Vec<_>>()
            .join(PATH_SEPARATOR)
    }

    /// The full selected path, `|`-joined
    pub fn full_path(&self) -> String {
        self.joined(PATH_SEPARATOR)
    }

    /// The path as rendered in the UI
    pub fn display_path(&self) -> String {
        self.joined(DISPLAY_SEPARATOR)
    }

    fn joined(&self, separator: &str) -> String {
        self.levels
            .iter()
            .filter_map(|level| level.selection.as_deref())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Whether the path ends in a metric
    pub fn is_terminal(&self) -> bool {
        self.levels
            .last()
            .is_some_and(|level| level.selection.is_some() && level.is_leaf)
    }

    /// Drop every selection and start over from the root level
    pub fn reset(&mut self) {
        self.levels = vec![PathLevel::empty(String::new())];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_selection_opens_exactly_one_empty_level() {
        let mut picker = MetricPathPicker::new();
        picker
            .select(0, &MetricNode::folder("Overall Application Performance"))
            .unwrap();

        assert_eq!(picker.levels().len(), 2);
        let opened = &picker.levels()[1];
        assert_eq!(opened.selection, None);
        assert_eq!(opened.path, "Overall Application Performance");
        assert!(!picker.is_terminal());
    }

    #[test]
    fn leaf_selection_never_appends_a_level() {
        let mut picker = MetricPathPicker::new();
        picker.select(0, &MetricNode::folder("tiers")).unwrap();
        picker.select(1, &MetricNode::leaf("Calls per Minute")).unwrap();

        assert_eq!(picker.levels().len(), 2);
        assert!(picker.is_terminal());
        assert_eq!(picker.full_path(), "tiers|Calls per Minute");
        assert_eq!(picker.display_path(), "tiers / Calls per Minute");
    }

    #[test]
    fn reselecting_an_ancestor_drops_descendants() {
        let mut picker = MetricPathPicker::new();
        picker.select(0, &MetricNode::folder("a")).unwrap();
        picker.select(1, &MetricNode::folder("b")).unwrap();
        picker.select(2, &MetricNode::folder("c")).unwrap();
        assert_eq!(picker.levels().len(), 4);

        picker.select(0, &MetricNode::folder("x")).unwrap();

        assert_eq!(picker.levels().len(), 2);
        assert_eq!(picker.levels()[0].selection.as_deref(), Some("x"));
        assert_eq!(picker.levels()[1].path, "x");
        assert_eq!(picker.full_path(), "x");
    }

    #[test]
    fn switching_a_folder_to_a_leaf_terminates_the_path() {
        let mut picker = MetricPathPicker::new();
        picker.select(0, &MetricNode::folder("a")).unwrap();
        picker.select(1, &MetricNode::folder("b")).unwrap();

        picker.select(0, &MetricNode::leaf("metric")).unwrap();

        assert_eq!(picker.levels().len(), 1);
        assert!(picker.is_terminal());
        assert_eq!(picker.full_path(), "metric");
    }

    #[test]
    fn opened_level_path_joins_selections_through_its_parent() {
        let mut picker = MetricPathPicker::new();
        picker.select(0, &MetricNode::folder("a")).unwrap();
        picker.select(1, &MetricNode::folder("b")).unwrap();

        assert_eq!(picker.levels()[2].path, "a|b");
        assert_eq!(picker.scope_at(2).unwrap(), "a|b");
    }

    #[test]
    fn selecting_past_the_open_levels_is_rejected() {
        let mut picker = MetricPathPicker::new();
        let err = picker.select(3, &MetricNode::folder("a")).unwrap_err();
        assert!(matches!(
            err,
            HealthSourceError::LevelOutOfRange { index: 3, len: 1 }
        ));
    }

    #[test]
    fn reset_returns_to_a_single_root_level() {
        let mut picker = MetricPathPicker::new();
        picker.select(0, &MetricNode::folder("a")).unwrap();
        picker.reset();

        assert_eq!(picker.levels().len(), 1);
        assert_eq!(picker.full_path(), "");
    }
}
