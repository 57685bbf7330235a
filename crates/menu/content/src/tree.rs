//! Declarative menu tree descriptions.

use menu_core::{BuildError, MenuConfig, MenuNode, Vec2};

/// Data form of a menu tree, as written in RON files.
///
/// ```text
/// MenuSpec(
///     table: Some((1, 4)),
///     children: [
///         MenuSpec(name: "Attack", id: Some(1000)),
///         MenuSpec(name: "Items", table: Some((2, 4)), children: [
///             MenuSpec(name: "Tent", id: Some(3005), enabled: false),
///         ]),
///     ],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuSpec {
    #[cfg_attr(feature = "serde", serde(default = "default_name"))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default = "default_enabled"))]
    pub enabled: bool,
    /// `(columns, rows per page)`; required when `children` is non-empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub table: Option<(i32, i32)>,
    /// Overrides the layout padding for this node's grid.
    #[cfg_attr(feature = "serde", serde(default))]
    pub padding: Option<(i32, i32)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<MenuSpec>,
}

#[cfg(feature = "serde")]
fn default_name() -> String {
    MenuNode::ROOT_NAME.to_owned()
}

#[cfg(feature = "serde")]
fn default_enabled() -> bool {
    true
}

impl MenuSpec {
    pub fn leaf(name: impl Into<String>, id: i32) -> Self {
        Self {
            name: name.into(),
            id: Some(id),
            enabled: true,
            table: None,
            padding: None,
            children: Vec::new(),
        }
    }

    pub fn container(
        name: impl Into<String>,
        columns: i32,
        rows: i32,
        children: Vec<MenuSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            id: None,
            enabled: true,
            table: Some((columns, rows)),
            padding: None,
            children,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Builds a navigable tree with `config.padding` as the default grid
    /// padding.
    ///
    /// Entries sharing a name under one parent are merged, later fields
    /// overriding earlier ones.
    ///
    /// # Errors
    ///
    /// Returns the first container that cannot be laid out.
    pub fn build(&self, config: &MenuConfig) -> Result<MenuNode, BuildError> {
        let mut root = MenuNode::new(self.name.clone());
        self.apply(&mut root, config.padding);
        root.build()?;
        Ok(root)
    }

    fn apply(&self, node: &mut MenuNode, padding: Vec2) {
        if let Some(id) = self.id {
            node.set_id(id);
        }
        node.set_enabled(self.enabled);
        if let Some((columns, rows)) = self.table {
            node.set_table(columns, rows);
        }
        node.set_padding(self.padding.map_or(padding, Vec2::from));
        for child in &self.children {
            child.apply(node.get_or_create_child(&child.name), padding);
        }
    }

    /// Captures the construction-time fields of an existing tree.
    pub fn from_node(node: &MenuNode) -> Self {
        Self {
            name: node.name().to_owned(),
            id: (!node.id().is_none()).then_some(node.id().0),
            enabled: node.is_enabled(),
            table: node.table().map(|table| (table.x, table.y)),
            padding: Some((node.padding().x, node.padding().y)),
            children: node.children().iter().map(Self::from_node).collect(),
        }
    }

    /// Number of nodes in this description, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MenuSpec {
        MenuSpec::container(
            "root",
            1,
            4,
            vec![
                MenuSpec::leaf("Attack", 1000),
                MenuSpec::container(
                    "Items",
                    2,
                    4,
                    vec![
                        MenuSpec::leaf("Potion", 3001),
                        MenuSpec::leaf("Tent", 3005).disabled(),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn build_applies_fields_and_measures() {
        let root = sample().build(&MenuConfig::default()).unwrap();

        let items = root.child("Items").unwrap();
        assert_eq!(items.table(), Some(Vec2::new(2, 4)));
        assert_eq!(items.total_rows(), 1);
        assert!(!items.child("Tent").unwrap().is_enabled());
        assert_eq!(root.child("Attack").unwrap().id().0, 1000);
        assert_eq!(root.size_in_patches(), Vec2::new(8, 6));
    }

    #[test]
    fn duplicate_names_merge_into_one_entry() {
        let mut spec = sample();
        spec.children.push(MenuSpec::leaf("Attack", 1001).disabled());

        let root = spec.build(&MenuConfig::default()).unwrap();
        assert_eq!(root.children().len(), 2);
        let attack = root.child("Attack").unwrap();
        assert_eq!(attack.id().0, 1001);
        assert!(!attack.is_enabled());
    }

    #[test]
    fn padding_override_applies_to_one_node() {
        let mut spec = sample();
        spec.children[1].padding = Some((1, 1));

        let root = spec.build(&MenuConfig::default()).unwrap();
        assert_eq!(root.padding(), MenuConfig::DEFAULT_PADDING);
        assert_eq!(root.child("Items").unwrap().padding(), Vec2::new(1, 1));
    }

    #[test]
    fn missing_table_surfaces_build_error() {
        let mut spec = sample();
        spec.children[1].table = None;

        let err = spec.build(&MenuConfig::default()).unwrap_err();
        assert_eq!(err.node(), "Items");
    }

    #[test]
    fn from_node_round_trips_structure() {
        let spec = sample();
        let root = spec.build(&MenuConfig::default()).unwrap();
        let captured = MenuSpec::from_node(&root);

        assert_eq!(captured.node_count(), spec.node_count());
        assert!(!captured.children[1].children[1].enabled);
        assert_eq!(captured.children[0].id, Some(1000));
        assert_eq!(captured.id, None);
    }
}
