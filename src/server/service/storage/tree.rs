//! In-memory view of the storage hierarchy.
//!
//! Nodes are held in an arena keyed by ID with parent backpointers, so walks are
//! plain map lookups bounded by the number of nodes.

use std::collections::{HashMap, HashSet};

use entity::sea_orm_active_enums::StorageNodeType;

use crate::{model::storage::StorageTreeDto, server::model::db::StorageNodeModel};

/// Name reported for a box without an enclosing freezer
pub const FREEZER_UNKNOWN: &str = "Unknown";

pub struct StorageTree {
    nodes: HashMap<i32, StorageNodeModel>,
    children: HashMap<i32, Vec<i32>>,
    roots: Vec<i32>,
}

impl StorageTree {
    /// Builds the arena, children and roots are kept in ascending ID order
    pub fn new(mut nodes: Vec<StorageNodeModel>) -> Self {
        nodes.sort_by_key(|node| node.id);

        let ids: HashSet<i32> = nodes.iter().map(|node| node.id).collect();
        let mut children: HashMap<i32, Vec<i32>> = HashMap::new();
        let mut roots = Vec::new();

        for node in &nodes {
            match node.parent_id {
                Some(parent_id) if ids.contains(&parent_id) => {
                    children.entry(parent_id).or_default().push(node.id)
                }
                _ => roots.push(node.id),
            }
        }

        Self {
            nodes: nodes.into_iter().map(|node| (node.id, node)).collect(),
            children,
            roots,
        }
    }

    pub fn get(&self, id: i32) -> Option<&StorageNodeModel> {
        self.nodes.get(&id)
    }

    /// The node itself followed by each of its parents up to the root
    pub fn ancestors(&self, id: i32) -> Vec<&StorageNodeModel> {
        let mut visited = HashSet::new();
        let mut ancestors = Vec::new();
        let mut next = self.get(id);

        while let Some(node) = next {
            if !visited.insert(node.id) {
                break;
            }

            ancestors.push(node);
            next = node.parent_id.and_then(|parent_id| self.get(parent_id));
        }

        ancestors
    }

    /// Names from the root down to the node, inclusive
    pub fn path_names(&self, id: i32) -> Vec<String> {
        self.ancestors(id)
            .into_iter()
            .rev()
            .map(|node| node.name.clone())
            .collect()
    }

    /// The closest node of `node_type`, starting with the node itself
    pub fn enclosing(&self, id: i32, node_type: StorageNodeType) -> Option<&StorageNodeModel> {
        self.ancestors(id)
            .into_iter()
            .find(|node| node.node_type == node_type)
    }

    pub fn freezer_name(&self, id: i32) -> &str {
        self.enclosing(id, StorageNodeType::Freezer)
            .map(|freezer| freezer.name.as_str())
            .unwrap_or(FREEZER_UNKNOWN)
    }

    /// Nested view of every root and its descendants
    pub fn forest(&self) -> Vec<StorageTreeDto> {
        self.roots.iter().filter_map(|id| self.subtree(*id)).collect()
    }

    fn subtree(&self, id: i32) -> Option<StorageTreeDto> {
        let node = self.get(id)?;
        let children = self
            .children
            .get(&id)
            .map(|ids| ids.iter().filter_map(|child| self.subtree(*child)).collect())
            .unwrap_or_default();

        Some(StorageTreeDto {
            id: node.id,
            name: node.name.clone(),
            node_type: node.node_type,
            children,
        })
    }
}
