use std::collections::HashSet;

use entity::sea_orm_active_enums::StorageNodeType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::StorageNodeModel;

pub struct StorageNodeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StorageNodeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        node_type: StorageNodeType,
        parent_id: Option<i32>,
    ) -> Result<StorageNodeModel, DbErr> {
        let node = entity::storage_node::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            node_type: ActiveValue::Set(node_type),
            parent_id: ActiveValue::Set(parent_id),
            ..Default::default()
        };

        node.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<StorageNodeModel>, DbErr> {
        entity::prelude::StorageNode::find_by_id(id).one(self.db).await
    }

    /// Gets top-level nodes ordered by ID
    pub async fn get_roots(&self) -> Result<Vec<StorageNodeModel>, DbErr> {
        entity::prelude::StorageNode::find()
            .filter(entity::storage_node::Column::ParentId.is_null())
            .order_by_asc(entity::storage_node::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every node ordered by ID
    pub async fn get_all(&self) -> Result<Vec<StorageNodeModel>, DbErr> {
        entity::prelude::StorageNode::find()
            .order_by_asc(entity::storage_node::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the chain of nodes from the root of the hierarchy down to `node`
    ///
    /// The walk stops at the first missing parent or at a node visited twice.
    pub async fn get_path(&self, node: StorageNodeModel) -> Result<Vec<StorageNodeModel>, DbErr> {
        let mut visited = HashSet::from([node.id]);
        let mut next_parent_id = node.parent_id;
        let mut path = vec![node];

        while let Some(parent_id) = next_parent_id {
            if !visited.insert(parent_id) {
                break;
            }

            let Some(parent) = self.get_by_id(parent_id).await? else {
                break;
            };

            next_parent_id = parent.parent_id;
            path.push(parent);
        }

        path.reverse();

        Ok(path)
    }
}
