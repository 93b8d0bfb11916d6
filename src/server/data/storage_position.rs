use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{model::db::StoragePositionModel, util::position::position_label};

pub struct StoragePositionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StoragePositionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `rows × cols` grid of labelled positions into a box
    ///
    /// Returns every position of the box ordered by row and column.
    pub async fn create_grid(
        &self,
        box_id: i32,
        rows: i32,
        cols: i32,
    ) -> Result<Vec<StoragePositionModel>, DbErr> {
        let positions = (1..=rows).flat_map(|row| {
            (1..=cols).map(move |col| entity::storage_position::ActiveModel {
                box_id: ActiveValue::Set(box_id),
                row: ActiveValue::Set(row),
                col: ActiveValue::Set(col),
                label: ActiveValue::Set(position_label(row, col)),
                ..Default::default()
            })
        });

        entity::prelude::StoragePosition::insert_many(positions)
            .exec(self.db)
            .await?;

        self.get_by_box_id(box_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<StoragePositionModel>, DbErr> {
        entity::prelude::StoragePosition::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets the positions of a box ordered by row then column
    pub async fn get_by_box_id(&self, box_id: i32) -> Result<Vec<StoragePositionModel>, DbErr> {
        entity::prelude::StoragePosition::find()
            .filter(entity::storage_position::Column::BoxId.eq(box_id))
            .order_by_asc(entity::storage_position::Column::Row)
            .order_by_asc(entity::storage_position::Column::Col)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::StoragePosition::find()
            .count(self.db)
            .await
    }
}
