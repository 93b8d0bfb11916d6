use dioxus_logger::tracing;
use entity::sea_orm_active_enums::StorageNodeType;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::storage::StorageNodeDto,
    server::{
        data::user::UserRepository,
        error::Error,
        service::storage::{create_node, size_box},
    },
};

/// Username the default hierarchy is attributed to
pub const SEED_USERNAME: &str = "admin";

pub const SEED_BOX_ROWS: i32 = 8;
pub const SEED_BOX_COLS: i32 = 12;

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the default `Freezer A / Shelf 1 / Rack 1 / Box 1` hierarchy.
    ///
    /// The `admin` user is created if missing and recorded as the actor of every
    /// event. The box is sized to 8 rows of 12 columns. All steps share one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<StorageNodeDto>)` - The created nodes from the freezer down to the box
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn seed(&self) -> Result<Vec<StorageNodeDto>, Error> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let admin = match user_repo.get_by_username(SEED_USERNAME).await? {
            Some(user) => user,
            None => {
                user_repo
                    .create(SEED_USERNAME, Some("Admin".to_string()))
                    .await?
            }
        };
        let actor = Some(admin.id);

        let freezer = create_node(&txn, "Freezer A", StorageNodeType::Freezer, None, actor).await?;
        let shelf = create_node(
            &txn,
            "Shelf 1",
            StorageNodeType::Shelf,
            Some(freezer.id),
            actor,
        )
        .await?;
        let rack = create_node(&txn, "Rack 1", StorageNodeType::Rack, Some(shelf.id), actor).await?;
        let box_node =
            create_node(&txn, "Box 1", StorageNodeType::Box, Some(rack.id), actor).await?;
        size_box(&txn, box_node.id, SEED_BOX_ROWS, SEED_BOX_COLS, actor).await?;

        txn.commit().await?;

        tracing::info!("Seeded default storage hierarchy");

        Ok(vec![
            freezer.into(),
            shelf.into(),
            rack.into(),
            box_node.into(),
        ])
    }
}
