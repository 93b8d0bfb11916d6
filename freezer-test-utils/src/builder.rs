//! Declarative test builder.
//!
//! `TestBuilder` queues database tables and fixtures, then creates all of them in
//! the final `build()` call.

use entity::storage_position;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_inventory_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    sample_types: Vec<String>,
    samples: Vec<String>,
    storage_hierarchies: Vec<(i32, i32)>, // (rows, cols)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_inventory_tables: false,
            users: Vec::new(),
            sample_types: Vec::new(),
            samples: Vec::new(),
            storage_hierarchies: Vec::new(),
        }
    }

    /// Add every inventory table to the test database.
    ///
    /// Creates users, sample types, storage nodes, storage positions, samples,
    /// sample locations and events, plus the unique `(box_id, row, col)` index
    /// on storage positions.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_inventory_tables(mut self) -> Self {
        self.include_inventory_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use freezer_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), freezer_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(SampleType)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided username during `build()`.
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Insert a sample type with the provided name during `build()`.
    pub fn with_sample_type(mut self, name: impl Into<String>) -> Self {
        self.sample_types.push(name.into());
        self
    }

    /// Insert an unplaced `active` sample with the provided external ID during `build()`.
    pub fn with_sample(mut self, sample_id: impl Into<String>) -> Self {
        self.samples.push(sample_id.into());
        self
    }

    /// Insert a `Freezer A / Shelf 1 / Rack 1 / Box 1` hierarchy during `build()`.
    ///
    /// The box receives `rows × cols` positions.
    pub fn with_storage_hierarchy(mut self, rows: i32, cols: i32) -> Self {
        self.storage_hierarchies.push((rows, cols));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (inventory tables if specified, then custom tables)
    /// 2. Inserts database fixtures (users, sample types, storage, samples)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut all_indexes = Vec::new();

        if self.include_inventory_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::SampleType),
                schema.create_table_from_entity(entity::prelude::StorageNode),
                schema.create_table_from_entity(entity::prelude::StoragePosition),
                schema.create_table_from_entity(entity::prelude::Sample),
                schema.create_table_from_entity(entity::prelude::SampleLocation),
                schema.create_table_from_entity(entity::prelude::Event),
            ]);
            all_indexes.push(position_grid_index());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        setup.with_indexes(all_indexes).await?;

        // 2. Insert database fixtures
        for username in self.users {
            setup.user().insert_user(&username).await?;
        }

        for name in self.sample_types {
            setup.sample().insert_sample_type(&name).await?;
        }

        for (rows, cols) in self.storage_hierarchies {
            setup.storage().insert_hierarchy(rows, cols).await?;
        }

        for sample_id in self.samples {
            setup.sample().insert_sample(&sample_id).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn position_grid_index() -> IndexCreateStatement {
    Index::create()
        .name("idx-storage_positions-box_id-row-col")
        .table(storage_position::Entity)
        .col(storage_position::Column::BoxId)
        .col(storage_position::Column::Row)
        .col(storage_position::Column::Col)
        .unique()
        .to_owned()
}
