//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context
//! holds an in-memory SQLite database and a session backed by a memory store.

use std::sync::Arc;

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_inventory_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixtures helpers
/// let hierarchy = test.storage().insert_hierarchy(8, 12).await?;
/// let sample = test.sample().insert_sample("S001").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for authentication flows
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with no tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Create database tables from schema statements.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create indexes that cannot be derived from entity definitions.
    pub(crate) async fn with_indexes(
        &self,
        stmts: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
