use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
    },
};

/// Service for username logins and user lookups.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of AuthService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the user with the provided username, creating it on first login.
    ///
    /// # Arguments
    /// - `username` - Username to log in with, surrounding whitespace is ignored
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The existing or newly created user
    /// - `Err(Error::AuthError(AuthError::EmptyUsername))` - Username is blank
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn login(&self, username: &str) -> Result<UserDto, Error> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::EmptyUsername.into());
        }

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let user = match user_repo.get_by_username(username).await? {
            Some(user) => user,
            None => {
                let user = user_repo.create(username, None).await?;
                tracing::info!(user_id = user.id, "Created user {}", user.username);

                user
            }
        };

        txn.commit().await?;

        Ok(user.into())
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }
}
