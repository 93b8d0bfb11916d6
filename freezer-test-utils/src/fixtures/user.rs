use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            full_name: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
