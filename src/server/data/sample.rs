use chrono::Utc;
use migration::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::sample::{CreateSampleDto, SampleListQuery, SampleSort, UpdateSampleDto},
    server::model::db::SampleModel,
};

/// Status assigned to a sample created without one
pub const DEFAULT_SAMPLE_STATUS: &str = "active";

pub struct SampleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SampleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new sample, defaulting a missing status to [`DEFAULT_SAMPLE_STATUS`]
    pub async fn create(&self, sample: CreateSampleDto) -> Result<SampleModel, DbErr> {
        let now = Utc::now().naive_utc();

        let sample = entity::sample::ActiveModel {
            sample_id: ActiveValue::Set(sample.sample_id),
            name: ActiveValue::Set(sample.name),
            status: ActiveValue::Set(
                sample
                    .status
                    .unwrap_or_else(|| DEFAULT_SAMPLE_STATUS.to_string()),
            ),
            volume: ActiveValue::Set(sample.volume),
            volume_units: ActiveValue::Set(sample.volume_units),
            sample_type_id: ActiveValue::Set(sample.sample_type_id),
            notes: ActiveValue::Set(sample.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        sample.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<SampleModel>, DbErr> {
        entity::prelude::Sample::find_by_id(id).one(self.db).await
    }

    /// Applies every provided field of `changes` to `sample` and refreshes `updated_at`
    pub async fn update(
        &self,
        sample: SampleModel,
        changes: UpdateSampleDto,
    ) -> Result<SampleModel, DbErr> {
        let mut sample_am = sample.into_active_model();

        if let Some(name) = changes.name {
            sample_am.name = ActiveValue::Set(Some(name));
        }
        if let Some(status) = changes.status {
            sample_am.status = ActiveValue::Set(status);
        }
        if let Some(volume) = changes.volume {
            sample_am.volume = ActiveValue::Set(Some(volume));
        }
        if let Some(volume_units) = changes.volume_units {
            sample_am.volume_units = ActiveValue::Set(Some(volume_units));
        }
        if let Some(sample_type_id) = changes.sample_type_id {
            sample_am.sample_type_id = ActiveValue::Set(Some(sample_type_id));
        }
        if let Some(notes) = changes.notes {
            sample_am.notes = ActiveValue::Set(Some(notes));
        }
        sample_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        sample_am.update(self.db).await
    }

    /// Lists samples matching the query filters
    ///
    /// Text search matches a lowercase substring of either `sample_id` or `name`.
    pub async fn list(&self, query: &SampleListQuery) -> Result<Vec<SampleModel>, DbErr> {
        let mut select = entity::prelude::Sample::find();

        if let Some(text) = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let pattern = format!("%{}%", text.to_lowercase());

            select = select.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::sample::Column::SampleId)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::sample::Column::Name)))
                            .like(pattern),
                    ),
            );
        }

        if let Some(status) = query.status.as_deref().filter(|s| !s.trim().is_empty()) {
            select = select.filter(entity::sample::Column::Status.eq(status));
        }

        if let Some(sample_type_id) = query.sample_type_id {
            select = select.filter(entity::sample::Column::SampleTypeId.eq(sample_type_id));
        }

        select = match query.sort.unwrap_or_default() {
            SampleSort::SampleId => select.order_by_asc(entity::sample::Column::SampleId),
            SampleSort::CreatedAt => select
                .order_by_desc(entity::sample::Column::CreatedAt)
                .order_by_desc(entity::sample::Column::Id),
        };

        select.all(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Sample::find().count(self.db).await
    }

    /// Counts samples grouped by status
    pub async fn count_by_status(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::Sample::find()
            .select_only()
            .column(entity::sample::Column::Status)
            .column_as(
                Expr::expr(Func::count(Expr::col(entity::sample::Column::Id))),
                "count",
            )
            .group_by(entity::sample::Column::Status)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }
}
