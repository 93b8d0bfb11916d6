use sea_orm::DatabaseConnection;

use crate::{
    model::event::EventDto,
    server::{
        data::{event::EventRepository, sample::SampleRepository},
        error::{sample::SampleError, Error},
    },
};

/// Number of events returned when no limit is requested
pub const DEFAULT_EVENT_LIMIT: u64 = 50;
/// Upper bound on the number of events returned by a single request
pub const MAX_EVENT_LIMIT: u64 = 500;

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Most recent events first, at most [`MAX_EVENT_LIMIT`]
    pub async fn recent(&self, limit: Option<u64>) -> Result<Vec<EventDto>, Error> {
        let limit = limit.unwrap_or(DEFAULT_EVENT_LIMIT).min(MAX_EVENT_LIMIT);

        let events = EventRepository::new(self.db).get_recent(limit).await?;

        Ok(events.into_iter().map(EventDto::from).collect())
    }

    /// Events of a sample, most recent first
    ///
    /// # Returns
    /// - `Ok(Vec<EventDto>)` - Events of the sample, possibly empty
    /// - `Err(Error::SampleError(SampleError::NotFound))` - Sample does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn for_sample(&self, sample_id: i32) -> Result<Vec<EventDto>, Error> {
        if SampleRepository::new(self.db)
            .get_by_id(sample_id)
            .await?
            .is_none()
        {
            return Err(SampleError::NotFound(sample_id).into());
        }

        let events = EventRepository::new(self.db)
            .get_by_sample_id(sample_id)
            .await?;

        Ok(events.into_iter().map(EventDto::from).collect())
    }
}
