use sea_orm::DatabaseConnection;

use crate::{
    model::sample::{CreateSampleTypeDto, SampleTypeDto},
    server::{
        data::{is_unique_violation, sample_type::SampleTypeRepository},
        error::{sample::SampleError, Error},
    },
};

pub struct SampleTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SampleTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a sample type with a trimmed, non-empty, unique name
    pub async fn create(&self, sample_type: CreateSampleTypeDto) -> Result<SampleTypeDto, Error> {
        let name = sample_type.name.trim();
        if name.is_empty() {
            return Err(SampleError::EmptySampleTypeName.into());
        }

        let created = SampleTypeRepository::new(self.db)
            .create(name, sample_type.description)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    SampleError::DuplicateSampleTypeName(name.to_string()).into()
                } else {
                    Error::from(err)
                }
            })?;

        Ok(created.into())
    }

    pub async fn list(&self) -> Result<Vec<SampleTypeDto>, Error> {
        let sample_types = SampleTypeRepository::new(self.db).get_all().await?;

        Ok(sample_types.into_iter().map(SampleTypeDto::from).collect())
    }
}
