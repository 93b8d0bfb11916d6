use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SampleDto {
    /// Internal record ID
    pub id: i32,
    /// Externally visible sample identifier, e.g. `S001`
    pub sample_id: String,
    pub name: Option<String>,
    pub status: String,
    pub volume: Option<f64>,
    pub volume_units: Option<String>,
    pub sample_type_id: Option<i32>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateSampleDto {
    pub sample_id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Defaults to `active` when omitted or blank
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub volume_units: Option<String>,
    #[serde(default)]
    pub sample_type_id: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update of a sample.
///
/// Omitted and `null` fields are left untouched, so a field cannot be cleared
/// through this request.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSampleDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub volume_units: Option<String>,
    #[serde(default)]
    pub sample_type_id: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Sample with its current storage location, if placed
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SampleDetailDto {
    pub sample: SampleDto,
    pub location: Option<CurrentLocationDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrentLocationDto {
    pub position_id: i32,
    pub box_id: i32,
    pub label: String,
    /// Storage path joined with `/` and suffixed with the position label,
    /// e.g. `Freezer A/Shelf 1/Rack 1/Box 1/A1`
    pub path: String,
    pub placed_at: NaiveDateTime,
}

/// The occupancy link between a sample and a position
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub id: i32,
    pub sample_id: i32,
    pub position_id: i32,
    pub placed_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaceSampleDto {
    pub position_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MoveSampleDto {
    pub to_position_id: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SampleSort {
    /// Ascending by `sample_id`
    #[default]
    SampleId,
    /// Newest first
    CreatedAt,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SampleListQuery {
    /// Case-insensitive substring of `sample_id` or `name`
    pub q: Option<String>,
    pub status: Option<String>,
    pub sample_type_id: Option<i32>,
    pub sort: Option<SampleSort>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SampleTypeDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSampleTypeDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<entity::sample::Model> for SampleDto {
    fn from(sample: entity::sample::Model) -> Self {
        Self {
            id: sample.id,
            sample_id: sample.sample_id,
            name: sample.name,
            status: sample.status,
            volume: sample.volume,
            volume_units: sample.volume_units,
            sample_type_id: sample.sample_type_id,
            notes: sample.notes,
            created_at: sample.created_at,
            updated_at: sample.updated_at,
        }
    }
}

impl From<entity::sample_location::Model> for LocationDto {
    fn from(location: entity::sample_location::Model) -> Self {
        Self {
            id: location.id,
            sample_id: location.sample_id,
            position_id: location.position_id,
            placed_at: location.placed_at,
        }
    }
}

impl From<entity::sample_type::Model> for SampleTypeDto {
    fn from(sample_type: entity::sample_type::Model) -> Self {
        Self {
            id: sample_type.id,
            name: sample_type.name,
            description: sample_type.description,
        }
    }
}
