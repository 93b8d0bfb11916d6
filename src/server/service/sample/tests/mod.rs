use entity::sea_orm_active_enums::EventType;
use freezer_test_utils::prelude::*;

use crate::{
    model::sample::{CreateSampleDto, SampleListQuery, UpdateSampleDto},
    server::{
        data::event::EventRepository,
        error::{sample::SampleError, Error},
        service::sample::SampleService,
    },
};
