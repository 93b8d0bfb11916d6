use entity::sea_orm_active_enums::{EventType, StorageNodeType};
use freezer_test_utils::prelude::*;

use crate::{
    model::storage::{CreateStorageNodeDto, SizeBoxDto},
    server::{
        data::{event::EventRepository, storage_position::StoragePositionRepository},
        error::{storage::StorageError, Error},
        service::storage::StorageService,
    },
};


fn node_dto(name: &str, node_type: &str, parent_id: Option<i32>) -> CreateStorageNodeDto {
    CreateStorageNodeDto {
        name: name.to_string(),
        node_type: node_type.to_string(),
        parent_id,
    }
}
