pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::storage::StorageHierarchy, TestBuilder, TestContext, TestError,
    };
}
