//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted inputs, verifying status codes,
//! response bodies and the session handling of each endpoint.

mod dashboard;
mod event;
mod sample_type;
mod storage;

use freezer_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};
