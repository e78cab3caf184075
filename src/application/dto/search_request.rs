// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// `GET /search` query parameters
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct SearchQueryDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Query cannot be empty"))]
    pub query: String,
    /// One of `relevance`, `date`, `upvotes`, `comments`
    pub sort: Option<String>,
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
