// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::result_record::ResultRecord;

/// 结果排序规则
///
/// 除 `Relevance` 外均为降序；排序稳定，键相同的记录保持原始获取顺序。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortCriteria {
    /// Keep the order the upstream services returned.
    #[default]
    Relevance,
    Date,
    Upvotes,
    Comments,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown sort criteria: {0}")]
pub struct ParseSortCriteriaError(pub String);

impl SortCriteria {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Date => "date",
            Self::Upvotes => "upvotes",
            Self::Comments => "comments",
        }
    }

    /// Sort records in place.
    pub fn apply(&self, records: &mut [ResultRecord]) {
        // sort_by_key is stable, ties keep fetch order
        match self {
            Self::Relevance => {}
            Self::Date => records.sort_by_key(|r| Reverse(r.creation_date)),
            Self::Upvotes => records.sort_by_key(|r| Reverse(r.upvotes)),
            Self::Comments => records.sort_by_key(|r| Reverse(r.comment_count)),
        }
    }

    /// Return a sorted copy, leaving the input untouched.
    pub fn sorted(&self, records: &[ResultRecord]) -> Vec<ResultRecord> {
        let mut sorted = records.to_vec();
        self.apply(&mut sorted);
        sorted
    }
}

impl FromStr for SortCriteria {
    type Err = ParseSortCriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "date" => Ok(Self::Date),
            "upvotes" => Ok(Self::Upvotes),
            "comments" => Ok(Self::Comments),
            _ => Err(ParseSortCriteriaError(s.to_string())),
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
