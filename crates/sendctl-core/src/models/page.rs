// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Cursor pagination state attached to list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Whether another page exists after this one.
    pub has_more: bool,
    /// Cursor for the next page.
    pub next_cursor: Option<String>,
    /// Cursor for the previous page.
    pub previous_cursor: Option<String>,
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Pagination state.
    #[serde(default)]
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Builds a page with no further results.
    #[must_use]
    pub fn single(data: Vec<T>) -> Self {
        Self {
            data,
            pagination: Pagination::default(),
        }
    }

    /// Returns true if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::single(Vec::new())
    }
}
