//! Fixed-size paging over ordered results.

use serde::Serialize;

use crate::error::ValidationError;

/// A validated page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    index: usize,
    size: usize,
}

impl PageRequest {
    /// Validates caller input: `index >= 0`, `size >= 1`.
    pub fn new(index: i64, size: i64) -> Result<Self, ValidationError> {
        if size < 1 {
            return Err(ValidationError::PageSize(size));
        }
        if index < 0 {
            return Err(ValidationError::PageIndex(index));
        }
        Ok(PageRequest {
            index: usize::try_from(index).unwrap_or(usize::MAX),
            size: usize::try_from(size).unwrap_or(usize::MAX),
        })
    }

    /// First page of the given size.
    pub fn first(size: i64) -> Result<Self, ValidationError> {
        Self::new(0, size)
    }

    /// Zero-based page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Records per page.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Offset of the first record on this page.
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }

    /// The following page.
    pub fn next(&self) -> Self {
        PageRequest {
            index: self.index.saturating_add(1),
            size: self.size,
        }
    }

    /// Slices `items` into this page, counting every item.
    ///
    /// Only items inside the window are kept; the rest are walked for the
    /// total.
    pub fn slice<I: IntoIterator>(&self, items: I) -> ResultPage<I::Item> {
        let start = self.offset();
        let end = start.saturating_add(self.size);
        let mut page = Vec::with_capacity(self.size.min(64));
        let mut total_count = 0usize;
        for (position, item) in items.into_iter().enumerate() {
            if (start..end).contains(&position) {
                page.push(item);
            }
            total_count += 1;
        }
        ResultPage {
            items: page,
            page_index: self.index,
            page_size: self.size,
            total_count,
        }
    }
}

/// One page of results plus paging metadata.
///
/// `total_count` is the length of the whole filtered sequence, so an
/// out-of-range page is empty but still reports how many pages exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPage<T> {
    /// Records on this page, in sequence order.
    pub items: Vec<T>,
    /// Zero-based page index.
    pub page_index: usize,
    /// Requested page size.
    pub page_size: usize,
    /// Length of the full filtered sequence.
    pub total_count: usize,
}

impl<T> ResultPage<T> {
    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total pages: `ceil(total_count / page_size)`.
    pub fn page_count(&self) -> usize {
        self.total_count.div_ceil(self.page_size.max(1))
    }

    /// Returns `true` if a later page has records.
    pub fn has_next(&self) -> bool {
        self.page_index.saturating_add(1) < self.page_count()
    }

    /// Returns `true` if this is not the first page.
    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Returns `true` if the requested page lies past the last record.
    pub fn is_out_of_range(&self) -> bool {
        self.page_index >= self.page_count() && self.page_index > 0
    }

    /// The nearest page index that holds records (0 when there are none).
    pub fn clamped_index(&self) -> usize {
        self.page_index.min(self.page_count().saturating_sub(1))
    }

    /// Iterates the records on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Transforms the records, keeping the metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> ResultPage<U> {
        ResultPage {
            items: self.items.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}

impl<'p, T> IntoIterator for &'p ResultPage<T> {
    type Item = &'p T;
    type IntoIter = std::slice::Iter<'p, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Validates the page position and slices `items`.
///
/// Invalid input is rejected before anything is materialized.
pub fn paginate<I: IntoIterator>(
    items: I,
    page_index: i64,
    page_size: i64,
) -> Result<ResultPage<I::Item>, ValidationError> {
    let request = PageRequest::new(page_index, page_size)?;
    Ok(request.slice(items))
}
