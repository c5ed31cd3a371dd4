//! # Pagination
//!
//! Page arithmetic shared by every resource actor. A [`PageRequest`] is what callers send
//! (possibly non-positive values straight off the wire); [`PageRequest::normalize`] coerces it
//! into [`PageBounds`], and [`paginate`] slices an ordered snapshot into a [`Page`].
//!
//! Navigation fields are computed from the totals:
//! - `has_next` holds while `start_page < total_pages`, and `next_page` is `start_page + 1`;
//! - `has_previous` holds for any page after the first of a non-empty collection, and
//!   `previous_page` points at `start_page - 1`, or at the last real page when the request
//!   went past the end.
//!
//! Page numbers are `0` whenever the matching flag is `false`.

pub const DEFAULT_START_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Largest page size the request validators accept. The engine itself does not clamp.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A caller's list request, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub start_page: i32,
    pub page_size: i32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            start_page: DEFAULT_START_PAGE as i32,
            page_size: DEFAULT_PAGE_SIZE as i32,
        }
    }
}

impl PageRequest {
    pub fn new(start_page: i32, page_size: i32) -> Self {
        Self {
            start_page,
            page_size,
        }
    }

    /// Non-positive page numbers become `1`, non-positive sizes become `10`.
    pub fn normalize(self) -> PageBounds {
        let start_page = if self.start_page > 0 {
            self.start_page as u32
        } else {
            DEFAULT_START_PAGE
        };
        let page_size = if self.page_size > 0 {
            self.page_size as u32
        } else {
            DEFAULT_PAGE_SIZE
        };
        PageBounds {
            start_page,
            page_size,
        }
    }
}

/// Normalized bounds: both fields are at least `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub start_page: u32,
    pub page_size: u32,
}

/// One page of a collection plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_next: bool,
    pub has_previous: bool,
    pub next_page: u32,
    pub previous_page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// Converts the items while keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            has_next: self.has_next,
            has_previous: self.has_previous,
            next_page: self.next_page,
            previous_page: self.previous_page,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
        }
    }
}

/// Slices `items` (already in enumeration order, `total` long) into the page `bounds` asks for.
pub fn paginate<T, I>(items: I, total: usize, bounds: PageBounds) -> Page<T>
where
    I: IntoIterator<Item = T>,
{
    let start_page = bounds.start_page.max(1);
    let page_size = bounds.page_size.max(1);

    let total_elements = total as u64;
    let total_pages = total_elements.div_ceil(u64::from(page_size));
    let total_pages = u32::try_from(total_pages).unwrap_or(u32::MAX);

    let skip = u64::from(start_page - 1).saturating_mul(u64::from(page_size));
    let items: Vec<T> = if skip >= total_elements {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(skip as usize)
            .take(page_size as usize)
            .collect()
    };

    let has_next = start_page < total_pages;
    let has_previous = start_page > 1 && total_pages > 0;

    Page {
        items,
        has_next,
        has_previous,
        next_page: if has_next { start_page + 1 } else { 0 },
        previous_page: if has_previous {
            (start_page - 1).min(total_pages)
        } else {
            0
        },
        total_pages,
        total_elements,
    }
}
