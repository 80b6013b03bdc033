//! Page bounds derived from the server-reported total.
//!
//! Navigation outside `[1, last_page]` is rejected rather than clamped; the
//! guards below are what callers check before moving.

/// Direction of a relative page move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Previous,
    Next,
}

/// `max(1, ceil(total / page_size))`. A zero page size is treated as one.
pub fn last_page(total_count: u64, page_size: u32) -> u32 {
    let size = u64::from(page_size.max(1));
    let pages = total_count.div_ceil(size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

pub fn can_go_previous(page: u32) -> bool {
    page > 1
}

pub fn can_go_next(page: u32, total_count: u64, page_size: u32) -> bool {
    page < last_page(total_count, page_size)
}

/// Whether `page` lies inside `[1, last_page]`.
pub fn is_in_range(page: u32, total_count: u64, page_size: u32) -> bool {
    page >= 1 && page <= last_page(total_count, page_size)
}

/// Resolves a relative move into a target page inside `[1, last_page]`, or
/// `None` when the move is rejected.
///
/// When a newer total has shrunk the result set so that `page` is already
/// past `last_page`, `Previous` moves to `last_page` itself; stepping one page
/// back would still land outside the range.
pub fn resolve_move(page: u32, total_count: u64, page_size: u32, step: PageMove) -> Option<u32> {
    let last = last_page(total_count, page_size);
    let target = match step {
        PageMove::Previous if page > last => last,
        PageMove::Previous if can_go_previous(page) => page - 1,
        PageMove::Next if can_go_next(page, total_count, page_size) => page + 1,
        PageMove::Previous | PageMove::Next => return None,
    };
    is_in_range(target, total_count, page_size).then_some(target)
}
