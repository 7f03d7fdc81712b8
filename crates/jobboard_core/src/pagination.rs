/// Maximum number of directly selectable page numbers.
pub const PAGE_WINDOW: usize = 7;

pub fn total_pages(total: u64, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size as u64) as usize
}

/// Zero-based page numbers offered for direct selection around `current`.
pub fn page_window(total_pages: usize, current: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW {
        return (0..total_pages).collect();
    }
    let half = PAGE_WINDOW / 2;
    let start = if current < half {
        0
    } else if current > total_pages - (half + 1) {
        total_pages - PAGE_WINDOW
    } else {
        current - half
    };
    (start..start + PAGE_WINDOW).collect()
}

/// Count of jobs up to and including `page`, capped at `total`.
pub fn showing_through(page: usize, page_size: usize, total: u64) -> u64 {
    ((page as u64 + 1) * page_size as u64).min(total)
}

/// How many jobs the next page would add; zero on the last page.
pub fn next_page_count(page: usize, page_size: usize, total: u64) -> u64 {
    total
        .saturating_sub((page as u64 + 1) * page_size as u64)
        .min(page_size as u64)
}
