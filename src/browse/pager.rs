// 分页计算
// 页码从0开始，页码按钮最多显示7个并以当前页为中心

pub const MAX_PAGE_BUTTONS: u32 = 7;

pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size as u64) as u32
}

pub fn page_offset(page: u32, page_size: u32) -> u64 {
    page as u64 * page_size as u64
}

pub fn has_prev(page: u32) -> bool {
    page > 0
}

pub fn has_next(page: u32, total_pages: u32) -> bool {
    page + 1 < total_pages
}

// 需要显示的页码按钮
pub fn page_window(page: u32, total_pages: u32) -> Vec<u32> {
    let count = total_pages.min(MAX_PAGE_BUTTONS);
    let half = MAX_PAGE_BUTTONS / 2;

    let start = if total_pages <= MAX_PAGE_BUTTONS || page <= half {
        0
    } else if page + half >= total_pages {
        total_pages - MAX_PAGE_BUTTONS
    } else {
        page - half
    };

    (start..start + count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(1025, 24), 43);
        assert_eq!(total_pages(24, 24), 1);
        assert_eq!(total_pages(0, 24), 0);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_offset_and_navigation() {
        assert_eq!(page_offset(2, 24), 48);
        assert!(!has_prev(0));
        assert!(has_prev(1));
        assert!(has_next(0, 2));
        assert!(!has_next(1, 2));
        assert!(!has_next(0, 0));
    }

    #[test]
    fn test_page_window_small() {
        assert_eq!(page_window(0, 3), vec![0, 1, 2]);
        assert!(page_window(0, 0).is_empty());
    }

    #[test]
    fn test_page_window_clamps_at_start() {
        assert_eq!(page_window(0, 43), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(page_window(3, 43), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_page_window_centres_current_page() {
        assert_eq!(page_window(4, 43), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(page_window(20, 43), vec![17, 18, 19, 20, 21, 22, 23]);
    }

    #[test]
    fn test_page_window_clamps_at_end() {
        assert_eq!(page_window(42, 43), vec![36, 37, 38, 39, 40, 41, 42]);
        assert_eq!(page_window(39, 43), vec![36, 37, 38, 39, 40, 41, 42]);
        assert_eq!(page_window(38, 43), vec![35, 36, 37, 38, 39, 40, 41]);
        assert_eq!(page_window(37, 43), vec![34, 35, 36, 37, 38, 39, 40]);
    }
}
