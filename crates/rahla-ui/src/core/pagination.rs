//! Page-number strip computation for the pagination control.

/// One slot in the pagination strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number.
    Page(u32),
    /// Collapsed range marker.
    Ellipsis,
}

/// Pages shown without collapsing.
const SMALL_TOTAL: u32 = 3;
/// Largest gap between shown pages that is filled in rather than collapsed.
const MAX_GAP: u32 = 2;

/// Compute the visible page slots.
///
/// Up to three pages are all shown. Beyond that the first and last pages are
/// always present, the current page is shown when it is neither, and the
/// range between shown pages collapses to an ellipsis when the gap exceeds two.
#[must_use]
pub fn visible_pages(current: u32, total: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    if total <= SMALL_TOTAL {
        return (1..=total).map(PageItem::Page).collect();
    }
    let current = current.clamp(1, total);
    let mut anchors = vec![1];
    if current != 1 && current != total {
        anchors.push(current);
    }
    anchors.push(total);

    let mut items = vec![PageItem::Page(1)];
    for window in anchors.windows(2) {
        let (from, to) = (window[0], window[1]);
        if to - from > MAX_GAP {
            items.push(PageItem::Ellipsis);
        } else {
            items.extend((from + 1..to).map(PageItem::Page));
        }
        items.push(PageItem::Page(to));
    }
    items
}

/// Whether a previous page exists.
#[must_use]
pub const fn has_prev(current: u32) -> bool {
    current > 1
}

/// Whether a next page exists.
#[must_use]
pub const fn has_next(current: u32, total: u32) -> bool {
    current < total
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn small_totals_show_every_page() {
        assert_eq!(visible_pages(1, 0), Vec::new());
        assert_eq!(visible_pages(1, 1), vec![Page(1)]);
        assert_eq!(visible_pages(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn middle_page_collapses_both_sides() {
        assert_eq!(
            visible_pages(5, 10),
            vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn first_and_last_are_not_repeated() {
        assert_eq!(visible_pages(1, 10), vec![Page(1), Ellipsis, Page(10)]);
        assert_eq!(visible_pages(10, 10), vec![Page(1), Ellipsis, Page(10)]);
    }

    #[test]
    fn short_gaps_are_filled_in() {
        assert_eq!(
            visible_pages(3, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
        assert_eq!(
            visible_pages(8, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            visible_pages(2, 4),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(visible_pages(40, 5), vec![Page(1), Ellipsis, Page(5)]);
        assert_eq!(visible_pages(0, 5), vec![Page(1), Ellipsis, Page(5)]);
    }

    #[test]
    fn prev_next_bounds() {
        assert!(!has_prev(1));
        assert!(has_prev(2));
        assert!(has_next(2, 3));
        assert!(!has_next(3, 3));
        assert!(!has_next(4, 3));
    }
}
