//! Centered scrolling window over a selectable list.

/// First visible index for a list of `total` items shown `height` at a time.
///
/// The selection is kept centered where possible; the window never runs past
/// either end of the list.
pub fn viewport_start(selected: usize, total: usize, height: usize) -> usize {
    let max_start = total.saturating_sub(height);
    selected.saturating_sub(height / 2).min(max_start)
}

/// Index range of the visible window.
pub fn visible_range(selected: usize, total: usize, height: usize) -> std::ops::Range<usize> {
    let start = viewport_start(selected, total, height);
    start..(start + height).min(total)
}

/// The visible slice of `items`.
pub fn visible_slice<T>(items: &[T], selected: usize, height: usize) -> &[T] {
    &items[visible_range(selected, items.len(), height)]
}
