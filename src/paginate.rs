//! Fixed-size pagination for printing result sequences.

/// One page of a paginated sequence.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a, T> {
    /// Zero-based page index.
    pub number: usize,
    pub items: &'a [T],
}

/// Partitions `items` into consecutive pages of `page_size` entries.
///
/// The last page may be shorter. A page size of zero yields no pages.
pub fn paginate<T>(items: &[T], page_size: usize) -> impl Iterator<Item = Page<'_, T>> {
    let chunks = if page_size == 0 {
        items[..0].chunks(1)
    } else {
        items.chunks(page_size)
    };
    chunks
        .enumerate()
        .map(|(number, items)| Page { number, items })
}
