//! Pagination planning.
//!
//! Partitions a sorted document sequence into a fixed number of list
//! pages. Chunk sizes are `floor(len / n)` with the remainder folded into
//! the last chunk, so every document lands on exactly one page.

use anyhow::{Result, bail};

/// Split `items` into exactly `n` chunks.
///
/// For all `n >= 1`: the chunk lengths sum to `items.len()`; all chunks
/// except the last have `floor(len / n)` items. When `n` exceeds the item
/// count, trailing chunks are empty. `n == 0` is a configuration error.
pub fn split<T>(items: &[T], n: usize) -> Result<Vec<&[T]>> {
    if n == 0 {
        bail!("number of pages must be at least 1");
    }

    let chunk_size = items.len() / n;
    let mut chunks = Vec::with_capacity(n);

    for i in 0..n {
        let start = i * chunk_size;
        let end = if i < n - 1 {
            (i + 1) * chunk_size
        } else {
            items.len()
        };
        chunks.push(&items[start..end]);
    }

    Ok(chunks)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_single_page_takes_all() {
        let items = [1, 2, 3, 4, 5];
        let chunks = split(&items, 1).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_split_even() {
        let items = [1, 2, 3, 4, 5, 6];
        let chunks = split(&items, 3).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], &[1, 2]);
        assert_eq!(chunks[1], &[3, 4]);
        assert_eq!(chunks[2], &[5, 6]);
    }

    #[test]
    fn test_split_remainder_in_last_chunk() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        let chunks = split(&items, 3).unwrap();

        assert_eq!(chunks[0], &[1, 2]);
        assert_eq!(chunks[1], &[3, 4]);
        assert_eq!(chunks[2], &[5, 6, 7]);
    }

    #[test]
    fn test_split_more_pages_than_items() {
        let items = [1, 2];
        let chunks = split(&items, 5).unwrap();

        assert_eq!(chunks.len(), 5);
        // floor(2/5) == 0: only the last chunk carries anything
        assert!(chunks[..4].iter().all(|c| c.is_empty()));
        assert_eq!(chunks[4], &[1, 2]);
    }

    #[test]
    fn test_split_empty_input() {
        let items: [i32; 0] = [];
        let chunks = split(&items, 3).unwrap();

        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_split_zero_pages_is_error() {
        let items = [1, 2, 3];
        assert!(split(&items, 0).is_err());
    }

    #[test]
    fn test_split_coverage_property() {
        // For a sweep of (m, n), exactly n chunks whose sizes sum to m.
        for m in 0..20usize {
            let items: Vec<usize> = (0..m).collect();
            for n in 1..8usize {
                let chunks = split(&items, n).unwrap();
                assert_eq!(chunks.len(), n, "m={m} n={n}");
                let total: usize = chunks.iter().map(|c| c.len()).sum();
                assert_eq!(total, m, "m={m} n={n}");

                // All but the last chunk have floor(m/n) items
                for chunk in &chunks[..n - 1] {
                    assert_eq!(chunk.len(), m / n, "m={m} n={n}");
                }
            }
        }
    }

    #[test]
    fn test_split_preserves_order() {
        let items = [10, 20, 30, 40, 50];
        let chunks = split(&items, 2).unwrap();
        let flat: Vec<_> = chunks.concat();

        assert_eq!(flat, vec![10, 20, 30, 40, 50]);
    }
}
