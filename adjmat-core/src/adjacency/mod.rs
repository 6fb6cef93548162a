//! Adjacency matrix construction.
//!
//! Two independent output builders over the same normalized edges:
//! a dense `n x n` grid and a CSR sparse matrix.

pub mod dense;
pub mod sparse;

/// Whether `count` values of `T` fit in a single allocation.
pub(crate) fn fits_allocation<T>(count: usize) -> bool {
    count
        .checked_mul(std::mem::size_of::<T>())
        .is_some_and(|bytes| bytes <= isize::MAX as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_allocation() {
        assert!(fits_allocation::<f64>(0));
        assert!(fits_allocation::<f64>(1 << 20));
        assert!(!fits_allocation::<f64>(usize::MAX / 4));
        assert!(!fits_allocation::<u8>(usize::MAX));
    }
}
