use thiserror::Error;

/// Errors returned by cache construction and by the must-exist accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// `at`/`lookup` was called with a key that is not cached.
    #[error("key not found in cache")]
    KeyNotFound,
    /// The cache was configured to hold zero entries.
    #[error("invalid cache capacity {max_size}: a cache must hold at least one entry")]
    InvalidCapacity { max_size: usize },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CacheError::KeyNotFound.to_string(), "key not found in cache");
        let err = CacheError::InvalidCapacity { max_size: 0 };
        assert!(err.to_string().contains("capacity 0"));
    }
}
