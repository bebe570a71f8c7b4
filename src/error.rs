use std::error;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]

/**
 * Error to represent a broken tree invariant, a failed check case, or a key
 * request that cannot be satisfied.
 */
pub enum Error<K> {
    Unordered { key: K, child: K },
    StaleHeight { key: K, cached: usize, actual: usize },
    Unbalanced { key: K, balance: isize },
    MissingKey { key: K },
    LingeringKey { key: K },
    NotEmpty { remaining: usize },
    KeyRange { range: u32, count: usize },
}

impl<K: fmt::Display> fmt::Display for Error<K> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            Unordered { key, child } => write!(fmt, "child {} is on the wrong side of {}", child, key),
            StaleHeight { key, cached, actual } => write!(fmt, "node {} caches height {} but has height {}", key, cached, actual),
            Unbalanced { key, balance } => write!(fmt, "node {} has balance factor {}", key, balance),
            MissingKey { key } => write!(fmt, "inserted key {} not found", key),
            LingeringKey { key } => write!(fmt, "removed key {} still found", key),
            NotEmpty { remaining } => write!(fmt, "tree not empty: {} nodes remain", remaining),
            KeyRange { range, count } => write!(fmt, "cannot draw {} unique keys from [0, {}]", count, range),
        }
    }
}

impl<K: fmt::Debug + fmt::Display> error::Error for Error<K> {}
