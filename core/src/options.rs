//! Options for operations that buffer a sequence before continuing.

/// Limits applied when a sequence is drained into a buffer.
///
/// The default is unbounded, which matches what `to_vec`, `sort` and
/// `cycle` do. Set `max_len` when the upstream may be very long or
/// infinite (for example, a mapped cycle) so that materialization fails with
/// [`Error::BufferLimit`](crate::Error::BufferLimit) instead of growing
/// without end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Maximum number of elements that may be buffered. `None` means no limit.
    pub max_len: Option<usize>,
}

impl MaterializeOptions {
    /// Options with a fixed ceiling on buffered elements.
    pub fn bounded(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
        }
    }

    /// Apply every field that is set in `other`.
    pub fn override_with(&mut self, other: &MaterializeOptionsOverride) {
        if let Some(max_len) = other.max_len {
            self.max_len = max_len;
        }
    }

    /// Return a copy with `other` applied.
    pub fn merged(&self, other: &MaterializeOptionsOverride) -> Self {
        let mut merged = self.clone();
        merged.override_with(other);
        merged
    }

    /// Whether `len` buffered elements are still within the limit.
    #[inline]
    pub(crate) fn allows(&self, len: usize) -> bool {
        self.max_len.is_none_or(|max| len <= max)
    }
}

/// Partial [`MaterializeOptions`], used to override a set of defaults.
///
/// `Some(None)` in `max_len` explicitly removes a limit, while `None` keeps
/// whatever the defaults say.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeOptionsOverride {
    pub max_len: Option<Option<usize>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let options = MaterializeOptions::default();
        assert_eq!(options.max_len, None);
        assert!(options.allows(usize::MAX));
    }

    #[test]
    fn test_bounded_allows_up_to_limit() {
        let options = MaterializeOptions::bounded(2);
        assert!(options.allows(0));
        assert!(options.allows(2));
        assert!(!options.allows(3));
    }

    #[test]
    fn test_override() {
        let defaults = MaterializeOptions::bounded(10);

        let keep = defaults.merged(&MaterializeOptionsOverride::default());
        assert_eq!(keep.max_len, Some(10));

        let tighter = defaults.merged(&MaterializeOptionsOverride {
            max_len: Some(Some(3)),
        });
        assert_eq!(tighter.max_len, Some(3));

        let unbounded = defaults.merged(&MaterializeOptionsOverride {
            max_len: Some(None),
        });
        assert_eq!(unbounded.max_len, None);
    }
}
