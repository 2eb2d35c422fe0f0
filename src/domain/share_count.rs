//! `ShareCount` newtype for share reconstruction

use crate::error::RecoverError;

/// Number of shares a document declares (n >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareCount(usize);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: usize = 1;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`RecoverError::InvalidShareCount`] if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recon::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, RecoverError> {
        if value < Self::MIN {
            return Err(RecoverError::InvalidShareCount { n: value });
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
