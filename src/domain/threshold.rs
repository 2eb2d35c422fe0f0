//! Threshold newtype for share reconstruction

use crate::error::RecoverError;

/// Threshold k: the number of shares interpolated to recover the secret
///
/// Invariant: threshold >= 2 (enforced at construction)
/// A single point does not determine f(0) unless it sits at x = 0, which is never a valid share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(usize);

impl Threshold {
    /// Smallest threshold that determines a polynomial through distinct nonzero points
    pub const MIN: usize = 2;

    /// Creates a new threshold, returning an error if value < 2
    ///
    /// # Errors
    /// Returns [`RecoverError::InvalidThreshold`] if the threshold is less than 2
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recon::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// // Invalid: threshold must be at least 2
    /// assert!(Threshold::new(1).is_err());
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, RecoverError> {
        if value < Self::MIN {
            return Err(RecoverError::InvalidThreshold { k: value });
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
