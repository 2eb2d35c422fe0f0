//! Configuration for a reconstruction run

use super::{ShareCount, Threshold};

/// Threshold and declared share count of a document
///
/// The declared count is advisory: a document may hold more or fewer shares than
/// it claims, and k may even exceed n. Only the shares actually decoded decide
/// whether reconstruction can proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl RecoveryConfig {
    /// Creates a new recovery configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recon::domain::{RecoveryConfig, Threshold, ShareCount};
    ///
    /// let config = RecoveryConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap()
    /// );
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 5);
    /// assert!(!config.threshold_exceeds_share_count());
    /// ```
    #[must_use]
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Self {
        Self {
            threshold,
            share_count,
        }
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }

    /// Returns a copy with a different threshold
    #[must_use]
    pub fn with_threshold(self, threshold: Threshold) -> Self {
        Self { threshold, ..self }
    }

    /// Whether more shares are required than the document declares
    #[must_use]
    pub fn threshold_exceeds_share_count(&self) -> bool {
        *self.threshold > *self.share_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_override_keeps_share_count() {
        let config = RecoveryConfig::new(Threshold::new(2).unwrap(), ShareCount::new(3).unwrap());
        let overridden = config.with_threshold(Threshold::new(5).unwrap());

        assert_eq!(*overridden.threshold(), 5);
        assert_eq!(*overridden.share_count(), 3);
        assert!(overridden.threshold_exceeds_share_count());
    }
}
