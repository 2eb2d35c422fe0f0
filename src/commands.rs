use anyhow::{Context, Result};
use num_bigint::BigInt;
use tracing::{debug, info, warn};

use crate::codec;
use crate::document::ShareDocument;
use crate::domain::{Point, Threshold};
use crate::error::RecoverError;
use crate::interpolate::{interpolate_at, interpolate_at_zero};

/// Knobs for [`recover_secret`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoverOptions {
    /// Interpolate this many shares instead of the document's `k`
    pub threshold: Option<Threshold>,
    /// Check that every share left out of the interpolation lies on the polynomial
    pub verify: bool,
}

/// Outcome of a successful reconstruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    /// The constant term f(0)
    pub secret: BigInt,
    /// The shares that were interpolated, in ascending x order
    pub used: Vec<Point>,
    /// x-coordinates of the extra shares checked against the polynomial
    pub verified: Vec<BigInt>,
}

/// Recover the secret from a share document
///
/// Shares are decoded, sorted by x-coordinate, and the smallest `k` are interpolated
/// at zero. With `options.verify` set, every remaining share must lie on the same
/// polynomial, which holds exactly when every k-subset reconstructs the same secret.
///
/// # Errors
/// Returns an error if the threshold descriptor is invalid, a share fails to decode,
/// too few shares are present, the selected shares are inconsistent, or an extra
/// share fails verification. Core failures carry a [`RecoverError`] that callers can
/// recover with `downcast_ref`.
pub fn recover_secret(document: &ShareDocument, options: RecoverOptions) -> Result<Reconstruction> {
    let mut config = document.config().context("Invalid threshold descriptor")?;
    if let Some(threshold) = options.threshold {
        config = config.with_threshold(threshold);
    }
    let threshold = config.threshold();
    if config.threshold_exceeds_share_count() {
        warn!(
            k = *threshold,
            n = *config.share_count(),
            "threshold exceeds the declared share count"
        );
    }

    let triples: Vec<_> = document.triples().collect();
    let points = codec::decode_points(
        triples
            .iter()
            .map(|(id, base, value)| (*id, base.as_str(), *value)),
    )
    .context("Failed to decode shares")?;

    for point in &points {
        debug!(x = %point.x, y = %point.y, "decoded share");
    }

    if points.len() != *config.share_count() {
        warn!(
            expected = *config.share_count(),
            found = points.len(),
            "document declares a different number of shares than it contains"
        );
    }

    // decode_points sorts by x, so the prefix holds the smallest k x-coordinates
    let secret = interpolate_at_zero(&points, threshold).context("Failed to reconstruct secret")?;
    let (used, extra) = points.split_at(*threshold);
    info!(
        k = *threshold,
        xs = ?used.iter().map(|p| p.x.to_string()).collect::<Vec<_>>(),
        "reconstructed secret"
    );

    let verified = if options.verify {
        verify_extra_shares(used, extra).context("Share verification failed")?
    } else {
        Vec::new()
    };

    Ok(Reconstruction {
        secret,
        used: used.to_vec(),
        verified,
    })
}

/// Checks each of `extra` against the polynomial through `used`
fn verify_extra_shares(used: &[Point], extra: &[Point]) -> Result<Vec<BigInt>, RecoverError> {
    let mut verified = Vec::with_capacity(extra.len());
    for point in extra {
        let expected = interpolate_at(used, &point.x)?;
        if !expected.equals_integer(&point.y) {
            return Err(RecoverError::ShareOffPolynomial { x: point.x.clone() });
        }
        debug!(x = %point.x, "share verified");
        verified.push(point.x.clone());
    }
    Ok(verified)
}

/// Decode a single digit string given its textual base
///
/// # Errors
/// Returns an error if the base or the digit string is malformed
pub fn decode_value(base: &str, value: &str) -> Result<BigInt> {
    let radix = codec::parse_base(base).with_context(|| format!("Invalid base {base:?}"))?;
    codec::decode_share(radix, value).with_context(|| format!("Failed to decode {value:?}"))
}
