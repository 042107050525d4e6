// 📊 Summary statistics over extracted samples

use anyhow::{bail, Result};

/// Standard statistical median.
///
/// Odd-length input returns the middle sorted value; even-length input
/// returns the average of the two middle values. The caller's slice is not
/// reordered - extraction order is an observable property upstream.
pub fn median(samples: &[u64]) -> Result<f64> {
    if samples.is_empty() {
        bail!("Cannot take the median of an empty sample list");
    }

    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid] as f64)
    } else {
        Ok((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_length() {
        assert_eq!(median(&[5, 1, 3]).unwrap(), 3.0);
        assert_eq!(median(&[42]).unwrap(), 42.0);
    }

    #[test]
    fn test_median_even_length() {
        assert_eq!(median(&[4, 1, 3, 2]).unwrap(), 2.5);
        assert_eq!(median(&[10, 20]).unwrap(), 15.0);
    }

    #[test]
    fn test_median_empty_is_an_error() {
        assert!(median(&[]).is_err());
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let samples = vec![9, 2, 7];
        let _ = median(&samples).unwrap();
        assert_eq!(samples, vec![9, 2, 7]);
    }
}
