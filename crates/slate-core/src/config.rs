//! Stream layout configuration.

use std::error::Error;
use std::fmt;

/// Layout parameters for the binary stream format.
///
/// A streamed object is a little-endian `u32` length prefix, the raw bytes,
/// then zero padding up to the next multiple of `align`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    /// Alignment unit in bytes. Must be a non-zero power of two.
    ///
    /// Default: 4, the alignment of the `u32` length prefix.
    pub align: usize,
}

impl StreamConfig {
    /// Default alignment unit: the size of the length prefix.
    pub const DEFAULT_ALIGN: usize = std::mem::size_of::<u32>();

    /// Width of the length prefix in bytes.
    pub const PREFIX_LEN: usize = std::mem::size_of::<u32>();

    /// Create a config with the given alignment unit.
    pub fn new(align: usize) -> Self {
        Self { align }
    }

    /// Check that the alignment unit is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.align.is_power_of_two() {
            return Err(ConfigError {
                reason: format!("alignment {} is not a non-zero power of two", self.align),
            });
        }
        Ok(())
    }

    /// `len` rounded up to the alignment unit.
    ///
    /// A zero `align`, or a rounded size that would overflow, leaves `len`
    /// unpadded. Callers that emit bytes reject such configs through
    /// [`validate`](StreamConfig::validate) first.
    pub fn padded_len(&self, len: usize) -> usize {
        len.checked_next_multiple_of(self.align).unwrap_or(len)
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ALIGN)
    }
}

/// A [`StreamConfig`] failed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    /// Human-readable description of the problem.
    pub reason: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid stream config: {}", self.reason)
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_aligns_to_prefix_width() {
        let config = StreamConfig::default();
        assert_eq!(config.align, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn padded_len_rounds_up() {
        let config = StreamConfig::default();
        assert_eq!(config.padded_len(0), 0);
        assert_eq!(config.padded_len(1), 4);
        assert_eq!(config.padded_len(4), 4);
        assert_eq!(config.padded_len(9), 12);
    }

    #[test]
    fn unit_alignment_never_pads() {
        let config = StreamConfig::new(1);
        assert_eq!(config.padded_len(7), 7);
    }

    #[test]
    fn unusable_alignment_does_not_overflow() {
        assert_eq!(StreamConfig::new(0).padded_len(5), 5);
        assert_eq!(StreamConfig::new(6).padded_len(7), 12);
        assert_eq!(StreamConfig::default().padded_len(usize::MAX), usize::MAX);
    }

    #[test]
    fn zero_and_odd_alignments_rejected() {
        assert!(StreamConfig::new(0).validate().is_err());
        let err = StreamConfig::new(6).validate().unwrap_err();
        assert!(err.to_string().contains("alignment 6"));
    }
}
