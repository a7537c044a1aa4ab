//! Size-based duration estimation.

/// Assumed encode rate used for duration estimation, in bytes per second.
///
/// Models 128 kbps AAC: 128 kbit/s = 16 000 bytes/s.
pub const ASSUMED_BYTES_PER_SECOND: u64 = 16_000;

const BYTES_PER_MILLISECOND: u64 = ASSUMED_BYTES_PER_SECOND / 1_000;

/// Estimate the playable duration of an audio payload from its byte size.
///
/// Returns `floor(size_bytes / 16000 * 1000)` milliseconds under the
/// fixed [`ASSUMED_BYTES_PER_SECOND`] rate. This is a heuristic, not a
/// measured duration: it is exact only for constant-bitrate 128 kbps
/// streams. Pure, deterministic, no I/O.
pub fn estimate_duration_ms(size_bytes: u64) -> u64 {
    size_bytes / BYTES_PER_MILLISECOND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_zero_bytes() {
        assert_eq!(estimate_duration_ms(0), 0);
    }

    #[test]
    fn test_estimate_one_second() {
        assert_eq!(estimate_duration_ms(16_000), 1_000);
    }

    #[test]
    fn test_estimate_floors_partial_milliseconds() {
        // 15 bytes is less than one millisecond of audio.
        assert_eq!(estimate_duration_ms(15), 0);
        assert_eq!(estimate_duration_ms(16), 1);
        assert_eq!(estimate_duration_ms(31), 1);
        assert_eq!(estimate_duration_ms(15_999), 999);
    }

    #[test]
    fn test_estimate_matches_rate_formula() {
        for size in [8_000u64, 32_000, 160_000, 1_234_567] {
            let expected = (size as f64 / ASSUMED_BYTES_PER_SECOND as f64 * 1_000.0).floor();
            assert_eq!(estimate_duration_ms(size), expected as u64);
        }
    }

    #[test]
    fn test_estimate_ten_minutes() {
        // 600s of 128 kbps audio is 9.6 MB.
        assert_eq!(estimate_duration_ms(9_600_000), 600_000);
    }
}
