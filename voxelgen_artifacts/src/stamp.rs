use chrono::{DateTime, Utc};

/// Timestamp fixed at the start of a generation run.
///
/// Every artifact of one run carries the same stamp, so the archived copies
/// and the showcase caption always agree. The stamp is created by the caller;
/// rendering itself never reads the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStamp(DateTime<Utc>);

impl GenerationStamp {
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Filename suffix for archived artifact copies.
    #[must_use]
    pub fn file_suffix(&self) -> String {
        self.0.format("%Y%m%d_%H%M%S").to_string()
    }

    /// Human-readable caption for the generated showcase page.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.0.format("%Y-%m-%d at %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn stamp_at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> GenerationStamp {
        GenerationStamp::new(
            Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
                .single()
                .expect("test timestamp should be valid"),
        )
    }

    #[test]
    fn file_suffix_is_compact() {
        let stamp = stamp_at(2025, 3, 14, 9, 26, 53);
        assert_eq!(stamp.file_suffix(), "20250314_092653");
    }

    #[test]
    fn display_date_is_readable() {
        let stamp = stamp_at(2025, 3, 14, 9, 26, 53);
        assert_eq!(stamp.display_date(), "2025-03-14 at 09:26:53");
    }

    #[test]
    fn single_digit_fields_are_zero_padded() {
        let stamp = stamp_at(2024, 1, 2, 3, 4, 5);
        assert_eq!(stamp.file_suffix(), "20240102_030405");
        assert_eq!(stamp.display_date(), "2024-01-02 at 03:04:05");
    }
}
