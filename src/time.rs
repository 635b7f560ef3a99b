//! Timestamp formatting for rise/set labels and the info panel.

use chrono::{DateTime, Utc};

/// Compact day/month time form used by the AoS/LoS annotations.
pub fn short_datetime(t: DateTime<Utc>) -> String {
    t.format("%d/%m %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_day_month_and_time() {
        let t = Utc.with_ymd_and_hms(2026, 3, 7, 18, 4, 9).unwrap();
        assert_eq!(short_datetime(t), "07/03 18:04:09");
    }
}
