use time::{Date, Duration, OffsetDateTime};

/// Number of days after `today` that still count as "this week".
pub const WEEK_SPAN_DAYS: i64 = 6;

/// Current UTC calendar day.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Whole days from `today` until `expiry`; negative once expired.
pub fn days_until(expiry: Date, today: Date) -> i64 {
    (expiry - today).whole_days()
}

/// Inclusive `[today, today + 6 days]` window used by weekly planning.
pub fn week_window(today: Date) -> (Date, Date) {
    let end = today
        .checked_add(Duration::days(WEEK_SPAN_DAYS))
        .unwrap_or(Date::MAX);

    (today, end)
}

pub fn is_within_week(date: Date, today: Date) -> bool {
    let (start, end) = week_window(today);
    date >= start && date <= end
}
