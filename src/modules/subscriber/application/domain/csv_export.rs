use chrono::NaiveDate;

use super::entities::Subscriber;

pub const CSV_HEADER: &str = "Email,Subscribed Date";

/// One row per subscriber, dates as `YYYY-MM-DD`.
pub fn subscribers_csv(subscribers: &[Subscriber]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(subscribers.iter().map(|s| {
            format!(
                "{},{}",
                csv_field(&s.email),
                s.subscribed_at.format("%Y-%m-%d")
            )
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("subscribers-{}.csv", today.format("%Y-%m-%d"))
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
