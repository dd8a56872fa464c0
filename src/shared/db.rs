use sea_orm::{DbErr, SqlErr};

/// Postgres unique violations (SQLSTATE 23505), whether reported through the
/// driver or only visible in the error text.
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505")
}

/// `ActiveModel::update` reports a missing row as `RecordNotUpdated`.
pub fn is_missing_row(err: &DbErr) -> bool {
    matches!(err, DbErr::RecordNotUpdated | DbErr::RecordNotFound(_))
}

/// `%term%` for ILIKE, with LIKE wildcards in the term matched literally.
pub fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
