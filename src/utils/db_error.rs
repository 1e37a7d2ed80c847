/// Returns true if `e` is the unique index on `urls.short_code` rejecting a row.
///
/// SQLite reports no constraint name, so the violated column is read from
/// the message (`UNIQUE constraint failed: urls.short_code`).
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("urls.short_code")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_violations() {
        assert!(!is_unique_violation_on_code(&sqlx::Error::PoolClosed));
        assert!(!is_unique_violation_on_code(&sqlx::Error::RowNotFound));
    }
}
