use sea_orm::{DbErr, SqlErr};

/// Type guard for upsert style conflicts: true only for a recognized
/// unique-constraint violation, false for every other error shape. Callers
/// use it to turn "already exists" into a non-fatal branch.
pub fn is_unique_constraint_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
