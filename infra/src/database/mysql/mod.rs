//! MySQL repository implementations

mod engagement_repository_impl;
mod user_repository_impl;

pub use engagement_repository_impl::MySqlEngagementRepository;
pub use user_repository_impl::MySqlUserRepository;

/// Check whether a SQLx error is a MySQL unique-key violation (1062)
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err
            .try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>()
            .map(|mysql_err| mysql_err.number() == 1062)
            .unwrap_or(false),
        _ => false,
    }
}
