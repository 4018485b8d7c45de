use sea_orm::sqlx::mysql::MySqlDatabaseError;
use sea_orm::{DbErr, RuntimeErr};

/// Extract the MySQL server error number (`ER_DUP_ENTRY` = 1062, ...) carried
/// by a SeaORM error, if the failure came from the server at all.
pub fn server_error_number(err: &DbErr) -> Option<u16> {
    let runtime = match err {
        DbErr::Exec(e) | DbErr::Query(e) | DbErr::Conn(e) => e,
        _ => return None,
    };

    match runtime {
        RuntimeErr::SqlxError(e) => e
            .as_database_error()?
            .try_downcast_ref::<MySqlDatabaseError>()
            .map(|db_err| db_err.number()),
        _ => None,
    }
}
