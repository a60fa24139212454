use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, DbBackend, Statement};

    // SQLite rejects non-unique inline table indexes, so the schema has to
    // apply cleanly end to end and still carry every index the queries and
    // invariants rely on.
    #[tokio::test]
    async fn migrations_apply_on_sqlite_with_all_indexes() {
        let db = setup_test_db().await;

        let rows = db
            .query_all(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'index'",
            ))
            .await
            .expect("Failed to list indexes");
        let names: Vec<String> = rows
            .into_iter()
            .map(|row| row.try_get::<String>("", "name").unwrap())
            .collect();

        for expected in [
            "uq_professors_email",
            "uq_students_rfid_card_id",
            "uq_attendances_session_student",
            "ix_sessions_room_date",
        ] {
            assert!(
                names.iter().any(|n| n == expected),
                "missing index {expected}, found {names:?}"
            );
        }
    }
}
