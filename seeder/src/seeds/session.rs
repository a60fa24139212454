use crate::seed::Seeder;
use chrono::{Duration, NaiveTime, Utc};
use db::models::{course, session};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

pub struct SessionSeeder;

#[async_trait::async_trait]
impl Seeder for SessionSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let courses = course::Entity::find().all(db).await.unwrap_or_default();
        let now = Utc::now();

        for (i, course) in courses.iter().enumerate() {
            let room = format!("{}", 101 + (i % 4));

            // A morning slot (already ended on most demo runs)
            let _ = insert_session(
                db,
                course.id,
                &room,
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            )
            .await;

            // A slot wrapped around "now" so live scans have a target
            let start = (now - Duration::minutes(30)).time();
            let end = (now + Duration::minutes(60)).time();
            if start < end {
                let _ = insert_session(db, course.id, &room, start, end).await;
            }
        }
    }
}

async fn insert_session(
    db: &DatabaseConnection,
    course_id: i64,
    room: &str,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<session::Model, sea_orm::DbErr> {
    let now = Utc::now();
    let probe = session::Model {
        id: 0,
        course_id,
        room: room.to_string(),
        date: now.date_naive(),
        start_time: start,
        end_time: end,
        status: session::Status::NotStarted,
        created_at: now,
        updated_at: now,
    };
    let status = probe.derived_status(now);

    session::ActiveModel {
        course_id: Set(course_id),
        room: Set(room.to_string()),
        date: Set(now.date_naive()),
        start_time: Set(start),
        end_time: Set(end),
        status: Set(status),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
