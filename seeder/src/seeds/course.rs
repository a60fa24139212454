use crate::seed::Seeder;
use chrono::Utc;
use db::models::{course, professor};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

pub struct CourseSeeder;

const SUBJECTS: &[&str] = &[
    "Databases 301",
    "Networks 221",
    "Compilers 314",
    "Operating Systems 332",
];

#[async_trait::async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let professors = professor::Entity::find().all(db).await.unwrap_or_default();
        let now = Utc::now();

        for (i, professor) in professors.iter().enumerate() {
            let name = SUBJECTS[i % SUBJECTS.len()];
            let _ = course::ActiveModel {
                name: Set(name.to_string()),
                professor_id: Set(professor.id),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await;
        }
    }
}
