use crate::seed::Seeder;
use db::models::{course, course_group, group};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

pub struct CourseGroupSeeder;

#[async_trait::async_trait]
impl Seeder for CourseGroupSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let courses = course::Entity::find().all(db).await.unwrap_or_default();
        let groups = group::Entity::find().all(db).await.unwrap_or_default();
        if groups.is_empty() {
            return;
        }

        // Two groups per course; the unique pair index swallows repeats.
        for (i, course) in courses.iter().enumerate() {
            for offset in 0..2 {
                let group = &groups[(i + offset) % groups.len()];
                let _ = course_group::ActiveModel {
                    course_id: Set(course.id),
                    group_id: Set(group.id),
                    ..Default::default()
                }
                .insert(db)
                .await;
            }
        }
    }
}
