use crate::seed::Seeder;
use db::models::professor::Model;
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::Name};
use sea_orm::DatabaseConnection;

pub struct ProfessorSeeder;

#[async_trait::async_trait]
impl Seeder for ProfessorSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Fixed account for demos
        let _ = Model::create(db, "Demo Professor", "professor@example.com", "password123").await;

        // Random professors
        for _ in 0..3 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let _ = Model::create(db, &name, &email, "password123").await;
        }
    }
}
