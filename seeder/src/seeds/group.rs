use crate::seed::Seeder;
use chrono::Utc;
use db::models::group;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub struct GroupSeeder;

#[async_trait::async_trait]
impl Seeder for GroupSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let now = Utc::now();
        for code in ["G1", "G2", "G3", "G4"] {
            let _ = group::ActiveModel {
                code: Set(code.to_string()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await;
        }
    }
}
