use crate::seed::Seeder;
use chrono::Utc;
use db::models::{group, student};
use fake::{Fake, faker::name::en::Name};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

pub struct StudentSeeder;

#[async_trait::async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let groups = group::Entity::find().all(db).await.unwrap_or_default();
        let now = Utc::now();

        for group in &groups {
            for _ in 0..5 {
                let name: String = Name().fake();
                let card = format!("CARD-{:08X}", fastrand::u32(..));
                let _ = student::ActiveModel {
                    name: Set(name),
                    group_id: Set(group.id),
                    rfid_card_id: Set(card),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(db)
                .await;
            }
        }
    }
}
