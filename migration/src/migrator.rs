use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202608270001_create_professors::Migration),
            Box::new(migrations::m202608270002_create_groups::Migration),
            Box::new(migrations::m202608270003_create_students::Migration),
            Box::new(migrations::m202608270004_create_courses::Migration),
            Box::new(migrations::m202608270005_create_courses_groups::Migration),
            Box::new(migrations::m202608270006_create_sessions::Migration),
            Box::new(migrations::m202608270007_create_attendances::Migration),
        ]
    }
}
