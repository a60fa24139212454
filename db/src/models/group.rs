use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Students,
    #[sea_orm(has_many = "super::course_group::Entity")]
    CourseGroups,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_group::Relation::Course.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::course_group::Relation::Group.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
