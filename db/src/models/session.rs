use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use serde::{Deserialize, Serialize};

use crate::models::{attendance, course, group, student};

/// Lifecycle status of a class session.
///
/// This is a cached projection of "now vs. the session's time window". It is
/// recomputed on every read through the resolver paths and must never be used
/// as a precondition: the scan engine always re-derives from the timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "session_status_enum")]
pub enum Status {
    #[sea_orm(string_value = "not_started")]
    NotStarted,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "ended")]
    Ended,
}

/// Represents a scheduled class session in the `sessions` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub room: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendances,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendances.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// One attendance row joined with its student and the student's group,
/// as the professor dashboards display it.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEntry {
    pub attendance: attendance::Model,
    pub student: Option<student::Model>,
    pub group: Option<group::Model>,
}

/// A session together with its eager-loaded attendance roster.
#[derive(Debug, Clone, Serialize)]
pub struct SessionWithRoster {
    pub session: Model,
    pub attendances: Vec<AttendanceEntry>,
}

impl Model {
    /// Start of the session's window as a wall-clock datetime.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// End of the session's window as a wall-clock datetime.
    pub fn ends_at(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }

    /// Derives the lifecycle status from the clock alone. Pure and idempotent:
    /// the same `at` always yields the same answer.
    pub fn derived_status(&self, at: DateTime<Utc>) -> Status {
        let at = at.naive_utc();
        if at < self.starts_at() {
            Status::NotStarted
        } else if at <= self.ends_at() {
            Status::Active
        } else {
            Status::Ended
        }
    }

    /// True if `at` falls inside `[start, end]` on the session's date.
    pub fn window_contains(&self, at: DateTime<Utc>) -> bool {
        self.derived_status(at) == Status::Active
    }

    /// Recomputes the cached status from `at` and persists it when stale.
    ///
    /// Safe to run concurrently from multiple readers: the column is a pure
    /// projection of time, so last-write-wins is acceptable.
    pub async fn refresh_status<C: ConnectionTrait>(
        self,
        db: &C,
        at: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        let derived = self.derived_status(at);
        if derived == self.status {
            return Ok(self);
        }
        let mut active: ActiveModel = self.into();
        active.status = Set(derived);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }
}

impl Entity {
    /// Scan candidates: sessions in `room` on `date`, ordered by start time
    /// then id. Overlapping sessions in one room are a scheduling mistake the
    /// store cannot rule out; the deterministic order makes first-match-wins
    /// reproducible instead of store-iteration luck.
    pub async fn find_for_room_on_date(
        db: &DatabaseConnection,
        room: &str,
        date: NaiveDate,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Room.eq(room))
            .filter(Column::Date.eq(date))
            .order_by_asc(Column::StartTime)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Sessions across all of a professor's courses whose window, widened by
    /// `tolerance` on both sides, contains `at`. Used for "what is my class
    /// doing right now" views, so each session carries its roster.
    pub async fn find_current_for_professor(
        db: &DatabaseConnection,
        professor_id: i64,
        at: DateTime<Utc>,
        tolerance: Duration,
    ) -> Result<Vec<SessionWithRoster>, DbErr> {
        // The tolerance can push a window across midnight, so adjacent dates
        // stay in the candidate set; the precise cut is the window check below.
        let date = at.date_naive();
        let sessions = sessions_for_professor(professor_id)
            .filter(Column::Date.is_in([
                date.pred_opt().unwrap_or(date),
                date,
                date.succ_opt().unwrap_or(date),
            ]))
            .all(db)
            .await?;

        let probe = at.naive_utc();
        let mut current = Vec::new();
        for session in sessions {
            let refreshed = session.refresh_status(db, at).await?;
            if refreshed.starts_at() - tolerance <= probe && probe <= refreshed.ends_at() + tolerance
            {
                current.push(refreshed);
            }
        }

        attach_rosters(db, current).await
    }

    /// Every session belonging to one of the professor's courses, with the
    /// same eager loading as the current-sessions view.
    pub async fn find_all_for_professor(
        db: &DatabaseConnection,
        professor_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Vec<SessionWithRoster>, DbErr> {
        let sessions = sessions_for_professor(professor_id).all(db).await?;

        let mut refreshed = Vec::with_capacity(sessions.len());
        for session in sessions {
            refreshed.push(session.refresh_status(db, at).await?);
        }

        attach_rosters(db, refreshed).await
    }
}

fn sessions_for_professor(professor_id: i64) -> Select<Entity> {
    Entity::find()
        .inner_join(course::Entity)
        .filter(course::Column::ProfessorId.eq(professor_id))
        .order_by_asc(Column::Date)
        .order_by_asc(Column::StartTime)
        .order_by_asc(Column::Id)
}

/// Loads attendances with student and group for each session in one pass.
async fn attach_rosters(
    db: &DatabaseConnection,
    sessions: Vec<Model>,
) -> Result<Vec<SessionWithRoster>, DbErr> {
    let session_ids: Vec<i64> = sessions.iter().map(|s| s.id).collect();

    let rows: Vec<(attendance::Model, Option<student::Model>)> = if session_ids.is_empty() {
        Vec::new()
    } else {
        attendance::Entity::find()
            .filter(attendance::Column::SessionId.is_in(session_ids))
            .find_also_related(student::Entity)
            .all(db)
            .await?
    };

    let group_ids: Vec<i64> = rows
        .iter()
        .filter_map(|(_, s)| s.as_ref().map(|s| s.group_id))
        .collect();
    let groups: Vec<group::Model> = if group_ids.is_empty() {
        Vec::new()
    } else {
        group::Entity::find()
            .filter(group::Column::Id.is_in(group_ids))
            .all(db)
            .await?
    };

    let result = sessions
        .into_iter()
        .map(|session| {
            let attendances = rows
                .iter()
                .filter(|(a, _)| a.session_id == session.id)
                .map(|(a, s)| AttendanceEntry {
                    attendance: a.clone(),
                    student: s.clone(),
                    group: s.as_ref().and_then(|stu| {
                        groups.iter().find(|g| g.id == stu.group_id).cloned()
                    }),
                })
                .collect();
            SessionWithRoster {
                session,
                attendances,
            }
        })
        .collect();

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(start: (u32, u32), end: (u32, u32)) -> Model {
        Model {
            id: 1,
            course_id: 1,
            room: "101".into(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            status: Status::NotStarted,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).unwrap()
    }

    #[test]
    fn status_is_derived_from_window() {
        let s = session((9, 0), (10, 0));
        assert_eq!(s.derived_status(at(8, 59)), Status::NotStarted);
        assert_eq!(s.derived_status(at(9, 0)), Status::Active);
        assert_eq!(s.derived_status(at(10, 0)), Status::Active);
        assert_eq!(s.derived_status(at(10, 1)), Status::Ended);
    }

    #[test]
    fn derivation_is_idempotent() {
        let s = session((9, 0), (10, 0));
        let probe = at(9, 30);
        let first = s.derived_status(probe);
        for _ in 0..10 {
            assert_eq!(s.derived_status(probe), first);
        }
    }

    #[test]
    fn window_contains_is_inclusive_on_both_ends() {
        let s = session((14, 0), (15, 30));
        assert!(s.window_contains(at(14, 0)));
        assert!(s.window_contains(at(15, 30)));
        assert!(!s.window_contains(at(13, 59)));
        assert!(!s.window_contains(at(15, 31)));
    }

    mod current_sessions {
        use super::*;
        use crate::models::professor;
        use crate::test_utils::setup_test_db;

        async fn seed_session_on(
            db: &DatabaseConnection,
            professor_id: i64,
            date: NaiveDate,
            start: (u32, u32),
            end: (u32, u32),
        ) -> Model {
            let now = Utc::now();
            let course = course::ActiveModel {
                name: Set("Databases 301".into()),
                professor_id: Set(professor_id),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await
            .unwrap();
            ActiveModel {
                course_id: Set(course.id),
                room: Set("101".into()),
                date: Set(date),
                start_time: Set(NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap()),
                end_time: Set(NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap()),
                status: Set(Status::NotStarted),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await
            .unwrap()
        }

        #[tokio::test]
        async fn tolerance_window_reaches_across_midnight() {
            let db = setup_test_db().await;
            let prof = professor::Model::create(&db, "Prof", "night@example.com", "password123")
                .await
                .unwrap();

            // Starts at midnight the next day; a 23:58 check with five minutes
            // of tolerance falls inside its widened window.
            let tomorrow = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
            let midnight = seed_session_on(&db, prof.id, tomorrow, (0, 0), (1, 0)).await;
            // Same-day morning session, long over by 23:58.
            let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
            seed_session_on(&db, prof.id, today, (9, 0), (10, 0)).await;

            let current = Entity::find_current_for_professor(
                &db,
                prof.id,
                at(23, 58),
                Duration::minutes(5),
            )
            .await
            .unwrap();

            assert_eq!(current.len(), 1);
            assert_eq!(current[0].session.id, midnight.id);
        }
    }
}
