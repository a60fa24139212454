//! Attendance decision engine.
//!
//! Takes a raw card scan (card id + room + timestamp), resolves the active
//! session for that room, and records the student as present or late. All
//! persistence failures are folded into [`ScanOutcome::Failure`] so a flaky
//! reader or a momentary database hiccup can never take the intake path down.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use tracing::{info, warn};

use crate::events::AttendanceEvent;
use crate::models::{attendance, session, student};
use util::config;

/// Result type for scan engine operations
pub type ScanEngineResult<T> = Result<T, ScanError>;

/// Errors that can occur while processing a scan
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Classification of a processed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// No student carries this card.
    UnknownCard,
    /// No session window in this room contains the scan time.
    NoActiveSession,
    /// The student was already recorded for the matched session.
    AlreadyMarked(attendance::Status),
    /// A new attendance row was written.
    Marked(attendance::Status),
    /// Something went wrong; the scan had no effect.
    Failure(String),
}

/// A processed scan: the outcome plus the notification to fan out, if any.
///
/// `event` is `Some` only for `Marked`. Delivery is the caller's concern and
/// runs outside the write transaction.
#[derive(Debug)]
pub struct ScanResult {
    pub outcome: ScanOutcome,
    pub event: Option<AttendanceEvent>,
}

impl ScanResult {
    fn plain(outcome: ScanOutcome) -> Self {
        Self {
            outcome,
            event: None,
        }
    }
}

/// Processes one card scan against the sessions scheduled in `room`.
///
/// Never returns an error: any failure surfaces as `ScanOutcome::Failure`
/// with no partial write left behind.
pub async fn record_scan(
    db: &DatabaseConnection,
    card_id: &str,
    room: &str,
    at: DateTime<Utc>,
) -> ScanResult {
    match try_record_scan(db, card_id, room, at).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Scan processing failed for card {card_id} in room {room}: {e}");
            ScanResult::plain(ScanOutcome::Failure(e.to_string()))
        }
    }
}

async fn try_record_scan(
    db: &DatabaseConnection,
    card_id: &str,
    room: &str,
    at: DateTime<Utc>,
) -> ScanEngineResult<ScanResult> {
    let Some(student) = student::Model::find_by_card(db, card_id).await? else {
        warn!("Unknown RFID card: {card_id}");
        return Ok(ScanResult::plain(ScanOutcome::UnknownCard));
    };

    let candidates = session::Entity::find_for_room_on_date(db, room, at.date_naive()).await?;
    info!(
        "Found {} sessions in room {room} on {}",
        candidates.len(),
        at.date_naive()
    );

    for candidate in candidates {
        if candidate.window_contains(at) {
            return mark_for_session(db, candidate, &student, room, at).await;
        }
        // Housekeeping: keep the cached status of the sessions we walked past
        // in line with the clock.
        candidate.refresh_status(db, at).await?;
    }

    warn!("No active session found in room {room} at {at}");
    Ok(ScanResult::plain(ScanOutcome::NoActiveSession))
}

/// Records `student` against the matched `session`. The status update and the
/// attendance insert commit together or not at all.
async fn mark_for_session(
    db: &DatabaseConnection,
    session: session::Model,
    student: &student::Model,
    room: &str,
    at: DateTime<Utc>,
) -> ScanEngineResult<ScanResult> {
    let session_id = session.id;
    let start = session.starts_at();
    let txn = db.begin().await?;

    // Inside the window, so this pins the cached status to `active`.
    session.refresh_status(&txn, at).await?;

    if let Some(existing) =
        attendance::Model::find_by_session_and_student(&txn, session_id, student.id).await?
    {
        // The status refresh still commits, matching the read-side behavior.
        txn.commit().await?;
        info!(
            "Student {} already marked for session {session_id} ({})",
            student.name,
            existing.status.as_str()
        );
        return Ok(ScanResult::plain(ScanOutcome::AlreadyMarked(
            existing.status,
        )));
    }

    let minutes_late = (at.naive_utc() - start).num_minutes();
    let status = if minutes_late > config::late_after_minutes() {
        info!(
            "Student {} is late ({minutes_late} minutes past start)",
            student.name
        );
        attendance::Status::Late
    } else {
        attendance::Status::Present
    };

    match attendance::Model::create(&txn, session_id, student.id, status, at).await {
        Ok(_) => {
            txn.commit().await?;
            info!(
                "Marked {} as {} for session {session_id}",
                student.name,
                status.as_str()
            );
            Ok(ScanResult {
                outcome: ScanOutcome::Marked(status),
                event: Some(AttendanceEvent::Marked {
                    session_id,
                    student_id: student.id,
                    student_name: student.name.clone(),
                    room: room.to_string(),
                    status,
                    timestamp: at,
                }),
            })
        }
        Err(e) if is_unique_violation(&e) => {
            // A concurrent scan for the same (session, student) won the race.
            // The unique index kept the invariant; report the existing row.
            txn.rollback().await?;
            let existing =
                attendance::Model::find_by_session_and_student(db, session_id, student.id)
                    .await?
                    .ok_or(e)?;
            Ok(ScanResult::plain(ScanOutcome::AlreadyMarked(
                existing.status,
            )))
        }
        Err(e) => {
            txn.rollback().await?;
            Err(e.into())
        }
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{course, group, professor};
    use crate::test_utils::setup_test_db;
    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

    const ROOM: &str = "101";

    async fn seed_student(db: &DatabaseConnection, card: &str) -> student::Model {
        let now = Utc::now();
        let group = group::ActiveModel {
            code: Set("G1".into()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        student::ActiveModel {
            name: Set("Thabo Mokoena".into()),
            group_id: Set(group.id),
            rfid_card_id: Set(card.into()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    async fn seed_session(
        db: &DatabaseConnection,
        room: &str,
        start: (u32, u32),
        end: (u32, u32),
    ) -> session::Model {
        let now = Utc::now();
        let professor = professor::Model::create(
            db,
            "Prof",
            &format!("prof-{}@example.com", unique_suffix(now)),
            "password123",
        )
        .await
        .unwrap();
        let course = course::ActiveModel {
            name: Set("Databases 301".into()),
            professor_id: Set(professor.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        session::ActiveModel {
            course_id: Set(course.id),
            room: Set(room.into()),
            date: Set(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()),
            start_time: Set(NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap()),
            end_time: Set(NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap()),
            status: Set(session::Status::NotStarted),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    // Each call needs a distinct professor email to satisfy the unique index.
    fn unique_suffix(now: DateTime<Utc>) -> String {
        format!("{}", now.timestamp_nanos_opt().unwrap_or_default())
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).unwrap()
    }

    #[tokio::test]
    async fn unknown_card_yields_unknown_outcome() {
        let db = setup_test_db().await;
        seed_session(&db, ROOM, (9, 0), (10, 0)).await;

        let result = record_scan(&db, "NO-SUCH-CARD", ROOM, at(9, 10)).await;
        assert_eq!(result.outcome, ScanOutcome::UnknownCard);
        assert!(result.event.is_none());
    }

    #[tokio::test]
    async fn scan_outside_window_yields_no_active_session_and_refreshes_status() {
        let db = setup_test_db().await;
        seed_student(&db, "CARD-1").await;
        let lecture = seed_session(&db, ROOM, (9, 0), (10, 0)).await;

        let result = record_scan(&db, "CARD-1", ROOM, at(11, 0)).await;
        assert_eq!(result.outcome, ScanOutcome::NoActiveSession);

        // The walked-past session's cached status caught up with the clock.
        let refreshed = session::Entity::find_by_id(lecture.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(refreshed.status, session::Status::Ended);
    }

    #[tokio::test]
    async fn on_time_scan_marks_present_with_event() {
        let db = setup_test_db().await;
        let student = seed_student(&db, "CARD-1").await;
        let lecture = seed_session(&db, ROOM, (9, 0), (10, 0)).await;

        let result = record_scan(&db, "CARD-1", ROOM, at(9, 10)).await;
        assert_eq!(result.outcome, ScanOutcome::Marked(attendance::Status::Present));

        match result.event {
            Some(AttendanceEvent::Marked {
                session_id,
                student_id,
                status,
                ..
            }) => {
                assert_eq!(session_id, lecture.id);
                assert_eq!(student_id, student.id);
                assert_eq!(status, attendance::Status::Present);
            }
            None => panic!("expected a marked event"),
        }
    }

    #[tokio::test]
    async fn late_threshold_is_strictly_greater_than() {
        let db = setup_test_db().await;
        seed_student(&db, "CARD-1").await;
        seed_session(&db, ROOM, (9, 0), (10, 0)).await;

        // Exactly 15 minutes in is still present.
        let result = record_scan(&db, "CARD-1", ROOM, at(9, 15)).await;
        assert_eq!(result.outcome, ScanOutcome::Marked(attendance::Status::Present));

        let db = setup_test_db().await;
        seed_student(&db, "CARD-1").await;
        seed_session(&db, ROOM, (9, 0), (10, 0)).await;

        let result = record_scan(&db, "CARD-1", ROOM, at(9, 16)).await;
        assert_eq!(result.outcome, ScanOutcome::Marked(attendance::Status::Late));
    }

    #[tokio::test]
    async fn repeat_scan_reports_the_prior_status() {
        let db = setup_test_db().await;
        seed_student(&db, "CARD-1").await;
        seed_session(&db, ROOM, (9, 0), (10, 0)).await;

        let first = record_scan(&db, "CARD-1", ROOM, at(9, 30)).await;
        assert_eq!(first.outcome, ScanOutcome::Marked(attendance::Status::Late));

        let second = record_scan(&db, "CARD-1", ROOM, at(9, 40)).await;
        assert_eq!(
            second.outcome,
            ScanOutcome::AlreadyMarked(attendance::Status::Late)
        );
        assert!(second.event.is_none());

        let count = attendance::Entity::find().count(&db).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn overlapping_sessions_resolve_to_the_earliest_start() {
        let db = setup_test_db().await;
        seed_student(&db, "CARD-1").await;
        let early = seed_session(&db, ROOM, (9, 0), (11, 0)).await;
        let _late = seed_session(&db, ROOM, (9, 30), (10, 30)).await;

        // Both windows contain 9:45; the earlier start must win every time.
        let result = record_scan(&db, "CARD-1", ROOM, at(9, 45)).await;
        assert_eq!(result.outcome, ScanOutcome::Marked(attendance::Status::Late));

        let row = attendance::Entity::find().one(&db).await.unwrap().unwrap();
        assert_eq!(row.session_id, early.id);
    }
}
