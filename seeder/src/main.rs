use crate::seed::Seeder;
use crate::seed::run_seeder;
use crate::seeds::{
    course::CourseSeeder, course_group::CourseGroupSeeder, group::GroupSeeder,
    professor::ProfessorSeeder, session::SessionSeeder, student::StudentSeeder,
};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = db::connect().await;

    for (seeder, name) in [
        (
            Box::new(ProfessorSeeder) as Box<dyn Seeder + Send + Sync>,
            "Professor",
        ),
        (Box::new(GroupSeeder), "Group"),
        (Box::new(StudentSeeder), "Student"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(CourseGroupSeeder), "CourseGroup"),
        (Box::new(SessionSeeder), "Session"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
