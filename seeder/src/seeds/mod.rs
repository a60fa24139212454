pub mod course;
pub mod course_group;
pub mod group;
pub mod professor;
pub mod session;
pub mod student;
