pub mod m202608270001_create_professors;
pub mod m202608270002_create_groups;
pub mod m202608270003_create_students;
pub mod m202608270004_create_courses;
pub mod m202608270005_create_courses_groups;
pub mod m202608270006_create_sessions;
pub mod m202608270007_create_attendances;
