pub mod attendance;
pub mod calendar_exception;
pub mod lecture_slot;
pub mod program;
pub mod section;
pub mod semester;
pub mod session;
pub mod student;
pub mod student_subject;
pub mod subject;
pub mod teacher;
pub mod timetable;
