//! Page components, one module per sidebar area.

mod attendance;
mod calendar;
mod dashboard;
mod leave;
mod library;
mod not_found;
mod profile;
mod register;
mod results;
mod sign_in;
mod sign_up;
mod syllabus;
mod unauthorized;

pub use attendance::{AttendanceSummaryPage, StudentAttendancePage, TeacherAttendancePage};
pub use calendar::CalendarPage;
pub use dashboard::DashboardPage;
pub use leave::LeaveRequestPage;
pub use library::{AddBookPage, BookListPage, IssueBooksPage, ViewBooksPage};
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use register::{StudentFormPage, StudentListPage, TeacherFormPage};
pub use results::{CheckResultsPage, UploadResultPage};
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
pub use syllabus::SyllabusPage;
pub use unauthorized::UnauthorizedPage;
