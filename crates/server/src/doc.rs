use utoipa::{
    Modify, OpenApi,
    openapi::{
        Components,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
///
/// Paths are collected from the routers in [`crate::routes`].
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Authentication", description = "Authentication related endpoints"),
        (name = "Semesters", description = "Semester catalogue"),
        (name = "Programs", description = "Degree programs and their sections"),
        (name = "Sections", description = "Year-scoped cohorts of students"),
        (name = "Subjects", description = "Subjects taught across programs"),
        (name = "Teachers", description = "Teaching staff"),
        (name = "Students", description = "Students, enrollments and attendance history"),
        (name = "Lecture slots", description = "Daily time slots"),
        (name = "Timetables", description = "Recurring weekly classes"),
        (name = "Sessions", description = "Concrete occurrences of a timetable entry"),
        (name = "Attendance", description = "Attendance marks"),
        (name = "Calendar exceptions", description = "Holidays and other non-teaching days"),
        (name = "Administration", description = "Administrator-only operations"),
    ),
    info(
        title = "Attendance API",
        version = "1.0.0",
        description = "Attendance tracking for a law school",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
