use crate::services::error::ServiceResult;
use crate::services::{testimonials, workshops};
use crate::Database;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub blogs: i64,
    pub courses: i64,
    pub workshops: WorkshopStats,
    pub testimonials: TestimonialStats,
    pub faculty: i64,
    pub certificates: i64,
    pub gallery: i64,
}

#[derive(Debug, Serialize)]
pub struct WorkshopStats {
    pub total: i64,
    pub upcoming: i64,
    pub registrations: i64,
}

#[derive(Debug, Serialize)]
pub struct TestimonialStats {
    pub total: i64,
    pub featured: i64,
}

pub fn stats(db: &Database) -> ServiceResult<DashboardStats> {
    let conn = db.get()?;

    let count = |table: &str| -> ServiceResult<i64> {
        let n = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })?;
        Ok(n)
    };

    let workshop_counts = workshops::count_workshops(&conn)?;
    let testimonial_counts = testimonials::count_testimonials(&conn)?;

    Ok(DashboardStats {
        blogs: count("blogs")?,
        courses: count("courses")?,
        workshops: WorkshopStats {
            total: workshop_counts.total,
            upcoming: workshop_counts.upcoming,
            registrations: workshop_counts.registrations,
        },
        testimonials: TestimonialStats {
            total: testimonial_counts.total,
            featured: testimonial_counts.featured,
        },
        faculty: count("faculty")?,
        certificates: count("certificates")?,
        gallery: count("gallery")?,
    })
}
