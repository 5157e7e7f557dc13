use crate::models::{CreateTestimonial, Testimonial, UpdateTestimonial};
use crate::services::blogs::not_found_as_none;
use crate::services::error::{ServiceError, ServiceResult};
use crate::services::validate::{optional_text, required_text, Errors};
use crate::Database;
use rusqlite::Connection;

const COLUMNS: &str = "id, name, course, testimonial, rating, image, position, company, \
     is_featured, created_at, updated_at";

pub fn list_testimonials(db: &Database) -> ServiceResult<Vec<Testimonial>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM testimonials ORDER BY created_at DESC, id DESC",
        COLUMNS
    ))?;
    let testimonials = stmt
        .query_map([], row_to_testimonial)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(testimonials)
}

pub fn get_testimonial(db: &Database, id: i64) -> ServiceResult<Testimonial> {
    let conn = db.get()?;
    find_testimonial(&conn, id)?.ok_or(ServiceError::NotFound("Testimonial"))
}

fn validate_rating(errors: &mut Errors, value: Option<i64>, required: bool) -> Option<i64> {
    match value {
        Some(r) if (1..=5).contains(&r) => Some(r),
        Some(_) => {
            errors.add("rating", "The rating must be between 1 and 5.");
            None
        }
        None => {
            if required {
                errors.add("rating", "The rating field is required.");
            }
            None
        }
    }
}

pub fn create_testimonial(db: &Database, input: CreateTestimonial) -> ServiceResult<Testimonial> {
    let mut errors = Errors::new();
    let name = required_text(&mut errors, "name", input.name.as_deref(), 255);
    let course = optional_text(&mut errors, "course", input.course.as_deref(), 255);
    let testimonial = optional_text(&mut errors, "testimonial", input.testimonial.as_deref(), 0);
    let rating = validate_rating(&mut errors, input.rating, true);
    let image = optional_text(&mut errors, "image", input.image.as_deref(), 0);
    let position = optional_text(&mut errors, "position", input.position.as_deref(), 255);
    let company = optional_text(&mut errors, "company", input.company.as_deref(), 255);
    let is_featured = input.is_featured.unwrap_or(false);
    errors.into_result()?;
    let rating = rating.unwrap_or(1);

    let conn = db.get()?;
    conn.execute(
        "INSERT INTO testimonials (name, course, testimonial, rating, image, position, company, is_featured) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        rusqlite::params![name, course, testimonial, rating, image, position, company, is_featured],
    )?;
    let id = conn.last_insert_rowid();

    find_testimonial(&conn, id)?.ok_or(ServiceError::NotFound("Testimonial"))
}

pub fn update_testimonial(
    db: &Database,
    id: i64,
    input: UpdateTestimonial,
) -> ServiceResult<Testimonial> {
    let conn = db.get()?;
    let current = find_testimonial(&conn, id)?.ok_or(ServiceError::NotFound("Testimonial"))?;

    let mut errors = Errors::new();
    let name = input
        .name
        .as_deref()
        .map(|v| required_text(&mut errors, "name", Some(v), 255));
    let course = optional_text(&mut errors, "course", input.course.as_deref(), 255);
    let testimonial = optional_text(&mut errors, "testimonial", input.testimonial.as_deref(), 0);
    let rating = validate_rating(&mut errors, input.rating, false);
    let image = optional_text(&mut errors, "image", input.image.as_deref(), 0);
    let position = optional_text(&mut errors, "position", input.position.as_deref(), 255);
    let company = optional_text(&mut errors, "company", input.company.as_deref(), 255);
    errors.into_result()?;

    let name = name.unwrap_or(current.name);
    let course = course.or(current.course);
    let testimonial = testimonial.or(current.testimonial);
    let rating = rating.unwrap_or(current.rating);
    let image = image.or(current.image);
    let position = position.or(current.position);
    let company = company.or(current.company);
    let is_featured = input.is_featured.unwrap_or(current.is_featured);

    conn.execute(
        "UPDATE testimonials SET name = ?1, course = ?2, testimonial = ?3, rating = ?4, \
         image = ?5, position = ?6, company = ?7, is_featured = ?8, \
         updated_at = CURRENT_TIMESTAMP WHERE id = ?9",
        rusqlite::params![
            name, course, testimonial, rating, image, position, company, is_featured, current.id,
        ],
    )?;

    find_testimonial(&conn, current.id)?.ok_or(ServiceError::NotFound("Testimonial"))
}

pub fn delete_testimonial(db: &Database, id: i64) -> ServiceResult<()> {
    let conn = db.get()?;
    let testimonial = find_testimonial(&conn, id)?.ok_or(ServiceError::NotFound("Testimonial"))?;
    conn.execute("DELETE FROM testimonials WHERE id = ?", [testimonial.id])?;
    Ok(())
}

pub(crate) struct TestimonialCounts {
    pub total: i64,
    pub featured: i64,
}

pub(crate) fn count_testimonials(conn: &Connection) -> ServiceResult<TestimonialCounts> {
    let (total, featured) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(CASE WHEN is_featured THEN 1 ELSE 0 END), 0) \
         FROM testimonials",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(TestimonialCounts { total, featured })
}

fn find_testimonial(conn: &Connection, id: i64) -> ServiceResult<Option<Testimonial>> {
    let testimonial = conn
        .query_row(
            &format!("SELECT {} FROM testimonials WHERE id = ?1", COLUMNS),
            [id],
            row_to_testimonial,
        )
        .map(Some)
        .or_else(not_found_as_none)?;
    Ok(testimonial)
}

fn row_to_testimonial(row: &rusqlite::Row) -> rusqlite::Result<Testimonial> {
    Ok(Testimonial {
        id: row.get(0)?,
        name: row.get(1)?,
        course: row.get(2)?,
        testimonial: row.get(3)?,
        rating: row.get(4)?,
        image: row.get(5)?,
        position: row.get(6)?,
        company: row.get(7)?,
        is_featured: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}
