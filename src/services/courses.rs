use crate::models::{Course, CreateCourse, UpdateCourse};
use crate::services::blogs::{json_string_list, not_found_as_none};
use crate::services::error::{is_unique_violation, ServiceError, ServiceResult};
use crate::services::sanitize::sanitize_string_list;
use crate::services::slug::{count_slug_matches, increment_suffix, resolve_slug, slug_base};
use crate::services::validate::{optional_text, required_rich_text, required_text, Errors};
use crate::Database;
use rusqlite::Connection;

const COLUMNS: &str =
    "id, title, slug, description, image, category, duration, curriculum, created_at, updated_at";

pub fn list_courses(db: &Database) -> ServiceResult<Vec<Course>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM courses ORDER BY created_at DESC, id DESC",
        COLUMNS
    ))?;
    let courses = stmt
        .query_map([], row_to_course)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(courses)
}

pub fn get_course(db: &Database, key: &str) -> ServiceResult<Course> {
    let conn = db.get()?;
    find_course(&conn, key)?.ok_or(ServiceError::NotFound("Course"))
}

pub fn create_course(db: &Database, input: CreateCourse) -> ServiceResult<Course> {
    let mut errors = Errors::new();
    let title = required_text(&mut errors, "title", input.title.as_deref(), 255);
    let description = required_rich_text(&mut errors, "description", input.description.as_deref());
    let category = required_text(&mut errors, "category", input.category.as_deref(), 255);
    let image = optional_text(&mut errors, "image", input.image.as_deref(), 0);
    let duration = optional_text(&mut errors, "duration", input.duration.as_deref(), 255);
    let curriculum = input
        .curriculum
        .as_ref()
        .map(sanitize_string_list)
        .unwrap_or_default();
    errors.into_result()?;

    let conn = db.get()?;
    let slug = resolve_slug(
        &title,
        &|s: &str, ex: Option<i64>| count_slug_matches(&conn, "courses", s, ex),
        None,
    )?;

    let insert = |slug: &str| -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO courses (title, slug, description, image, category, duration, curriculum) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                title,
                slug,
                description,
                image,
                category,
                duration,
                serde_json::to_string(&curriculum).unwrap_or_else(|_| "[]".into()),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    };

    let id = match insert(&slug) {
        Ok(id) => id,
        Err(e) if is_unique_violation(&e) => insert(&increment_suffix(&slug))?,
        Err(e) => return Err(e.into()),
    };

    find_course_by_id(&conn, id)?.ok_or(ServiceError::NotFound("Course"))
}

pub fn update_course(db: &Database, key: &str, input: UpdateCourse) -> ServiceResult<Course> {
    let conn = db.get()?;
    let current = find_course(&conn, key)?.ok_or(ServiceError::NotFound("Course"))?;

    let mut errors = Errors::new();
    let title = input
        .title
        .as_deref()
        .map(|v| required_text(&mut errors, "title", Some(v), 255));
    let description = input
        .description
        .as_deref()
        .map(|v| required_rich_text(&mut errors, "description", Some(v)));
    let category = input
        .category
        .as_deref()
        .map(|v| required_text(&mut errors, "category", Some(v), 255));
    let image = optional_text(&mut errors, "image", input.image.as_deref(), 0);
    let duration = optional_text(&mut errors, "duration", input.duration.as_deref(), 255);
    errors.into_result()?;

    let mut slug = current.slug.clone();
    if let Some(ref new_title) = title {
        let base = slug_base(new_title)?;
        if base != current.slug {
            slug = resolve_slug(
                new_title,
                &|s: &str, ex: Option<i64>| count_slug_matches(&conn, "courses", s, ex),
                Some(current.id),
            )?;
        }
    }

    let title = title.unwrap_or(current.title);
    let description = description.unwrap_or(current.description);
    let category = category.unwrap_or(current.category);
    let image = image.or(current.image);
    let duration = duration.or(current.duration);
    let curriculum = match input.curriculum.as_ref() {
        Some(value) => sanitize_string_list(value),
        None => current.curriculum,
    };

    conn.execute(
        "UPDATE courses SET title = ?1, slug = ?2, description = ?3, image = ?4, category = ?5, \
         duration = ?6, curriculum = ?7, updated_at = CURRENT_TIMESTAMP WHERE id = ?8",
        rusqlite::params![
            title,
            slug,
            description,
            image,
            category,
            duration,
            serde_json::to_string(&curriculum).unwrap_or_else(|_| "[]".into()),
            current.id,
        ],
    )?;

    find_course_by_id(&conn, current.id)?.ok_or(ServiceError::NotFound("Course"))
}

pub fn delete_course(db: &Database, key: &str) -> ServiceResult<()> {
    let conn = db.get()?;
    let course = find_course(&conn, key)?.ok_or(ServiceError::NotFound("Course"))?;
    conn.execute("DELETE FROM courses WHERE id = ?", [course.id])?;
    Ok(())
}

pub fn count_courses(db: &Database) -> ServiceResult<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))?;
    Ok(count)
}

fn find_course(conn: &Connection, key: &str) -> ServiceResult<Option<Course>> {
    let course = conn
        .query_row(
            &format!("SELECT {} FROM courses WHERE id = ?1 OR slug = ?1", COLUMNS),
            [key],
            row_to_course,
        )
        .map(Some)
        .or_else(not_found_as_none)?;
    Ok(course)
}

fn find_course_by_id(conn: &Connection, id: i64) -> ServiceResult<Option<Course>> {
    let course = conn
        .query_row(
            &format!("SELECT {} FROM courses WHERE id = ?1", COLUMNS),
            [id],
            row_to_course,
        )
        .map(Some)
        .or_else(not_found_as_none)?;
    Ok(course)
}

fn row_to_course(row: &rusqlite::Row) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        image: row.get(4)?,
        category: row.get(5)?,
        duration: row.get(6)?,
        curriculum: json_string_list(row.get(7)?),
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}
