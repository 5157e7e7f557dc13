use crate::models::{CreateWorkshop, UpdateWorkshop, Workshop, WorkshopImage, WorkshopStatus};
use crate::services::blogs::{json_string_list, not_found_as_none};
use crate::services::error::{is_unique_violation, ServiceError, ServiceResult};
use crate::services::sanitize::sanitize_string_list;
use crate::services::slug::{count_slug_matches, increment_suffix, resolve_slug, slug_base};
use crate::services::validate::{
    non_negative, optional_text, required_date, required_text, Errors,
};
use crate::Database;
use rusqlite::Connection;

const COLUMNS: &str = "id, title, slug, description, date, start_time, end_time, location, \
     max_participants, registrations, status, price, instructors, created_at, updated_at";

pub fn list_workshops(db: &Database) -> ServiceResult<Vec<Workshop>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM workshops ORDER BY created_at DESC, id DESC",
        COLUMNS
    ))?;
    let mut workshops = stmt
        .query_map([], row_to_workshop)?
        .collect::<Result<Vec<_>, _>>()?;
    for workshop in &mut workshops {
        workshop.images = load_images(&conn, workshop.id)?;
    }
    Ok(workshops)
}

pub fn get_workshop(db: &Database, key: &str) -> ServiceResult<Workshop> {
    let conn = db.get()?;
    let mut workshop = find_workshop(&conn, key)?.ok_or(ServiceError::NotFound("Workshop"))?;
    workshop.images = load_images(&conn, workshop.id)?;
    Ok(workshop)
}

fn parse_status(errors: &mut Errors, value: Option<&str>, required: bool) -> Option<WorkshopStatus> {
    match value.map(str::trim) {
        Some(raw) if !raw.is_empty() => match raw.parse::<WorkshopStatus>() {
            Ok(status) => Some(status),
            Err(()) => {
                errors.add(
                    "status",
                    "The status must be one of: upcoming, open, completed, cancelled.",
                );
                None
            }
        },
        _ => {
            if required {
                errors.add("status", "The status field is required.");
            }
            None
        }
    }
}

fn validate_price(errors: &mut Errors, value: Option<f64>) -> Option<f64> {
    if let Some(p) = value {
        if p < 0.0 {
            errors.add("price", "The price must be at least 0.");
        }
    }
    value
}

pub fn create_workshop(db: &Database, input: CreateWorkshop) -> ServiceResult<Workshop> {
    let mut errors = Errors::new();
    let title = required_text(&mut errors, "title", input.title.as_deref(), 255);
    let description = optional_text(&mut errors, "description", input.description.as_deref(), 0);
    let date = required_date(&mut errors, "date", input.date.as_deref());
    let start_time = optional_text(&mut errors, "start_time", input.start_time.as_deref(), 255);
    let end_time = optional_text(&mut errors, "end_time", input.end_time.as_deref(), 255);
    let location = optional_text(&mut errors, "location", input.location.as_deref(), 255);
    let max_participants = non_negative(&mut errors, "max_participants", input.max_participants);
    let registrations = non_negative(&mut errors, "registrations", input.registrations).unwrap_or(0);
    let status = parse_status(&mut errors, input.status.as_deref(), true);
    let price = validate_price(&mut errors, input.price);
    let instructors = input
        .instructors
        .as_ref()
        .map(sanitize_string_list)
        .unwrap_or_default();
    let images = input
        .images
        .as_ref()
        .map(sanitize_string_list)
        .unwrap_or_default();
    errors.into_result()?;
    let status = status.unwrap_or_default();

    let mut conn = db.get()?;
    let tx = conn.transaction()?;

    let slug = resolve_slug(
        &title,
        &|s: &str, ex: Option<i64>| count_slug_matches(&tx, "workshops", s, ex),
        None,
    )?;

    let insert = |slug: &str| -> rusqlite::Result<i64> {
        tx.execute(
            "INSERT INTO workshops (title, slug, description, date, start_time, end_time, \
             location, max_participants, registrations, status, price, instructors) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            rusqlite::params![
                title,
                slug,
                description,
                date,
                start_time,
                end_time,
                location,
                max_participants,
                registrations,
                status.to_string(),
                price,
                serde_json::to_string(&instructors).unwrap_or_else(|_| "[]".into()),
            ],
        )?;
        Ok(tx.last_insert_rowid())
    };

    let id = match insert(&slug) {
        Ok(id) => id,
        Err(e) if is_unique_violation(&e) => insert(&increment_suffix(&slug))?,
        Err(e) => return Err(e.into()),
    };

    replace_images_tx(&tx, id, &images)?;

    let mut workshop = find_workshop_by_id(&tx, id)?.ok_or(ServiceError::NotFound("Workshop"))?;
    workshop.images = load_images(&tx, id)?;
    tx.commit()?;

    Ok(workshop)
}

pub fn update_workshop(db: &Database, key: &str, input: UpdateWorkshop) -> ServiceResult<Workshop> {
    let mut conn = db.get()?;
    let tx = conn.transaction()?;
    let current = find_workshop(&tx, key)?.ok_or(ServiceError::NotFound("Workshop"))?;

    let mut errors = Errors::new();
    let title = input
        .title
        .as_deref()
        .map(|v| required_text(&mut errors, "title", Some(v), 255));
    let description = optional_text(&mut errors, "description", input.description.as_deref(), 0);
    let date = input
        .date
        .as_deref()
        .map(|v| required_date(&mut errors, "date", Some(v)));
    let start_time = optional_text(&mut errors, "start_time", input.start_time.as_deref(), 255);
    let end_time = optional_text(&mut errors, "end_time", input.end_time.as_deref(), 255);
    let location = optional_text(&mut errors, "location", input.location.as_deref(), 255);
    let max_participants = non_negative(&mut errors, "max_participants", input.max_participants);
    let registrations = non_negative(&mut errors, "registrations", input.registrations);
    let status = parse_status(&mut errors, input.status.as_deref(), false);
    let price = validate_price(&mut errors, input.price);
    errors.into_result()?;

    let mut slug = current.slug.clone();
    if let Some(ref new_title) = title {
        let base = slug_base(new_title)?;
        if base != current.slug {
            slug = resolve_slug(
                new_title,
                &|s: &str, ex: Option<i64>| count_slug_matches(&tx, "workshops", s, ex),
                Some(current.id),
            )?;
        }
    }

    let title = title.unwrap_or(current.title);
    let description = description.or(current.description);
    let date = date.unwrap_or(current.date);
    let start_time = start_time.or(current.start_time);
    let end_time = end_time.or(current.end_time);
    let location = location.or(current.location);
    let max_participants = max_participants.or(current.max_participants);
    let registrations = registrations.unwrap_or(current.registrations);
    let status = status.unwrap_or(current.status);
    let price = price.or(current.price);
    let instructors = match input.instructors.as_ref() {
        Some(value) => sanitize_string_list(value),
        None => current.instructors,
    };

    tx.execute(
        "UPDATE workshops SET title = ?1, slug = ?2, description = ?3, date = ?4, \
         start_time = ?5, end_time = ?6, location = ?7, max_participants = ?8, \
         registrations = ?9, status = ?10, price = ?11, instructors = ?12, \
         updated_at = CURRENT_TIMESTAMP WHERE id = ?13",
        rusqlite::params![
            title,
            slug,
            description,
            date,
            start_time,
            end_time,
            location,
            max_participants,
            registrations,
            status.to_string(),
            price,
            serde_json::to_string(&instructors).unwrap_or_else(|_| "[]".into()),
            current.id,
        ],
    )?;

    if let Some(value) = input.images.as_ref() {
        let images = sanitize_string_list(value);
        replace_images_tx(&tx, current.id, &images)?;
    }

    let mut workshop =
        find_workshop_by_id(&tx, current.id)?.ok_or(ServiceError::NotFound("Workshop"))?;
    workshop.images = load_images(&tx, current.id)?;
    tx.commit()?;

    Ok(workshop)
}

pub fn delete_workshop(db: &Database, key: &str) -> ServiceResult<()> {
    let conn = db.get()?;
    let workshop = find_workshop(&conn, key)?.ok_or(ServiceError::NotFound("Workshop"))?;
    // workshop_images rows go with it via ON DELETE CASCADE
    conn.execute("DELETE FROM workshops WHERE id = ?", [workshop.id])?;
    Ok(())
}

/// Replace a workshop's image set as one atomic unit: either the full new
/// set is stored or the prior set survives untouched.
pub fn replace_workshop_images(db: &Database, workshop_id: i64, paths: &[String]) -> ServiceResult<()> {
    let mut conn = db.get()?;
    let tx = conn.transaction()?;
    replace_images_tx(&tx, workshop_id, paths)?;
    tx.commit()?;
    Ok(())
}

pub fn workshop_images(db: &Database, workshop_id: i64) -> ServiceResult<Vec<WorkshopImage>> {
    let conn = db.get()?;
    load_images(&conn, workshop_id)
}

fn replace_images_tx(conn: &Connection, workshop_id: i64, paths: &[String]) -> ServiceResult<()> {
    conn.execute(
        "DELETE FROM workshop_images WHERE workshop_id = ?",
        [workshop_id],
    )?;
    for path in paths {
        conn.execute(
            "INSERT INTO workshop_images (workshop_id, image_path) VALUES (?1, ?2)",
            rusqlite::params![workshop_id, path],
        )?;
    }
    Ok(())
}

pub(crate) struct WorkshopCounts {
    pub total: i64,
    pub upcoming: i64,
    pub registrations: i64,
}

pub(crate) fn count_workshops(conn: &Connection) -> ServiceResult<WorkshopCounts> {
    let (total, upcoming, registrations) = conn.query_row(
        "SELECT COUNT(*), \
         COALESCE(SUM(CASE WHEN status IN ('upcoming', 'open') THEN 1 ELSE 0 END), 0), \
         COALESCE(SUM(registrations), 0) FROM workshops",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;
    Ok(WorkshopCounts {
        total,
        upcoming,
        registrations,
    })
}

fn load_images(conn: &Connection, workshop_id: i64) -> ServiceResult<Vec<WorkshopImage>> {
    let mut stmt = conn.prepare(
        "SELECT id, workshop_id, image_path, created_at FROM workshop_images \
         WHERE workshop_id = ? ORDER BY id",
    )?;
    let images = stmt
        .query_map([workshop_id], |row| {
            Ok(WorkshopImage {
                id: row.get(0)?,
                workshop_id: row.get(1)?,
                image_path: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(images)
}

fn find_workshop(conn: &Connection, key: &str) -> ServiceResult<Option<Workshop>> {
    let workshop = conn
        .query_row(
            &format!("SELECT {} FROM workshops WHERE id = ?1 OR slug = ?1", COLUMNS),
            [key],
            row_to_workshop,
        )
        .map(Some)
        .or_else(not_found_as_none)?;
    Ok(workshop)
}

fn find_workshop_by_id(conn: &Connection, id: i64) -> ServiceResult<Option<Workshop>> {
    let workshop = conn
        .query_row(
            &format!("SELECT {} FROM workshops WHERE id = ?1", COLUMNS),
            [id],
            row_to_workshop,
        )
        .map(Some)
        .or_else(not_found_as_none)?;
    Ok(workshop)
}

fn row_to_workshop(row: &rusqlite::Row) -> rusqlite::Result<Workshop> {
    Ok(Workshop {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        date: row.get(4)?,
        start_time: row.get(5)?,
        end_time: row.get(6)?,
        location: row.get(7)?,
        max_participants: row.get(8)?,
        registrations: row.get(9)?,
        status: row
            .get::<_, String>(10)?
            .parse()
            .unwrap_or(WorkshopStatus::Upcoming),
        price: row.get(11)?,
        instructors: json_string_list(row.get(12)?),
        images: Vec::new(),
        created_at: row.get(13)?,
        updated_at: row.get(14)?,
    })
}
