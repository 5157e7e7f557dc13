use crate::models::{CreateFaculty, FacultyMember, UpdateFaculty};
use crate::services::blogs::{json_string_list, not_found_as_none};
use crate::services::error::{ServiceError, ServiceResult};
use crate::services::sanitize::sanitize_string_list;
use crate::services::validate::{
    non_negative, optional_email, optional_text, required_text, Errors,
};
use crate::Database;
use rusqlite::Connection;

const COLUMNS: &str = "id, name, specialization, bio, experience, image, email, phone, \
     qualifications, expertise_areas, \"order\", is_active, created_at, updated_at";

pub fn list_faculty(db: &Database) -> ServiceResult<Vec<FacultyMember>> {
    // Inactive members included; the admin dashboard needs the full roster.
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM faculty ORDER BY \"order\", created_at DESC, id DESC",
        COLUMNS
    ))?;
    let faculty = stmt
        .query_map([], row_to_faculty)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(faculty)
}

pub fn get_faculty(db: &Database, id: i64) -> ServiceResult<FacultyMember> {
    let conn = db.get()?;
    find_faculty(&conn, id)?.ok_or(ServiceError::NotFound("Faculty member"))
}

pub fn create_faculty(db: &Database, input: CreateFaculty) -> ServiceResult<FacultyMember> {
    let mut errors = Errors::new();
    let name = required_text(&mut errors, "name", input.name.as_deref(), 255);
    let specialization =
        required_text(&mut errors, "specialization", input.specialization.as_deref(), 255);
    let bio = optional_text(&mut errors, "bio", input.bio.as_deref(), 0);
    let experience = optional_text(&mut errors, "experience", input.experience.as_deref(), 255);
    let image = optional_text(&mut errors, "image", input.image.as_deref(), 0);
    let email = optional_email(&mut errors, "email", input.email.as_deref());
    let phone = optional_text(&mut errors, "phone", input.phone.as_deref(), 255);
    let order = non_negative(&mut errors, "order", input.order);
    let qualifications = input
        .qualifications
        .as_ref()
        .map(sanitize_string_list)
        .unwrap_or_default();
    let expertise_areas = input
        .expertise_areas
        .as_ref()
        .map(sanitize_string_list)
        .unwrap_or_default();
    let is_active = input.is_active.unwrap_or(true);
    errors.into_result()?;

    let mut conn = db.get()?;
    // Order assignment happens inside the insert transaction so two
    // concurrent creates cannot both read the same max.
    let tx = conn.transaction()?;
    let order = match order {
        Some(o) => o,
        None => next_order(&tx, "faculty")?,
    };

    tx.execute(
        "INSERT INTO faculty (name, specialization, bio, experience, image, email, phone, \
         qualifications, expertise_areas, \"order\", is_active) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        rusqlite::params![
            name,
            specialization,
            bio,
            experience,
            image,
            email,
            phone,
            serde_json::to_string(&qualifications).unwrap_or_else(|_| "[]".into()),
            serde_json::to_string(&expertise_areas).unwrap_or_else(|_| "[]".into()),
            order,
            is_active,
        ],
    )?;
    let id = tx.last_insert_rowid();
    let member = find_faculty(&tx, id)?.ok_or(ServiceError::NotFound("Faculty member"))?;
    tx.commit()?;

    Ok(member)
}

pub fn update_faculty(db: &Database, id: i64, input: UpdateFaculty) -> ServiceResult<FacultyMember> {
    let conn = db.get()?;
    let current = find_faculty(&conn, id)?.ok_or(ServiceError::NotFound("Faculty member"))?;

    let mut errors = Errors::new();
    let name = input
        .name
        .as_deref()
        .map(|v| required_text(&mut errors, "name", Some(v), 255));
    let specialization = input
        .specialization
        .as_deref()
        .map(|v| required_text(&mut errors, "specialization", Some(v), 255));
    let bio = optional_text(&mut errors, "bio", input.bio.as_deref(), 0);
    let experience = optional_text(&mut errors, "experience", input.experience.as_deref(), 255);
    let image = optional_text(&mut errors, "image", input.image.as_deref(), 0);
    let email = optional_email(&mut errors, "email", input.email.as_deref());
    let phone = optional_text(&mut errors, "phone", input.phone.as_deref(), 255);
    let order = non_negative(&mut errors, "order", input.order);
    errors.into_result()?;

    let name = name.unwrap_or(current.name);
    let specialization = specialization.unwrap_or(current.specialization);
    let bio = bio.or(current.bio);
    let experience = experience.or(current.experience);
    let image = image.or(current.image);
    let email = email.or(current.email);
    let phone = phone.or(current.phone);
    let order = order.unwrap_or(current.order);
    let is_active = input.is_active.unwrap_or(current.is_active);
    let qualifications = match input.qualifications.as_ref() {
        Some(value) => sanitize_string_list(value),
        None => current.qualifications,
    };
    let expertise_areas = match input.expertise_areas.as_ref() {
        Some(value) => sanitize_string_list(value),
        None => current.expertise_areas,
    };

    conn.execute(
        "UPDATE faculty SET name = ?1, specialization = ?2, bio = ?3, experience = ?4, \
         image = ?5, email = ?6, phone = ?7, qualifications = ?8, expertise_areas = ?9, \
         \"order\" = ?10, is_active = ?11, updated_at = CURRENT_TIMESTAMP WHERE id = ?12",
        rusqlite::params![
            name,
            specialization,
            bio,
            experience,
            image,
            email,
            phone,
            serde_json::to_string(&qualifications).unwrap_or_else(|_| "[]".into()),
            serde_json::to_string(&expertise_areas).unwrap_or_else(|_| "[]".into()),
            order,
            is_active,
            current.id,
        ],
    )?;

    find_faculty(&conn, current.id)?.ok_or(ServiceError::NotFound("Faculty member"))
}

pub fn delete_faculty(db: &Database, id: i64) -> ServiceResult<()> {
    let conn = db.get()?;
    let member = find_faculty(&conn, id)?.ok_or(ServiceError::NotFound("Faculty member"))?;
    conn.execute("DELETE FROM faculty WHERE id = ?", [member.id])?;
    Ok(())
}

pub fn count_faculty(db: &Database) -> ServiceResult<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM faculty", [], |row| row.get(0))?;
    Ok(count)
}

/// Next position for an order-assigning table, evaluated inside the caller's
/// transaction. `table` is always a static name from this crate.
pub(crate) fn next_order(conn: &Connection, table: &str) -> ServiceResult<i64> {
    let next = conn.query_row(
        &format!("SELECT COALESCE(MAX(\"order\") + 1, 0) FROM {}", table),
        [],
        |row| row.get(0),
    )?;
    Ok(next)
}

fn find_faculty(conn: &Connection, id: i64) -> ServiceResult<Option<FacultyMember>> {
    let member = conn
        .query_row(
            &format!("SELECT {} FROM faculty WHERE id = ?1", COLUMNS),
            [id],
            row_to_faculty,
        )
        .map(Some)
        .or_else(not_found_as_none)?;
    Ok(member)
}

fn row_to_faculty(row: &rusqlite::Row) -> rusqlite::Result<FacultyMember> {
    Ok(FacultyMember {
        id: row.get(0)?,
        name: row.get(1)?,
        specialization: row.get(2)?,
        bio: row.get(3)?,
        experience: row.get(4)?,
        image: row.get(5)?,
        email: row.get(6)?,
        phone: row.get(7)?,
        qualifications: json_string_list(row.get(8)?),
        expertise_areas: json_string_list(row.get(9)?),
        order: row.get(10)?,
        is_active: row.get(11)?,
        created_at: row.get(12)?,
        updated_at: row.get(13)?,
    })
}
