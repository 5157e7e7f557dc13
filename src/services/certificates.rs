use crate::models::{Certificate, CreateCertificate, UpdateCertificate};
use crate::services::blogs::not_found_as_none;
use crate::services::error::{ServiceError, ServiceResult};
use crate::services::faculty::next_order;
use crate::services::validate::{non_negative, optional_date, optional_text, required_text, Errors};
use crate::Database;
use rusqlite::Connection;

const COLUMNS: &str = "id, title, issuer, year, image, description, certificate_number, \
     issue_date, expiry_date, \"order\", is_featured, created_at, updated_at";

pub fn list_certificates(db: &Database) -> ServiceResult<Vec<Certificate>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM certificates ORDER BY \"order\", created_at DESC, id DESC",
        COLUMNS
    ))?;
    let certificates = stmt
        .query_map([], row_to_certificate)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(certificates)
}

pub fn get_certificate(db: &Database, id: i64) -> ServiceResult<Certificate> {
    let conn = db.get()?;
    find_certificate(&conn, id)?.ok_or(ServiceError::NotFound("Certificate"))
}

pub fn create_certificate(db: &Database, input: CreateCertificate) -> ServiceResult<Certificate> {
    let mut errors = Errors::new();
    let title = required_text(&mut errors, "title", input.title.as_deref(), 255);
    let issuer = required_text(&mut errors, "issuer", input.issuer.as_deref(), 255);
    let year = required_text(&mut errors, "year", input.year.as_deref(), 10);
    let image = optional_text(&mut errors, "image", input.image.as_deref(), 0);
    let description = optional_text(&mut errors, "description", input.description.as_deref(), 0);
    let certificate_number = optional_text(
        &mut errors,
        "certificate_number",
        input.certificate_number.as_deref(),
        255,
    );
    let issue_date = optional_date(&mut errors, "issue_date", input.issue_date.as_deref());
    let expiry_date = optional_date(&mut errors, "expiry_date", input.expiry_date.as_deref());
    let order = non_negative(&mut errors, "order", input.order);
    let is_featured = input.is_featured.unwrap_or(false);
    errors.into_result()?;

    let mut conn = db.get()?;
    let tx = conn.transaction()?;
    let order = match order {
        Some(o) => o,
        None => next_order(&tx, "certificates")?,
    };

    tx.execute(
        "INSERT INTO certificates (title, issuer, year, image, description, certificate_number, \
         issue_date, expiry_date, \"order\", is_featured) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        rusqlite::params![
            title,
            issuer,
            year,
            image,
            description,
            certificate_number,
            issue_date,
            expiry_date,
            order,
            is_featured,
        ],
    )?;
    let id = tx.last_insert_rowid();
    let certificate = find_certificate(&tx, id)?.ok_or(ServiceError::NotFound("Certificate"))?;
    tx.commit()?;

    Ok(certificate)
}

pub fn update_certificate(
    db: &Database,
    id: i64,
    input: UpdateCertificate,
) -> ServiceResult<Certificate> {
    let conn = db.get()?;
    let current = find_certificate(&conn, id)?.ok_or(ServiceError::NotFound("Certificate"))?;

    let mut errors = Errors::new();
    let title = input
        .title
        .as_deref()
        .map(|v| required_text(&mut errors, "title", Some(v), 255));
    let issuer = input
        .issuer
        .as_deref()
        .map(|v| required_text(&mut errors, "issuer", Some(v), 255));
    let year = input
        .year
        .as_deref()
        .map(|v| required_text(&mut errors, "year", Some(v), 10));
    let image = optional_text(&mut errors, "image", input.image.as_deref(), 0);
    let description = optional_text(&mut errors, "description", input.description.as_deref(), 0);
    let certificate_number = optional_text(
        &mut errors,
        "certificate_number",
        input.certificate_number.as_deref(),
        255,
    );
    let issue_date = optional_date(&mut errors, "issue_date", input.issue_date.as_deref());
    let expiry_date = optional_date(&mut errors, "expiry_date", input.expiry_date.as_deref());
    let order = non_negative(&mut errors, "order", input.order);
    errors.into_result()?;

    let title = title.unwrap_or(current.title);
    let issuer = issuer.unwrap_or(current.issuer);
    let year = year.unwrap_or(current.year);
    let image = image.or(current.image);
    let description = description.or(current.description);
    let certificate_number = certificate_number.or(current.certificate_number);
    let issue_date = issue_date.or(current.issue_date);
    let expiry_date = expiry_date.or(current.expiry_date);
    let order = order.unwrap_or(current.order);
    let is_featured = input.is_featured.unwrap_or(current.is_featured);

    conn.execute(
        "UPDATE certificates SET title = ?1, issuer = ?2, year = ?3, image = ?4, \
         description = ?5, certificate_number = ?6, issue_date = ?7, expiry_date = ?8, \
         \"order\" = ?9, is_featured = ?10, updated_at = CURRENT_TIMESTAMP WHERE id = ?11",
        rusqlite::params![
            title,
            issuer,
            year,
            image,
            description,
            certificate_number,
            issue_date,
            expiry_date,
            order,
            is_featured,
            current.id,
        ],
    )?;

    find_certificate(&conn, current.id)?.ok_or(ServiceError::NotFound("Certificate"))
}

pub fn delete_certificate(db: &Database, id: i64) -> ServiceResult<()> {
    let conn = db.get()?;
    let certificate = find_certificate(&conn, id)?.ok_or(ServiceError::NotFound("Certificate"))?;
    conn.execute("DELETE FROM certificates WHERE id = ?", [certificate.id])?;
    Ok(())
}

pub fn count_certificates(db: &Database) -> ServiceResult<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM certificates", [], |row| row.get(0))?;
    Ok(count)
}

fn find_certificate(conn: &Connection, id: i64) -> ServiceResult<Option<Certificate>> {
    let certificate = conn
        .query_row(
            &format!("SELECT {} FROM certificates WHERE id = ?1", COLUMNS),
            [id],
            row_to_certificate,
        )
        .map(Some)
        .or_else(not_found_as_none)?;
    Ok(certificate)
}

fn row_to_certificate(row: &rusqlite::Row) -> rusqlite::Result<Certificate> {
    Ok(Certificate {
        id: row.get(0)?,
        title: row.get(1)?,
        issuer: row.get(2)?,
        year: row.get(3)?,
        image: row.get(4)?,
        description: row.get(5)?,
        certificate_number: row.get(6)?,
        issue_date: row.get(7)?,
        expiry_date: row.get(8)?,
        order: row.get(9)?,
        is_featured: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}
