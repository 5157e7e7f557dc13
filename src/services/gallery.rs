use crate::models::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use crate::services::blogs::not_found_as_none;
use crate::services::error::{ServiceError, ServiceResult};
use crate::services::faculty::next_order;
use crate::services::validate::{non_negative, optional_text, required_text, Errors};
use crate::Database;
use rusqlite::Connection;

const COLUMNS: &str =
    "id, title, category, image, description, \"order\", is_featured, created_at, updated_at";

pub fn list_gallery(db: &Database) -> ServiceResult<Vec<GalleryItem>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM gallery ORDER BY \"order\", created_at DESC, id DESC",
        COLUMNS
    ))?;
    let items = stmt
        .query_map([], row_to_item)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items)
}

pub fn get_gallery_item(db: &Database, id: i64) -> ServiceResult<GalleryItem> {
    let conn = db.get()?;
    find_item(&conn, id)?.ok_or(ServiceError::NotFound("Gallery item"))
}

pub fn create_gallery_item(db: &Database, input: CreateGalleryItem) -> ServiceResult<GalleryItem> {
    let mut errors = Errors::new();
    let title = required_text(&mut errors, "title", input.title.as_deref(), 255);
    let category = required_text(&mut errors, "category", input.category.as_deref(), 255);
    let image = required_text(&mut errors, "image", input.image.as_deref(), 0);
    let description = optional_text(&mut errors, "description", input.description.as_deref(), 0);
    let order = non_negative(&mut errors, "order", input.order);
    let is_featured = input.is_featured.unwrap_or(false);
    errors.into_result()?;

    let mut conn = db.get()?;
    let tx = conn.transaction()?;
    let order = match order {
        Some(o) => o,
        None => next_order(&tx, "gallery")?,
    };

    tx.execute(
        "INSERT INTO gallery (title, category, image, description, \"order\", is_featured) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![title, category, image, description, order, is_featured],
    )?;
    let id = tx.last_insert_rowid();
    let item = find_item(&tx, id)?.ok_or(ServiceError::NotFound("Gallery item"))?;
    tx.commit()?;

    Ok(item)
}

pub fn update_gallery_item(
    db: &Database,
    id: i64,
    input: UpdateGalleryItem,
) -> ServiceResult<GalleryItem> {
    let conn = db.get()?;
    let current = find_item(&conn, id)?.ok_or(ServiceError::NotFound("Gallery item"))?;

    let mut errors = Errors::new();
    let title = input
        .title
        .as_deref()
        .map(|v| required_text(&mut errors, "title", Some(v), 255));
    let category = input
        .category
        .as_deref()
        .map(|v| required_text(&mut errors, "category", Some(v), 255));
    let image = input
        .image
        .as_deref()
        .map(|v| required_text(&mut errors, "image", Some(v), 0));
    let description = optional_text(&mut errors, "description", input.description.as_deref(), 0);
    let order = non_negative(&mut errors, "order", input.order);
    errors.into_result()?;

    let title = title.unwrap_or(current.title);
    let category = category.unwrap_or(current.category);
    let image = image.unwrap_or(current.image);
    let description = description.or(current.description);
    let order = order.unwrap_or(current.order);
    let is_featured = input.is_featured.unwrap_or(current.is_featured);

    conn.execute(
        "UPDATE gallery SET title = ?1, category = ?2, image = ?3, description = ?4, \
         \"order\" = ?5, is_featured = ?6, updated_at = CURRENT_TIMESTAMP WHERE id = ?7",
        rusqlite::params![title, category, image, description, order, is_featured, current.id],
    )?;

    find_item(&conn, current.id)?.ok_or(ServiceError::NotFound("Gallery item"))
}

pub fn delete_gallery_item(db: &Database, id: i64) -> ServiceResult<()> {
    let conn = db.get()?;
    let item = find_item(&conn, id)?.ok_or(ServiceError::NotFound("Gallery item"))?;
    conn.execute("DELETE FROM gallery WHERE id = ?", [item.id])?;
    Ok(())
}

pub fn count_gallery(db: &Database) -> ServiceResult<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM gallery", [], |row| row.get(0))?;
    Ok(count)
}

fn find_item(conn: &Connection, id: i64) -> ServiceResult<Option<GalleryItem>> {
    let item = conn
        .query_row(
            &format!("SELECT {} FROM gallery WHERE id = ?1", COLUMNS),
            [id],
            row_to_item,
        )
        .map(Some)
        .or_else(not_found_as_none)?;
    Ok(item)
}

fn row_to_item(row: &rusqlite::Row) -> rusqlite::Result<GalleryItem> {
    Ok(GalleryItem {
        id: row.get(0)?,
        title: row.get(1)?,
        category: row.get(2)?,
        image: row.get(3)?,
        description: row.get(4)?,
        order: row.get(5)?,
        is_featured: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}
