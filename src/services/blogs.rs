use crate::models::{Blog, CreateBlog, UpdateBlog};
use crate::services::error::{is_unique_violation, ServiceError, ServiceResult};
use crate::services::reading_time::read_time_label;
use crate::services::sanitize::sanitize_string_list;
use crate::services::slug::{count_slug_matches, increment_suffix, resolve_slug, slug_base};
use crate::services::validate::{optional_date, optional_text, required_rich_text, required_text, Errors};
use crate::Database;
use rusqlite::Connection;

const COLUMNS: &str = "id, title, slug, excerpt, content, image, category, read_time, \
     published_at, author_name, author_image, author_role, tags, created_at, updated_at";

pub fn list_blogs(db: &Database) -> ServiceResult<Vec<Blog>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM blogs ORDER BY created_at DESC, id DESC",
        COLUMNS
    ))?;
    let blogs = stmt
        .query_map([], row_to_blog)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blogs)
}

/// Dual-key lookup: `key` matches either the numeric id or the slug.
pub fn get_blog(db: &Database, key: &str) -> ServiceResult<Blog> {
    let conn = db.get()?;
    find_blog(&conn, key)?.ok_or(ServiceError::NotFound("Blog"))
}

pub fn create_blog(db: &Database, input: CreateBlog) -> ServiceResult<Blog> {
    let mut errors = Errors::new();
    let title = required_text(&mut errors, "title", input.title.as_deref(), 255);
    let excerpt = required_rich_text(&mut errors, "excerpt", input.excerpt.as_deref());
    let content = required_rich_text(&mut errors, "content", input.content.as_deref());
    let category = required_text(&mut errors, "category", input.category.as_deref(), 255);
    let image = optional_text(&mut errors, "image", input.image.as_deref(), 0);
    let published_at = optional_date(&mut errors, "published_at", input.published_at.as_deref());
    let author_name = optional_text(&mut errors, "author_name", input.author_name.as_deref(), 255)
        .unwrap_or_else(|| "Admin".to_string());
    let author_image = optional_text(&mut errors, "author_image", input.author_image.as_deref(), 0);
    let author_role = optional_text(&mut errors, "author_role", input.author_role.as_deref(), 255);
    let tags = input
        .tags
        .as_ref()
        .map(sanitize_string_list)
        .unwrap_or_default();
    errors.into_result()?;

    let read_time = read_time_label(&content);

    let conn = db.get()?;
    let slug = resolve_slug(
        &title,
        &|s: &str, ex: Option<i64>| count_slug_matches(&conn, "blogs", s, ex),
        None,
    )?;

    let insert = |slug: &str| -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO blogs (title, slug, excerpt, content, image, category, read_time, \
             published_at, author_name, author_image, author_role, tags) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            rusqlite::params![
                title,
                slug,
                excerpt,
                content,
                image,
                category,
                read_time,
                published_at,
                author_name,
                author_image,
                author_role,
                serde_json::to_string(&tags).unwrap_or_else(|_| "[]".into()),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    };

    // Concurrent creations can race past the count check; the UNIQUE index
    // rejects the loser and we retry once with a bumped suffix.
    let id = match insert(&slug) {
        Ok(id) => id,
        Err(e) if is_unique_violation(&e) => insert(&increment_suffix(&slug))?,
        Err(e) => return Err(e.into()),
    };

    find_blog_by_id(&conn, id)?.ok_or(ServiceError::NotFound("Blog"))
}

pub fn update_blog(db: &Database, key: &str, input: UpdateBlog) -> ServiceResult<Blog> {
    let conn = db.get()?;
    let current = find_blog(&conn, key)?.ok_or(ServiceError::NotFound("Blog"))?;

    let mut errors = Errors::new();
    let title = input
        .title
        .as_deref()
        .map(|v| required_text(&mut errors, "title", Some(v), 255));
    let excerpt = input
        .excerpt
        .as_deref()
        .map(|v| required_rich_text(&mut errors, "excerpt", Some(v)));
    let content = input
        .content
        .as_deref()
        .map(|v| required_rich_text(&mut errors, "content", Some(v)));
    let category = input
        .category
        .as_deref()
        .map(|v| required_text(&mut errors, "category", Some(v), 255));
    let image = optional_text(&mut errors, "image", input.image.as_deref(), 0);
    let published_at = optional_date(&mut errors, "published_at", input.published_at.as_deref());
    let author_name = optional_text(&mut errors, "author_name", input.author_name.as_deref(), 255);
    let author_image = optional_text(&mut errors, "author_image", input.author_image.as_deref(), 0);
    let author_role = optional_text(&mut errors, "author_role", input.author_role.as_deref(), 255);
    errors.into_result()?;

    // Slug is only recomputed when a title arrives and its base slug differs
    // from what is stored, so no-op title edits never churn the suffix.
    let mut slug = current.slug.clone();
    if let Some(ref new_title) = title {
        let base = slug_base(new_title)?;
        if base != current.slug {
            slug = resolve_slug(
                new_title,
                &|s: &str, ex: Option<i64>| count_slug_matches(&conn, "blogs", s, ex),
                Some(current.id),
            )?;
        }
    }

    let content_changed = content.is_some();
    let title = title.unwrap_or(current.title);
    let excerpt = excerpt.unwrap_or(current.excerpt);
    let content = content.unwrap_or(current.content);
    let category = category.unwrap_or(current.category);
    let image = image.or(current.image);
    let published_at = published_at.or(current.published_at);
    let author_name = author_name.unwrap_or(current.author_name);
    let author_image = author_image.or(current.author_image);
    let author_role = author_role.or(current.author_role);
    let tags = match input.tags.as_ref() {
        Some(value) => sanitize_string_list(value),
        None => current.tags,
    };

    let read_time = if content_changed {
        read_time_label(&content)
    } else {
        current.read_time
    };

    conn.execute(
        "UPDATE blogs SET title = ?1, slug = ?2, excerpt = ?3, content = ?4, image = ?5, \
         category = ?6, read_time = ?7, published_at = ?8, author_name = ?9, author_image = ?10, \
         author_role = ?11, tags = ?12, updated_at = CURRENT_TIMESTAMP WHERE id = ?13",
        rusqlite::params![
            title,
            slug,
            excerpt,
            content,
            image,
            category,
            read_time,
            published_at,
            author_name,
            author_image,
            author_role,
            serde_json::to_string(&tags).unwrap_or_else(|_| "[]".into()),
            current.id,
        ],
    )?;

    find_blog_by_id(&conn, current.id)?.ok_or(ServiceError::NotFound("Blog"))
}

pub fn delete_blog(db: &Database, key: &str) -> ServiceResult<()> {
    let conn = db.get()?;
    let blog = find_blog(&conn, key)?.ok_or(ServiceError::NotFound("Blog"))?;
    conn.execute("DELETE FROM blogs WHERE id = ?", [blog.id])?;
    Ok(())
}

pub fn count_blogs(db: &Database) -> ServiceResult<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM blogs", [], |row| row.get(0))?;
    Ok(count)
}

fn find_blog(conn: &Connection, key: &str) -> ServiceResult<Option<Blog>> {
    let blog = conn
        .query_row(
            &format!("SELECT {} FROM blogs WHERE id = ?1 OR slug = ?1", COLUMNS),
            [key],
            row_to_blog,
        )
        .map(Some)
        .or_else(not_found_as_none)?;
    Ok(blog)
}

fn find_blog_by_id(conn: &Connection, id: i64) -> ServiceResult<Option<Blog>> {
    let blog = conn
        .query_row(
            &format!("SELECT {} FROM blogs WHERE id = ?1", COLUMNS),
            [id],
            row_to_blog,
        )
        .map(Some)
        .or_else(not_found_as_none)?;
    Ok(blog)
}

pub(crate) fn not_found_as_none<T>(err: rusqlite::Error) -> Result<Option<T>, rusqlite::Error> {
    match err {
        rusqlite::Error::QueryReturnedNoRows => Ok(None),
        other => Err(other),
    }
}

pub(crate) fn json_string_list(raw: String) -> Vec<String> {
    serde_json::from_str(&raw).unwrap_or_default()
}

fn row_to_blog(row: &rusqlite::Row) -> rusqlite::Result<Blog> {
    Ok(Blog {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        excerpt: row.get(3)?,
        content: row.get(4)?,
        image: row.get(5)?,
        category: row.get(6)?,
        read_time: row.get(7)?,
        published_at: row.get(8)?,
        author_name: row.get(9)?,
        author_image: row.get(10)?,
        author_role: row.get(11)?,
        tags: json_string_list(row.get(12)?),
        created_at: row.get(13)?,
        updated_at: row.get(14)?,
    })
}
