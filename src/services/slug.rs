use crate::services::error::{ServiceError, ServiceResult};
use crate::services::sanitize::strip_tags;
use rusqlite::Connection;
use slug::slugify;

/// Lookup capability for existing slugs of one resource collection.
/// Implemented for closures so the resolver stays pure over its inputs.
pub trait SlugLookup {
    /// Number of records whose slug equals `slug`, excluding `exclude_id`.
    fn count_matching(&self, slug: &str, exclude_id: Option<i64>) -> ServiceResult<i64>;
}

impl<F> SlugLookup for F
where
    F: Fn(&str, Option<i64>) -> ServiceResult<i64>,
{
    fn count_matching(&self, slug: &str, exclude_id: Option<i64>) -> ServiceResult<i64> {
        self(slug, exclude_id)
    }
}

/// Normalize a display title to its base slug: tags stripped, trimmed,
/// lowercased, non-alphanumeric runs collapsed to single hyphens.
pub fn slug_base(title: &str) -> ServiceResult<String> {
    let base = slugify(strip_tags(title).trim());
    if base.is_empty() {
        return Err(ServiceError::InvalidTitle);
    }
    Ok(base)
}

/// Resolve a unique slug for `title` against the supplied lookup. If the base
/// slug collides, appends `-(count + 1)`. Best-effort: the suffixed slug is
/// not re-checked; the schema's UNIQUE index is the backstop.
pub fn resolve_slug(
    title: &str,
    lookup: &impl SlugLookup,
    exclude_id: Option<i64>,
) -> ServiceResult<String> {
    let base = slug_base(title)?;
    let count = lookup.count_matching(&base, exclude_id)?;
    if count > 0 {
        Ok(format!("{}-{}", base, count + 1))
    } else {
        Ok(base)
    }
}

/// Bump the numeric suffix on a resolved slug, used when the UNIQUE backstop
/// rejects a write and the insert is retried once.
pub fn increment_suffix(slug: &str) -> String {
    if let Some((stem, tail)) = slug.rsplit_once('-') {
        if let Ok(n) = tail.parse::<u64>() {
            return format!("{}-{}", stem, n + 1);
        }
    }
    format!("{}-2", slug)
}

pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > 200 {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Shared `count where slug = ?` query. `table` is always a static name from
/// this crate, never caller input.
pub fn count_slug_matches(
    conn: &Connection,
    table: &str,
    slug: &str,
    exclude_id: Option<i64>,
) -> ServiceResult<i64> {
    let count = match exclude_id {
        Some(id) => conn.query_row(
            &format!("SELECT COUNT(*) FROM {} WHERE slug = ?1 AND id != ?2", table),
            rusqlite::params![slug, id],
            |row| row.get(0),
        )?,
        None => conn.query_row(
            &format!("SELECT COUNT(*) FROM {} WHERE slug = ?1", table),
            [slug],
            |row| row.get(0),
        )?,
    };
    Ok(count)
}
