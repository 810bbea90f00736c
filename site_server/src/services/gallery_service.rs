//! Product gallery CRUD.

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::gallery::{GalleryItem, GalleryItemChanges, NewGalleryItem};
use crate::schema::product_gallery;

/// Active gallery items in display order, optionally by category.
pub async fn list_active(
    conn: &mut AsyncPgConnection,
    category: Option<&str>,
) -> anyhow::Result<Vec<GalleryItem>> {
    let mut query = product_gallery::table
        .filter(product_gallery::active.eq(true))
        .order((product_gallery::sort_order.asc(), product_gallery::id.asc()))
        .into_boxed();
    if let Some(category) = category {
        query = query.filter(product_gallery::category.eq(category.to_string()));
    }
    let results = query.load::<GalleryItem>(conn).await?;
    Ok(results)
}

pub async fn list_all(conn: &mut AsyncPgConnection) -> anyhow::Result<Vec<GalleryItem>> {
    let results = product_gallery::table
        .order(product_gallery::id.asc())
        .load::<GalleryItem>(conn)
        .await?;
    Ok(results)
}

pub async fn create(
    conn: &mut AsyncPgConnection,
    new_item: NewGalleryItem,
) -> anyhow::Result<GalleryItem> {
    let result = diesel::insert_into(product_gallery::table)
        .values(&new_item)
        .get_result::<GalleryItem>(conn)
        .await?;

    crate::metrics::content_edited("gallery", "create");
    Ok(result)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: GalleryItemChanges,
) -> anyhow::Result<Option<GalleryItem>> {
    let result = diesel::update(product_gallery::table.find(id))
        .set((&changes, product_gallery::write_date.eq(Utc::now())))
        .get_result::<GalleryItem>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("gallery", "update");
    }
    Ok(result)
}

pub async fn delete(conn: &mut AsyncPgConnection, id: i64) -> anyhow::Result<bool> {
    let rows = diesel::delete(product_gallery::table.find(id))
        .execute(conn)
        .await?;
    if rows > 0 {
        crate::metrics::content_edited("gallery", "delete");
    }
    Ok(rows > 0)
}

pub async fn set_active(
    conn: &mut AsyncPgConnection,
    id: i64,
    active: bool,
) -> anyhow::Result<Option<GalleryItem>> {
    let result = diesel::update(product_gallery::table.find(id))
        .set((
            product_gallery::active.eq(active),
            product_gallery::write_date.eq(Utc::now()),
        ))
        .get_result::<GalleryItem>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("gallery", "toggle");
    }
    Ok(result)
}
