//! Testimonial CRUD.

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::testimonial::{NewTestimonial, Testimonial, TestimonialChanges};
use crate::schema::testimonials;

pub async fn list_active(conn: &mut AsyncPgConnection) -> anyhow::Result<Vec<Testimonial>> {
    let results = testimonials::table
        .filter(testimonials::active.eq(true))
        .order((testimonials::sort_order.asc(), testimonials::id.asc()))
        .load::<Testimonial>(conn)
        .await?;
    Ok(results)
}

pub async fn list_featured(conn: &mut AsyncPgConnection) -> anyhow::Result<Vec<Testimonial>> {
    let results = testimonials::table
        .filter(testimonials::active.eq(true))
        .filter(testimonials::featured.eq(true))
        .order(testimonials::sort_order.asc())
        .load::<Testimonial>(conn)
        .await?;
    Ok(results)
}

pub async fn list_all(conn: &mut AsyncPgConnection) -> anyhow::Result<Vec<Testimonial>> {
    let results = testimonials::table
        .order(testimonials::id.asc())
        .load::<Testimonial>(conn)
        .await?;
    Ok(results)
}

pub async fn create(
    conn: &mut AsyncPgConnection,
    new_testimonial: NewTestimonial,
) -> anyhow::Result<Testimonial> {
    let result = diesel::insert_into(testimonials::table)
        .values(&new_testimonial)
        .get_result::<Testimonial>(conn)
        .await?;

    crate::metrics::content_edited("testimonial", "create");
    Ok(result)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: TestimonialChanges,
) -> anyhow::Result<Option<Testimonial>> {
    let result = diesel::update(testimonials::table.find(id))
        .set((&changes, testimonials::write_date.eq(Utc::now())))
        .get_result::<Testimonial>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("testimonial", "update");
    }
    Ok(result)
}

pub async fn delete(conn: &mut AsyncPgConnection, id: i64) -> anyhow::Result<bool> {
    let rows = diesel::delete(testimonials::table.find(id))
        .execute(conn)
        .await?;
    if rows > 0 {
        crate::metrics::content_edited("testimonial", "delete");
    }
    Ok(rows > 0)
}

pub async fn set_active(
    conn: &mut AsyncPgConnection,
    id: i64,
    active: bool,
) -> anyhow::Result<Option<Testimonial>> {
    let result = diesel::update(testimonials::table.find(id))
        .set((
            testimonials::active.eq(active),
            testimonials::write_date.eq(Utc::now()),
        ))
        .get_result::<Testimonial>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("testimonial", "toggle");
    }
    Ok(result)
}

pub async fn set_featured(
    conn: &mut AsyncPgConnection,
    id: i64,
    featured: bool,
) -> anyhow::Result<Option<Testimonial>> {
    let result = diesel::update(testimonials::table.find(id))
        .set((
            testimonials::featured.eq(featured),
            testimonials::write_date.eq(Utc::now()),
        ))
        .get_result::<Testimonial>(conn)
        .await
        .optional()?;

    if result.is_some() {
        crate::metrics::content_edited("testimonial", "toggle");
    }
    Ok(result)
}
