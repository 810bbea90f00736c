//! Image URL maintenance across the content tables.
//!
//! Used when moving media between hosts (CDN cutover, bucket rename). The
//! swap is a literal prefix rewrite: matching uses `left(...) = $1` rather
//! than LIKE, so `%` and `_` in a prefix carry no pattern meaning.

use diesel::sql_types::{BigInt, Text};
use diesel::QueryableByName;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

/// Every table with an `image_url` column.
const IMAGE_TABLES: &[&str] = &[
    "industries",
    "solutions",
    "states",
    "news_insights",
    "product_gallery",
];

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

fn swap_sql(table: &str) -> String {
    format!(
        "UPDATE {table} \
         SET image_url = $2 || substring(image_url from char_length($1) + 1), \
             write_date = NOW() \
         WHERE left(image_url, char_length($1)) = $1"
    )
}

fn audit_sql(table: &str) -> String {
    format!(
        "SELECT COUNT(*) AS count FROM {table} \
         WHERE image_url IS NOT NULL AND left(image_url, char_length($1)) <> $1"
    )
}

/// Rewrite `from` prefixes to `to` in every image_url column. Returns the
/// total number of rows updated.
pub async fn swap_host(
    conn: &mut AsyncPgConnection,
    from: &str,
    to: &str,
) -> eyre::Result<usize> {
    if from.is_empty() {
        eyre::bail!("--from prefix must not be empty");
    }

    let mut total = 0;
    for table in IMAGE_TABLES {
        let updated = diesel::sql_query(swap_sql(table))
            .bind::<Text, _>(from)
            .bind::<Text, _>(to)
            .execute(conn)
            .await?;

        tracing::info!(table, updated, "Rewrote image host");
        total += updated;
    }

    println!("updated {total} image URLs ({from} -> {to})");
    Ok(total)
}

/// Count image URLs per table that do not start with the expected prefix.
pub async fn audit(conn: &mut AsyncPgConnection, expect: &str) -> eyre::Result<usize> {
    let mut stray = 0;
    for table in IMAGE_TABLES {
        let row: CountRow = diesel::sql_query(audit_sql(table))
            .bind::<Text, _>(expect)
            .get_result(conn)
            .await?;

        if row.count > 0 {
            println!("{table}: {} image URLs outside {expect}", row.count);
        }
        stray += row.count as usize;
    }

    if stray == 0 {
        println!("all image URLs start with {expect}");
    }
    Ok(stray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match_is_literal_not_a_pattern() {
        // A prefix like "https://cdn.example.com/100%_images" must only match
        // itself, so the statements compare the leading substring directly.
        for table in IMAGE_TABLES {
            let swap = swap_sql(table);
            let audit = audit_sql(table);
            assert!(swap.contains("left(image_url, char_length($1)) = $1"), "{swap}");
            assert!(audit.contains("left(image_url, char_length($1)) <> $1"), "{audit}");
            assert!(!swap.to_lowercase().contains(" like "), "{swap}");
            assert!(!audit.to_lowercase().contains(" like "), "{audit}");
        }
    }

    #[test]
    fn statements_target_each_image_table() {
        assert!(swap_sql("industries").starts_with("UPDATE industries "));
        assert!(audit_sql("product_gallery").contains("FROM product_gallery "));
    }
}
