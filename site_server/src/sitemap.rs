//! Sitemap generation from the content store.

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::industry::Industry;
use crate::models::news::NewsInsight;
use crate::models::solution::Solution;
use crate::models::state::StatePage;
use crate::schema::{industries, news_insights, solutions, states};

/// Fixed entries present in every sitemap: path, changefreq, priority.
pub const STATIC_PAGES: &[(&str, &str, &str)] = &[
    ("", "weekly", "1.0"),
    ("about", "monthly", "0.7"),
    ("contact", "monthly", "0.7"),
    ("quote", "monthly", "0.8"),
    ("solutions", "weekly", "0.9"),
    ("industries", "weekly", "0.8"),
    ("locations", "weekly", "0.8"),
    ("resources", "weekly", "0.8"),
    ("gallery", "monthly", "0.6"),
];

#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
    pub changefreq: &'static str,
    pub priority: &'static str,
}

/// Escape the five XML-reserved characters for use in element text.
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Assemble all sitemap entries: fixed static pages plus one entry per active
/// content row.
pub fn collect_entries(
    base_url: &str,
    industry_rows: &[Industry],
    solution_rows: &[Solution],
    state_rows: &[StatePage],
    news_rows: &[NewsInsight],
) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let mut entries = Vec::new();

    for (path, changefreq, priority) in STATIC_PAGES {
        let loc = if path.is_empty() {
            format!("{base}/")
        } else {
            format!("{base}/{path}")
        };
        entries.push(SitemapEntry {
            loc,
            lastmod: None,
            changefreq,
            priority,
        });
    }

    for row in industry_rows {
        entries.push(SitemapEntry {
            loc: format!("{base}/industries/{}", row.slug),
            lastmod: row.write_date.map(|d| d.date_naive()),
            changefreq: "weekly",
            priority: "0.7",
        });
    }
    for row in solution_rows {
        entries.push(SitemapEntry {
            loc: format!("{base}/solutions/{}", row.slug),
            lastmod: row.write_date.map(|d| d.date_naive()),
            changefreq: "weekly",
            priority: "0.7",
        });
    }
    for row in state_rows {
        entries.push(SitemapEntry {
            loc: format!("{base}/locations/{}", row.slug),
            lastmod: row.write_date.map(|d| d.date_naive()),
            changefreq: "weekly",
            priority: "0.6",
        });
    }
    for row in news_rows {
        entries.push(SitemapEntry {
            loc: format!("{base}/resources/{}", row.slug),
            lastmod: Some(row.published_at.date_naive()),
            changefreq: "monthly",
            priority: "0.5",
        });
    }

    entries
}

/// Render entries as an XML sitemap document.
pub fn render(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&entry.loc)));
        if let Some(lastmod) = entry.lastmod {
            xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        }
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.changefreq
        ));
        xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Query active content rows and produce the sitemap document.
pub async fn build(conn: &mut AsyncPgConnection, base_url: &str) -> anyhow::Result<String> {
    let industry_rows: Vec<Industry> = industries::table
        .filter(industries::active.eq(true))
        .order(industries::slug.asc())
        .load(conn)
        .await?;
    let solution_rows: Vec<Solution> = solutions::table
        .filter(solutions::active.eq(true))
        .order(solutions::slug.asc())
        .load(conn)
        .await?;
    let state_rows: Vec<StatePage> = states::table
        .filter(states::active.eq(true))
        .order(states::slug.asc())
        .load(conn)
        .await?;
    let news_rows: Vec<NewsInsight> = news_insights::table
        .filter(news_insights::active.eq(true))
        .order(news_insights::published_at.desc())
        .load(conn)
        .await?;

    let entries = collect_entries(base_url, &industry_rows, &solution_rows, &state_rows, &news_rows);
    crate::metrics::sitemap_rendered(entries.len());
    Ok(render(&entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn industry(slug: &str, active: bool) -> Industry {
        Industry {
            id: 1,
            slug: slug.to_string(),
            name: slug.to_string(),
            headline: String::new(),
            summary: String::new(),
            body: String::new(),
            image_url: None,
            meta_title: None,
            meta_description: None,
            featured: false,
            sort_order: 0,
            active,
            create_date: None,
            write_date: Some(Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap()),
        }
    }

    fn news(slug: &str) -> NewsInsight {
        NewsInsight {
            id: 1,
            slug: slug.to_string(),
            title: "Title & More".to_string(),
            excerpt: String::new(),
            body: String::new(),
            image_url: None,
            category: "news".to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 4, 15, 8, 0, 0).unwrap(),
            featured: false,
            active: true,
            create_date: None,
            write_date: None,
        }
    }

    #[test]
    fn one_url_per_row_plus_static_entries() {
        let rows = vec![industry("construction", true), industry("education", true)];
        let entries = collect_entries("https://example.com", &rows, &[], &[], &[]);
        assert_eq!(entries.len(), STATIC_PAGES.len() + 2);

        let xml = render(&entries);
        assert_eq!(xml.matches("<url>").count(), entries.len());
        assert_eq!(xml.matches("</url>").count(), entries.len());
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<loc>https://example.com/industries/construction</loc>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn lastmod_is_emitted_when_known() {
        let entries = collect_entries("https://example.com", &[], &[], &[], &[news("a")]);
        let xml = render(&entries);
        assert!(xml.contains("<lastmod>2025-04-15</lastmod>"));
    }

    #[test]
    fn trailing_slash_on_base_is_normalized() {
        let entries = collect_entries("https://example.com/", &[industry("x", true)], &[], &[], &[]);
        assert!(entries
            .iter()
            .any(|e| e.loc == "https://example.com/industries/x"));
        assert!(entries.iter().any(|e| e.loc == "https://example.com/"));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(xml_escape("a&b<c>"), "a&amp;b&lt;c&gt;");
        assert_eq!(xml_escape("\"q\" 'a'"), "&quot;q&quot; &apos;a&apos;");
    }
}
