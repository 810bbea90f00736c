//! Content population — base rows for states, industries, solutions and the
//! default AI configuration.
//!
//! Idempotent: every insert is ON CONFLICT DO NOTHING, so the populate
//! endpoints and the boot-time seeding can run any number of times.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::ai_config::{NewAiConfiguration, WEATHER_DELIVERY_CONFIG};
use crate::models::industry::NewIndustry;
use crate::models::solution::NewSolution;
use crate::models::state::NewStatePage;
use crate::schema::{ai_configurations, industries, solutions, states};

/// Lowercase, hyphen-separated slug from a display name.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Seed the service-area state pages. Returns the number of rows inserted.
pub async fn seed_states(conn: &mut AsyncPgConnection) -> anyhow::Result<usize> {
    let state_rows: Vec<(&str, &str, &str)> = vec![
        ("AZ", "Arizona", "Modular buildings delivered across Arizona"),
        ("CA", "California", "Modular buildings delivered across California"),
        ("CO", "Colorado", "Modular buildings delivered across Colorado"),
        ("FL", "Florida", "Modular buildings delivered across Florida"),
        ("GA", "Georgia", "Modular buildings delivered across Georgia"),
        ("ID", "Idaho", "Modular buildings delivered across Idaho"),
        ("NC", "North Carolina", "Modular buildings delivered across North Carolina"),
        ("NM", "New Mexico", "Modular buildings delivered across New Mexico"),
        ("NV", "Nevada", "Modular buildings delivered across Nevada"),
        ("OK", "Oklahoma", "Modular buildings delivered across Oklahoma"),
        ("OR", "Oregon", "Modular buildings delivered across Oregon"),
        ("TX", "Texas", "Modular buildings delivered across Texas"),
        ("UT", "Utah", "Modular buildings delivered across Utah"),
        ("WA", "Washington", "Modular buildings delivered across Washington"),
    ];

    let rows: Vec<NewStatePage> = state_rows
        .iter()
        .map(|(code, name, headline)| NewStatePage {
            code: code.to_string(),
            slug: slugify(name),
            name: name.to_string(),
            headline: headline.to_string(),
            summary: format!(
                "Office trailers, modular classrooms and storage solutions \
                 available for rent or purchase throughout {name}."
            ),
            body: String::new(),
            image_url: None,
            meta_title: Some(format!("Modular Buildings in {name} | ModSite")),
            meta_description: Some(format!(
                "Rent or buy modular buildings in {name}. Fast delivery, flexible terms."
            )),
            service_area: true,
        })
        .collect();

    let inserted = diesel::insert_into(states::table)
        .values(&rows)
        .on_conflict(states::code)
        .do_nothing()
        .execute(conn)
        .await?;

    tracing::info!(inserted, "Seeded state pages");
    Ok(inserted)
}

/// Seed the industry vertical pages. Returns the number of rows inserted.
pub async fn seed_industries(conn: &mut AsyncPgConnection) -> anyhow::Result<usize> {
    let industry_rows: Vec<(&str, &str, &str)> = vec![
        (
            "Construction",
            "Job site offices that move with the project",
            "Field offices, plan rooms and secure storage for general contractors and trades.",
        ),
        (
            "Education",
            "Classroom space without the construction timeline",
            "Modular classrooms and administrative buildings for districts and campuses.",
        ),
        (
            "Healthcare",
            "Clinical space, delivered",
            "Exam rooms, screening stations and administrative annexes for health systems.",
        ),
        (
            "Government",
            "Compliant space for public agencies",
            "Office and support buildings meeting federal and state procurement requirements.",
        ),
        (
            "Retail",
            "Pop-up and seasonal retail space",
            "Sales offices and seasonal storefronts placed where the customers are.",
        ),
        (
            "Energy",
            "Remote site support buildings",
            "Crew quarters, control rooms and offices for utility and energy projects.",
        ),
        (
            "Agriculture",
            "Farm offices and seasonal crew facilities",
            "Scale houses, farm offices and seasonal worker support buildings.",
        ),
        (
            "Events",
            "Temporary space for events of any size",
            "Ticket booths, production offices and hospitality units for event producers.",
        ),
    ];

    let rows: Vec<NewIndustry> = industry_rows
        .iter()
        .enumerate()
        .map(|(i, (name, headline, summary))| NewIndustry {
            slug: slugify(name),
            name: name.to_string(),
            headline: headline.to_string(),
            summary: summary.to_string(),
            body: String::new(),
            image_url: None,
            meta_title: Some(format!("{name} Modular Buildings | ModSite")),
            meta_description: Some(summary.to_string()),
            featured: i < 4,
            sort_order: i as i32 * 10,
        })
        .collect();

    let inserted = diesel::insert_into(industries::table)
        .values(&rows)
        .on_conflict(industries::slug)
        .do_nothing()
        .execute(conn)
        .await?;

    tracing::info!(inserted, "Seeded industry pages");
    Ok(inserted)
}

/// Seed the building solution pages. Returns the number of rows inserted.
pub async fn seed_solutions(conn: &mut AsyncPgConnection) -> anyhow::Result<usize> {
    let solution_rows: Vec<(&str, &str, &str, Option<i64>)> = vec![
        (
            "Office Trailers",
            "rental",
            "Single and double-wide site offices, ready in days",
            Some(45_000),
        ),
        (
            "Modular Classrooms",
            "rental",
            "DSA and state-approved classroom buildings",
            Some(95_000),
        ),
        (
            "Storage Containers",
            "rental",
            "Ground-level secure storage, 10 to 40 feet",
            Some(12_500),
        ),
        (
            "Restroom Buildings",
            "rental",
            "Self-contained restroom and shower units",
            Some(38_000),
        ),
        (
            "Guard Booths",
            "sale",
            "Access-control booths for gates and checkpoints",
            Some(1_450_000),
        ),
        (
            "Modular Complexes",
            "sale",
            "Multi-unit buildings engineered to your plan",
            None,
        ),
    ];

    let rows: Vec<NewSolution> = solution_rows
        .iter()
        .enumerate()
        .map(|(i, (name, category, headline, price))| NewSolution {
            slug: slugify(name),
            name: name.to_string(),
            category: category.to_string(),
            headline: headline.to_string(),
            summary: String::new(),
            body: String::new(),
            image_url: None,
            starting_price_cents: *price,
            featured: i < 3,
            sort_order: i as i32 * 10,
        })
        .collect();

    let inserted = diesel::insert_into(solutions::table)
        .values(&rows)
        .on_conflict(solutions::slug)
        .do_nothing()
        .execute(conn)
        .await?;

    tracing::info!(inserted, "Seeded solution pages");
    Ok(inserted)
}

/// Seed the default weather provider configuration.
pub async fn seed_ai_defaults(conn: &mut AsyncPgConnection) -> anyhow::Result<usize> {
    let default_config = NewAiConfiguration {
        name: WEATHER_DELIVERY_CONFIG.to_string(),
        provider: "weatherhub".to_string(),
        settings: Some(serde_json::json!({
            "cacheTtlHours": 6,
            "forecastDays": 10,
            "units": "imperial",
        })),
        enabled: true,
    };

    let inserted = diesel::insert_into(ai_configurations::table)
        .values(&default_config)
        .on_conflict(ai_configurations::name)
        .do_nothing()
        .execute(conn)
        .await?;
    Ok(inserted)
}

/// Run all population routines. Called at boot and by the tools CLI.
pub async fn seed_base_content(conn: &mut AsyncPgConnection) -> anyhow::Result<()> {
    let states = seed_states(conn).await?;
    let industries = seed_industries(conn).await?;
    let solutions = seed_solutions(conn).await?;
    let configs = seed_ai_defaults(conn).await?;

    tracing::info!(
        states,
        industries,
        solutions,
        configs,
        "Base content seeding complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basics() {
        assert_eq!(slugify("Office Trailers"), "office-trailers");
        assert_eq!(slugify("North Carolina"), "north-carolina");
        assert_eq!(slugify("  Events & Venues  "), "events-venues");
        assert_eq!(slugify("A--B"), "a-b");
    }
}
