//! Database migration for the content store.

use diesel_async::AsyncPgConnection;
use diesel_async::SimpleAsyncConnection;

/// SQL migration for the content platform tables.
///
/// Idempotent — every statement is `IF NOT EXISTS`, safe to run on each boot.
pub const MIGRATION_SQL: &str = r#"
-- ================================================================
-- ModSite content platform tables
-- ================================================================

CREATE TABLE IF NOT EXISTS industries (
    id              BIGSERIAL PRIMARY KEY,
    slug            VARCHAR(255) NOT NULL UNIQUE,
    name            VARCHAR(255) NOT NULL,
    headline        VARCHAR(500) NOT NULL DEFAULT '',
    summary         TEXT NOT NULL DEFAULT '',
    body            TEXT NOT NULL DEFAULT '',
    image_url       VARCHAR(1024),
    meta_title      VARCHAR(255),
    meta_description VARCHAR(500),
    featured        BOOLEAN NOT NULL DEFAULT FALSE,
    sort_order      INTEGER NOT NULL DEFAULT 0,
    active          BOOLEAN NOT NULL DEFAULT TRUE,
    create_date     TIMESTAMPTZ DEFAULT NOW(),
    write_date      TIMESTAMPTZ DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_industries_slug ON industries (slug);
CREATE INDEX IF NOT EXISTS idx_industries_active ON industries (active);

CREATE TABLE IF NOT EXISTS states (
    id              BIGSERIAL PRIMARY KEY,
    code            VARCHAR(2) NOT NULL UNIQUE,
    slug            VARCHAR(255) NOT NULL UNIQUE,
    name            VARCHAR(255) NOT NULL,
    headline        VARCHAR(500) NOT NULL DEFAULT '',
    summary         TEXT NOT NULL DEFAULT '',
    body            TEXT NOT NULL DEFAULT '',
    image_url       VARCHAR(1024),
    meta_title      VARCHAR(255),
    meta_description VARCHAR(500),
    service_area    BOOLEAN NOT NULL DEFAULT TRUE,
    active          BOOLEAN NOT NULL DEFAULT TRUE,
    create_date     TIMESTAMPTZ DEFAULT NOW(),
    write_date      TIMESTAMPTZ DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_states_code ON states (code);

CREATE TABLE IF NOT EXISTS solutions (
    id              BIGSERIAL PRIMARY KEY,
    slug            VARCHAR(255) NOT NULL UNIQUE,
    name            VARCHAR(255) NOT NULL,
    category        VARCHAR(32) NOT NULL DEFAULT 'rental',
    headline        VARCHAR(500) NOT NULL DEFAULT '',
    summary         TEXT NOT NULL DEFAULT '',
    body            TEXT NOT NULL DEFAULT '',
    image_url       VARCHAR(1024),
    starting_price_cents BIGINT,
    featured        BOOLEAN NOT NULL DEFAULT FALSE,
    sort_order      INTEGER NOT NULL DEFAULT 0,
    active          BOOLEAN NOT NULL DEFAULT TRUE,
    create_date     TIMESTAMPTZ DEFAULT NOW(),
    write_date      TIMESTAMPTZ DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_solutions_slug ON solutions (slug);
CREATE INDEX IF NOT EXISTS idx_solutions_category ON solutions (category);

CREATE TABLE IF NOT EXISTS testimonials (
    id              BIGSERIAL PRIMARY KEY,
    author          VARCHAR(255) NOT NULL,
    company         VARCHAR(255),
    quote           TEXT NOT NULL,
    rating          INTEGER NOT NULL DEFAULT 5,
    featured        BOOLEAN NOT NULL DEFAULT FALSE,
    sort_order      INTEGER NOT NULL DEFAULT 0,
    active          BOOLEAN NOT NULL DEFAULT TRUE,
    create_date     TIMESTAMPTZ DEFAULT NOW(),
    write_date      TIMESTAMPTZ DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS news_insights (
    id              BIGSERIAL PRIMARY KEY,
    slug            VARCHAR(255) NOT NULL UNIQUE,
    title           VARCHAR(500) NOT NULL,
    excerpt         TEXT NOT NULL DEFAULT '',
    body            TEXT NOT NULL DEFAULT '',
    image_url       VARCHAR(1024),
    category        VARCHAR(64) NOT NULL DEFAULT 'news',
    published_at    TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    featured        BOOLEAN NOT NULL DEFAULT FALSE,
    active          BOOLEAN NOT NULL DEFAULT TRUE,
    create_date     TIMESTAMPTZ DEFAULT NOW(),
    write_date      TIMESTAMPTZ DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_news_published ON news_insights (published_at DESC);

CREATE TABLE IF NOT EXISTS product_gallery (
    id              BIGSERIAL PRIMARY KEY,
    title           VARCHAR(255) NOT NULL,
    caption         TEXT,
    image_url       VARCHAR(1024) NOT NULL,
    category        VARCHAR(64) NOT NULL DEFAULT 'exterior',
    sort_order      INTEGER NOT NULL DEFAULT 0,
    active          BOOLEAN NOT NULL DEFAULT TRUE,
    create_date     TIMESTAMPTZ DEFAULT NOW(),
    write_date      TIMESTAMPTZ DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS analytics_events (
    id              BIGSERIAL PRIMARY KEY,
    session_id      VARCHAR(64) NOT NULL,
    event_type      VARCHAR(64) NOT NULL,
    page_path       VARCHAR(1024) NOT NULL,
    referrer        VARCHAR(1024),
    calculator      VARCHAR(64),
    metadata        JSONB,
    occurred_at     TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    create_date     TIMESTAMPTZ DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_analytics_events_occurred ON analytics_events (occurred_at DESC);
CREATE INDEX IF NOT EXISTS idx_analytics_events_session ON analytics_events (session_id);
CREATE INDEX IF NOT EXISTS idx_analytics_events_type ON analytics_events (event_type);

CREATE TABLE IF NOT EXISTS weather_cache (
    id              BIGSERIAL PRIMARY KEY,
    location_key    VARCHAR(64) NOT NULL UNIQUE,
    payload         JSONB NOT NULL,
    fetched_at      TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    create_date     TIMESTAMPTZ DEFAULT NOW(),
    write_date      TIMESTAMPTZ DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS ai_configurations (
    id              BIGSERIAL PRIMARY KEY,
    name            VARCHAR(255) NOT NULL UNIQUE,
    provider        VARCHAR(64) NOT NULL,
    settings        JSONB,
    enabled         BOOLEAN NOT NULL DEFAULT TRUE,
    create_date     TIMESTAMPTZ DEFAULT NOW(),
    write_date      TIMESTAMPTZ DEFAULT NOW()
);
"#;

/// Run the content platform migration.
pub async fn run_migration(conn: &mut AsyncPgConnection) -> anyhow::Result<()> {
    conn.batch_execute(MIGRATION_SQL)
        .await
        .map_err(|e| anyhow::anyhow!("content migration failed: {e}"))?;
    Ok(())
}
