//! Diesel table definitions for the content store.
//!
//! Tables: industries, states, solutions, testimonials, news_insights,
//! product_gallery, analytics_events, weather_cache, ai_configurations.

diesel::table! {
    industries (id) {
        id -> Int8,
        slug -> Varchar,
        name -> Varchar,
        headline -> Varchar,
        summary -> Text,
        body -> Text,
        image_url -> Nullable<Varchar>,
        meta_title -> Nullable<Varchar>,
        meta_description -> Nullable<Varchar>,
        featured -> Bool,
        sort_order -> Int4,
        active -> Bool,
        create_date -> Nullable<Timestamptz>,
        write_date -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    states (id) {
        id -> Int8,
        code -> Varchar,
        slug -> Varchar,
        name -> Varchar,
        headline -> Varchar,
        summary -> Text,
        body -> Text,
        image_url -> Nullable<Varchar>,
        meta_title -> Nullable<Varchar>,
        meta_description -> Nullable<Varchar>,
        service_area -> Bool,
        active -> Bool,
        create_date -> Nullable<Timestamptz>,
        write_date -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    solutions (id) {
        id -> Int8,
        slug -> Varchar,
        name -> Varchar,
        category -> Varchar,
        headline -> Varchar,
        summary -> Text,
        body -> Text,
        image_url -> Nullable<Varchar>,
        starting_price_cents -> Nullable<Int8>,
        featured -> Bool,
        sort_order -> Int4,
        active -> Bool,
        create_date -> Nullable<Timestamptz>,
        write_date -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    testimonials (id) {
        id -> Int8,
        author -> Varchar,
        company -> Nullable<Varchar>,
        quote -> Text,
        rating -> Int4,
        featured -> Bool,
        sort_order -> Int4,
        active -> Bool,
        create_date -> Nullable<Timestamptz>,
        write_date -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    news_insights (id) {
        id -> Int8,
        slug -> Varchar,
        title -> Varchar,
        excerpt -> Text,
        body -> Text,
        image_url -> Nullable<Varchar>,
        category -> Varchar,
        published_at -> Timestamptz,
        featured -> Bool,
        active -> Bool,
        create_date -> Nullable<Timestamptz>,
        write_date -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    product_gallery (id) {
        id -> Int8,
        title -> Varchar,
        caption -> Nullable<Text>,
        image_url -> Varchar,
        category -> Varchar,
        sort_order -> Int4,
        active -> Bool,
        create_date -> Nullable<Timestamptz>,
        write_date -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    analytics_events (id) {
        id -> Int8,
        session_id -> Varchar,
        event_type -> Varchar,
        page_path -> Varchar,
        referrer -> Nullable<Varchar>,
        calculator -> Nullable<Varchar>,
        metadata -> Nullable<Jsonb>,
        occurred_at -> Timestamptz,
        create_date -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    weather_cache (id) {
        id -> Int8,
        location_key -> Varchar,
        payload -> Jsonb,
        fetched_at -> Timestamptz,
        create_date -> Nullable<Timestamptz>,
        write_date -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    ai_configurations (id) {
        id -> Int8,
        name -> Varchar,
        provider -> Varchar,
        settings -> Nullable<Jsonb>,
        enabled -> Bool,
        create_date -> Nullable<Timestamptz>,
        write_date -> Nullable<Timestamptz>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    industries,
    states,
    solutions,
    testimonials,
    news_insights,
    product_gallery,
    analytics_events,
    weather_cache,
    ai_configurations,
);
