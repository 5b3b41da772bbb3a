//! Database schema SQL.

/// Corpus tables: restaurants, dishes (menu-ordered), and the emitted
/// dish quotes. Dish `position` preserves menu order per restaurant; the
/// general pass depends on it.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS restaurants (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    place_ref TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS dishes (
    id TEXT PRIMARY KEY,
    restaurant_id TEXT NOT NULL REFERENCES restaurants(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    position INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_dishes_restaurant ON dishes(restaurant_id);

CREATE TABLE IF NOT EXISTS dish_quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    dish_id TEXT NOT NULL REFERENCES dishes(id) ON DELETE CASCADE,
    dish_name TEXT NOT NULL,
    snippet TEXT NOT NULL,
    author TEXT NOT NULL,
    rating10 REAL NOT NULL,
    source_term TEXT NOT NULL,
    match_type TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_quotes_dish ON dish_quotes(dish_id);
"#;
