//! SQLite-backed corpus store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use tracing::info;
use uuid::Uuid;

use menumatch_core::{Dish, Error, Restaurant, Result};

use crate::schema::SCHEMA_SQL;
use crate::types::QuoteRow;

/// SQLite store holding the restaurant/dish corpus and the emitted quotes.
pub struct CorpusStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl CorpusStore {
    /// Open or create the store at `db_path`, creating parent directories
    /// as needed.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| Error::Storage(e.to_string()))?;
            }
        }

        let conn = Connection::open(&db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA foreign_keys = ON;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))?;

        let store = Self {
            conn: Mutex::new(conn),
            db_path,
        };

        info!(
            "CorpusStore initialized: {} restaurants, {} dishes, path={}",
            store.count_restaurants()?,
            store.count_dishes()?,
            store.db_path.display()
        );
        Ok(store)
    }

    pub fn add_restaurant(&self, restaurant: &Restaurant) -> Result<()> {
        let conn = self.conn.lock();
        conn.prepare_cached(
            "INSERT OR REPLACE INTO restaurants (id, name, place_ref) VALUES (?1, ?2, ?3)",
        )
        .map_err(|e| Error::Database(e.to_string()))?
        .execute(params![
            restaurant.id.to_string(),
            restaurant.name,
            restaurant.place_ref
        ])
        .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }

    /// Insert a dish at the end of its restaurant's menu ordering.
    pub fn add_dish(&self, dish: &Dish) -> Result<()> {
        let conn = self.conn.lock();
        let position: i64 = conn
            .query_row(
                "SELECT COALESCE(MAX(position) + 1, 0) FROM dishes WHERE restaurant_id = ?1",
                params![dish.restaurant_id.to_string()],
                |row| row.get(0),
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        conn.prepare_cached(
            "INSERT OR REPLACE INTO dishes (id, restaurant_id, name, category, position)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .map_err(|e| Error::Database(e.to_string()))?
        .execute(params![
            dish.id.to_string(),
            dish.restaurant_id.to_string(),
            dish.name,
            dish.category,
            position
        ])
        .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }

    pub fn load_restaurants(&self) -> Result<Vec<Restaurant>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached("SELECT id, name, place_ref FROM restaurants ORDER BY rowid")
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut restaurants = Vec::new();
        for row in rows {
            let (id, name, place_ref) = row.map_err(|e| Error::Database(e.to_string()))?;
            restaurants.push(Restaurant {
                id: parse_uuid(&id)?,
                name,
                place_ref,
            });
        }
        Ok(restaurants)
    }

    /// Load all dishes grouped by restaurant, each group in menu order.
    pub fn load_dishes_grouped(&self) -> Result<HashMap<Uuid, Vec<Dish>>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT id, restaurant_id, name, category FROM dishes
                 ORDER BY restaurant_id, position",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut grouped: HashMap<Uuid, Vec<Dish>> = HashMap::new();
        for row in rows {
            let (id, restaurant_id, name, category) =
                row.map_err(|e| Error::Database(e.to_string()))?;
            let restaurant_id = parse_uuid(&restaurant_id)?;
            grouped.entry(restaurant_id).or_default().push(Dish {
                id: parse_uuid(&id)?,
                name,
                category,
                restaurant_id,
            });
        }
        Ok(grouped)
    }

    /// Replace all persisted quotes with `rows`. Quote emission is a full
    /// regenerate, never an incremental merge.
    pub fn replace_quotes(&self, rows: &[QuoteRow]) -> Result<usize> {
        let mut conn = self.conn.lock();
        let tx = conn
            .transaction()
            .map_err(|e| Error::Database(e.to_string()))?;
        tx.execute("DELETE FROM dish_quotes", [])
            .map_err(|e| Error::Database(e.to_string()))?;

        let now = Utc::now().to_rfc3339();
        for row in rows {
            tx.prepare_cached(
                "INSERT INTO dish_quotes
                 (dish_id, dish_name, snippet, author, rating10, source_term, match_type, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )
            .map_err(|e| Error::Database(e.to_string()))?
            .execute(params![
                row.dish_id.to_string(),
                row.dish_name,
                row.snippet,
                row.author,
                row.rating10,
                row.source_term,
                row.match_type.as_str(),
                now
            ])
            .map_err(|e| Error::Database(e.to_string()))?;
        }

        tx.commit().map_err(|e| Error::Database(e.to_string()))?;
        info!("Wrote {} dish quotes", rows.len());
        Ok(rows.len())
    }

    pub fn load_quotes_for_dish(&self, dish_id: Uuid) -> Result<Vec<QuoteRow>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT dish_id, dish_name, snippet, author, rating10, source_term, match_type
                 FROM dish_quotes WHERE dish_id = ?1 ORDER BY id",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params![dish_id.to_string()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, f64>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                ))
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut quotes = Vec::new();
        for row in rows {
            let (dish_id, dish_name, snippet, author, rating10, source_term, match_type) =
                row.map_err(|e| Error::Database(e.to_string()))?;
            quotes.push(QuoteRow {
                dish_id: parse_uuid(&dish_id)?,
                dish_name,
                snippet,
                author,
                rating10,
                source_term,
                match_type: match_type
                    .parse()
                    .map_err(|e: String| Error::Database(e))?,
            });
        }
        Ok(quotes)
    }

    pub fn count_restaurants(&self) -> Result<i64> {
        self.count("restaurants")
    }

    pub fn count_dishes(&self) -> Result<i64> {
        self.count("dishes")
    }

    pub fn count_quotes(&self) -> Result<i64> {
        self.count("dish_quotes")
    }

    fn count(&self, table: &str) -> Result<i64> {
        let conn = self.conn.lock();
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .map_err(|e| Error::Database(e.to_string()))
    }
}

fn parse_uuid(s: &str) -> Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| Error::Database(format!("bad uuid {s}: {e}")))
}
