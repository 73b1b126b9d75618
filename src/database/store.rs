use std::str::FromStr;
use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::database::models::{NewProduct, Product};
use crate::database::statements::Statement;
use crate::types::{Color, Size};

/// Errors from the product store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error("Inserted product could not be read back")]
    MissingInsert,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Handle to the embedded product database.
///
/// The pool holds exactly one connection that is never reaped. That keeps an
/// in-memory database alive for the life of the process, and it makes the pool
/// the serialization queue: whoever holds the [`StoreSession`] runs alone.
#[derive(Debug, Clone)]
pub struct ProductStore {
    pool: SqlitePool,
}

impl ProductStore {
    /// Connect, create the table and insert the seed rows.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, StoreError> {
        if !config.url.starts_with("sqlite:") {
            return Err(StoreError::InvalidDatabaseUrl(config.url.clone()));
        }

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|_| StoreError::InvalidDatabaseUrl(config.url.clone()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await?;

        info!("Connected to product database: {}", config.url);

        let store = Self { pool };
        store.initialize(config.seed).await?;
        Ok(store)
    }

    /// Fresh seeded in-memory store
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::open(&DatabaseConfig::default()).await
    }

    /// Check out the single connection. Statements issued through the
    /// returned session never interleave with another session's.
    pub async fn session(&self) -> Result<StoreSession, StoreError> {
        let conn = self.pool.acquire().await?;
        Ok(StoreSession { conn })
    }

    /// Number of stored products
    pub async fn count(&self) -> Result<i64, StoreError> {
        self.session().await?.count().await
    }

    /// Pings the database to ensure it still answers
    pub async fn health_check(&self) -> Result<(), StoreError> {
        let mut session = self.session().await?;
        sqlx::query("SELECT 1").execute(&mut *session.conn).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed product database");
    }

    async fn initialize(&self, seed: bool) -> Result<(), StoreError> {
        let mut session = self.session().await?;
        session.create_table().await?;

        if !seed {
            return Ok(());
        }

        // File-backed databases keep rows across restarts; only seed an empty table
        if session.count().await? > 0 {
            debug!("Product table already populated, skipping seed rows");
            return Ok(());
        }

        let seeds = seed_products();
        for product in &seeds {
            session.insert(product).await?;
        }
        info!("Seeded product table with {} rows", seeds.len());
        Ok(())
    }
}

/// Demonstration rows inserted on startup
pub fn seed_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            color: Color::Blue,
            cost: 1,
            name: "whoa".to_string(),
            retired: 1,
            size: Size::Small,
        },
        NewProduct {
            color: Color::Blue,
            cost: 1,
            name: "whoa".to_string(),
            retired: 1,
            size: Size::Large,
        },
    ]
}

/// Exclusive use of the store connection for the duration of one operation
pub struct StoreSession {
    conn: PoolConnection<Sqlite>,
}

impl StoreSession {
    async fn create_table(&mut self) -> Result<(), StoreError> {
        let sql = Statement::CreateTable.sql();
        debug!("executing query: {}", sql);
        sqlx::query(sql).execute(&mut *self.conn).await?;
        Ok(())
    }

    pub async fn count(&mut self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(Statement::Count.sql())
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(count)
    }

    /// Insert a row; the id is assigned by the database
    pub async fn insert(&mut self, product: &NewProduct) -> Result<u64, StoreError> {
        let sql = Statement::Insert.sql();
        debug!("executing query: {}", sql);

        let result = sqlx::query(sql)
            .bind(product.color)
            .bind(&product.name)
            .bind(product.retired)
            .bind(product.size)
            .bind(product.cost)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Write every non-key field of `product` to the row with its id
    pub async fn update(&mut self, product: &Product) -> Result<u64, StoreError> {
        let sql = Statement::Update.sql();
        debug!("executing query: {}", sql);

        let result = sqlx::query(sql)
            .bind(product.color)
            .bind(&product.name)
            .bind(product.retired)
            .bind(product.size)
            .bind(product.cost)
            .bind(product.id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_by_id(&mut self, id: i64) -> Result<u64, StoreError> {
        let sql = Statement::DeleteById.sql();
        debug!("executing query: {} [id={}]", sql, id);

        let result = sqlx::query(sql).bind(id).execute(&mut *self.conn).await?;
        Ok(result.rows_affected())
    }

    pub async fn select_by_id(&mut self, id: i64) -> Result<Option<Product>, StoreError> {
        let sql = Statement::SelectById.sql();
        debug!("executing query: {} [id={}]", sql, id);

        let row = sqlx::query_as::<_, Product>(sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(row)
    }

    /// Row with the highest id, i.e. the latest insert made through this session
    pub async fn select_max_id(&mut self) -> Result<Option<Product>, StoreError> {
        let sql = Statement::SelectMaxId.sql();
        debug!("executing query: {}", sql);

        let row = sqlx::query_as::<_, Product>(sql)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(row)
    }
}
