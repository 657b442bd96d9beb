//! Person repository: every read and write against the `person` table.
//!
//! ## Identity resolution
//!
//! A person whose id is the all-zero UUID has not been stored yet. `save`
//! assigns a fresh v4 UUID in that case and otherwise keeps the supplied id.
//! `update` with an unassigned id is a create: it hands the record to `save`.
//!
//! ## Timestamps
//!
//! `last_update` is always set here. Whatever the caller put in the field is
//! ignored.
//!
//! ## Deadlines
//!
//! Each statement runs under `query_timeout`. Dropping the returned future
//! also abandons the statement.

use crate::{DbError, PAGE_SIZE, Result as DbErrorResult, page_offset};

use ps_core::{Person, is_unassigned};

use std::future::Future;
use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

const PERSON_COLUMNS: &str = "id, first_name, last_name, age, last_update, login";

#[derive(Debug, FromRow)]
struct PersonRow {
    id: String,
    first_name: String,
    last_name: String,
    age: i32,
    last_update: DateTime<Utc>,
    login: Option<String>,
}

impl PersonRow {
    fn into_person(self, operation: &'static str) -> DbErrorResult<Person> {
        let id = Uuid::parse_str(&self.id).map_err(|e| DbError::InvalidRow {
            operation,
            message: format!("Invalid UUID in person.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Person {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            last_update: self.last_update,
            login: self.login,
        })
    }
}

#[derive(Clone)]
pub struct PersonRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl PersonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    /// Insert a person and return the row as stored.
    pub async fn save(&self, person: &Person) -> DbErrorResult<Person> {
        const OP: &str = "person_repository.save";

        let id = if is_unassigned(&person.id) {
            Uuid::new_v4()
        } else {
            person.id
        };
        let last_update = Utc::now();

        let sql = format!(
            r#"
                INSERT INTO person (id, first_name, last_name, age, last_update, login)
                VALUES (?, ?, ?, ?, ?, ?)
                RETURNING {PERSON_COLUMNS}
            "#
        );

        let row = self
            .deadline(
                OP,
                sqlx::query_as::<_, PersonRow>(&sql)
                    .bind(id.to_string())
                    .bind(&person.first_name)
                    .bind(&person.last_name)
                    .bind(person.age)
                    .bind(last_update)
                    .bind(&person.login)
                    .fetch_one(&self.pool),
            )
            .await?;

        row.into_person(OP)
    }

    /// Overwrite names, age and timestamp of an existing person.
    ///
    /// An unassigned id turns the call into `save`. An assigned id that
    /// matches no row yields `DbError::NotFound`. The stored id and login are
    /// never changed here.
    pub async fn update(&self, person: &Person) -> DbErrorResult<Person> {
        const OP: &str = "person_repository.update";

        if is_unassigned(&person.id) {
            return self.save(person).await;
        }

        let last_update = Utc::now();

        let sql = format!(
            r#"
                UPDATE person
                SET first_name = ?, last_name = ?, age = ?, last_update = ?
                WHERE id = ?
                RETURNING {PERSON_COLUMNS}
            "#
        );

        let row = self
            .deadline(
                OP,
                sqlx::query_as::<_, PersonRow>(&sql)
                    .bind(&person.first_name)
                    .bind(&person.last_name)
                    .bind(person.age)
                    .bind(last_update)
                    .bind(person.id.to_string())
                    .fetch_optional(&self.pool),
            )
            .await?
            .ok_or_else(|| DbError::not_found(OP, format!("Person {} not found", person.id)))?;

        row.into_person(OP)
    }

    /// Remove the row with `id`.
    ///
    /// Returns the id whether or not a row existed; a successful delete says
    /// nothing about prior existence.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<String> {
        const OP: &str = "person_repository.delete";

        let id_str = id.to_string();

        self.deadline(
            OP,
            sqlx::query("DELETE FROM person WHERE id = ?")
                .bind(&id_str)
                .execute(&self.pool),
        )
        .await?;

        Ok(id_str)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Person> {
        const OP: &str = "person_repository.find_by_id";

        let sql = format!("SELECT {PERSON_COLUMNS} FROM person WHERE id = ?");

        let row = self
            .deadline(
                OP,
                sqlx::query_as::<_, PersonRow>(&sql)
                    .bind(id.to_string())
                    .fetch_optional(&self.pool),
            )
            .await?
            .ok_or_else(|| DbError::not_found(OP, format!("Person {} not found", id)))?;

        row.into_person(OP)
    }

    pub async fn find_by_login(&self, login: &str) -> DbErrorResult<Person> {
        const OP: &str = "person_repository.find_by_login";

        let sql = format!("SELECT {PERSON_COLUMNS} FROM person WHERE login = ? LIMIT 1");

        let row = self
            .deadline(
                OP,
                sqlx::query_as::<_, PersonRow>(&sql)
                    .bind(login)
                    .fetch_optional(&self.pool),
            )
            .await?
            .ok_or_else(|| {
                DbError::not_found(OP, format!("Person with login {} not found", login))
            })?;

        row.into_person(OP)
    }

    /// Load one page of at most `PAGE_SIZE` persons.
    ///
    /// No ORDER BY: rows come back in the store's natural order, which is not
    /// stable across calls. Past the last row the result is empty.
    pub async fn list(&self, page: &str) -> DbErrorResult<Vec<Person>> {
        const OP: &str = "person_repository.list";

        let offset = page_offset(page);
        let sql = format!("SELECT {PERSON_COLUMNS} FROM person LIMIT ? OFFSET ?");

        let rows = self
            .deadline(
                OP,
                sqlx::query_as::<_, PersonRow>(&sql)
                    .bind(PAGE_SIZE)
                    .bind(offset)
                    .fetch_all(&self.pool),
            )
            .await?;

        rows.into_iter().map(|row| row.into_person(OP)).collect()
    }

    /// Cheap round trip used by the readiness probe
    pub async fn ping(&self) -> DbErrorResult<()> {
        const OP: &str = "person_repository.ping";

        self.deadline(OP, sqlx::query("SELECT 1").execute(&self.pool))
            .await?;

        Ok(())
    }

    /// Run one statement under the configured deadline, tagging failures
    /// with `operation`.
    async fn deadline<T, F>(&self, operation: &'static str, query: F) -> DbErrorResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => Err(DbError::sqlx(operation, source)),
            Err(_) => Err(DbError::Timeout {
                operation,
                timeout: self.query_timeout,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
