//! Database connection management

use std::collections::HashMap;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params};

use super::config::DbConfig;
use crate::crypto::Encoding;
use super::{ERR_CONNECTION, ERR_NOT_OPEN, ERR_QUERY, ERR_UNSUPPORTED_DRIVER};
use crate::error::AppError;

/// Driver name accepted by [`Database::open`]
pub const SQLITE_DRIVER: &str = "sqlite";

/// Text used for SQL NULL in query results
pub const NULL_VALUE: &str = "NULL";

/// A single result row, keyed by column name
pub type Row = HashMap<String, String>;

/// Database connection wrapper
pub struct Database {
    /// Resolved configuration
    config: DbConfig,
    /// SQLite connection
    conn: Option<Connection>,
}

impl Database {
    /// Open the database described by `config`. The URL is the file path.
    pub fn open(config: DbConfig) -> Result<Self, AppError> {
        if !config.driver.eq_ignore_ascii_case(SQLITE_DRIVER) {
            return Err(AppError::with_code(ERR_UNSUPPORTED_DRIVER)
                .rem(format!("unsupported database driver '{}'", config.driver)));
        }

        let conn = Connection::open(&config.url).map_err(|e| {
            AppError::new(e, ERR_CONNECTION)
                .rem("cannot open database")
                .set("driver", config.driver.as_str())
        })?;
        log::debug!("opened {} database", config.driver);

        Ok(Self {
            config,
            conn: Some(conn),
        })
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Result<&Connection, AppError> {
        self.conn
            .as_ref()
            .ok_or_else(|| AppError::with_code(ERR_NOT_OPEN).rem("database not open"))
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Close the database connection
    pub fn close(&mut self) {
        if self.conn.take().is_some() {
            log::debug!("closed database connection");
        }
    }

    /// Check if database is open
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Look up a named SQL command, falling back to `name` as raw SQL
    pub fn resolve_sql<'a>(&'a self, name: &'a str) -> &'a str {
        self.config.sql.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Run a query and collect every row as column -> text.
    ///
    /// NULL becomes [`NULL_VALUE`] and blobs are rendered as lowercase hex;
    /// text that is not valid UTF-8 is converted lossily.
    pub fn query_rows<P: Params>(&self, name: &str, params: P) -> Result<Vec<Row>, AppError> {
        let sql = self.resolve_sql(name);
        let conn = self.connection()?;
        let query_error = |e: rusqlite::Error| AppError::new(e, ERR_QUERY).set("sql", sql);

        let mut stmt = conn.prepare(sql).map_err(query_error)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt.query(params).map_err(query_error)?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().map_err(query_error)? {
            let mut record = Row::with_capacity(columns.len());
            for (i, column) in columns.iter().enumerate() {
                let value = row.get_ref(i).map_err(query_error)?;
                record.insert(column.clone(), value_to_string(value));
            }
            results.push(record);
        }

        Ok(results)
    }

    /// Value of `column` in the first row, if there is one
    pub fn first_row_value<P: Params>(
        &self,
        name: &str,
        params: P,
        column: &str,
    ) -> Result<Option<String>, AppError> {
        let rows = self.query_rows(name, params)?;
        Ok(rows.into_iter().next().and_then(|mut row| row.remove(column)))
    }

    /// Execute an INSERT/UPDATE/DELETE and return the rows affected
    pub fn exec<P: Params>(&self, name: &str, params: P) -> Result<usize, AppError> {
        let sql = self.resolve_sql(name);
        self.connection()?
            .execute(sql, params)
            .map_err(|e| AppError::new(e, ERR_QUERY).set("sql", sql))
    }

    /// Execute an INSERT and return the new row id
    pub fn insert_get_last_id<P: Params>(&self, name: &str, params: P) -> Result<i64, AppError> {
        self.exec(name, params)?;
        Ok(self.connection()?.last_insert_rowid())
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        self.close();
    }
}

fn value_to_string(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => NULL_VALUE.to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Blob(bytes) => Encoding::Hex.encode(bytes),
    }
}
