#![allow(dead_code)]

use sqlmaker::{ExecResult, Executor, Row, SqlError, SqlResult, Value};
use std::future::Future;
use std::sync::Mutex;

/// In-memory executor that records every statement it is handed.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<(String, Vec<Value>)>>,
    rows: Vec<Row>,
    rows_affected: u64,
    last_insert_id: Option<u64>,
    fail_with: Option<String>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_rows_affected(mut self, n: u64) -> Self {
        self.rows_affected = n;
        self
    }

    pub fn with_last_insert_id(mut self, id: u64) -> Self {
        self.last_insert_id = Some(id);
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, sql: &str, args: &[Value]) -> SqlResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_string(), args.to_vec()));
        match &self.fail_with {
            Some(message) => Err(SqlError::execution(message.clone())),
            None => Ok(()),
        }
    }
}

impl Executor for RecordingExecutor {
    fn execute(
        &self,
        sql: &str,
        args: &[Value],
    ) -> impl Future<Output = SqlResult<ExecResult>> + Send {
        let result = self.record(sql, args).map(|()| ExecResult {
            rows_affected: self.rows_affected,
            last_insert_id: self.last_insert_id,
        });
        async move { result }
    }

    fn query(&self, sql: &str, args: &[Value]) -> impl Future<Output = SqlResult<Vec<Row>>> + Send {
        let result = self.record(sql, args).map(|()| self.rows.clone());
        async move { result }
    }
}

pub fn user_row(id: i64, name: &str) -> Row {
    Row::new([("id", Value::Int(id)), ("name", Value::Text(name.to_string()))])
}
