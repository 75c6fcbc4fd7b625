use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

/// A bindable column value for a partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Int(i32),
    Bool(bool),
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// `UPDATE <table> SET ... WHERE <key> = $n` built from an ordered list of
/// column assignments. Columns are only added for values that are present.
#[derive(Debug, Clone)]
pub struct UpdateStatement {
    table: &'static str,
    assignments: Vec<(&'static str, SqlValue)>,
}

impl UpdateStatement {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
        }
    }

    pub fn set(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.assignments.push((column, value.into()));
        self
    }

    pub fn set_opt<T: Into<SqlValue>>(self, column: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    #[cfg(test)]
    pub fn columns(&self) -> Vec<&'static str> {
        self.assignments.iter().map(|(column, _)| *column).collect()
    }

    /// Returns `None` when there is nothing to set.
    pub fn build(self, key_column: &'static str, key: Uuid) -> Option<QueryBuilder<'static, Postgres>> {
        if self.is_empty() {
            return None;
        }

        let mut query = QueryBuilder::new("UPDATE ");
        query.push(self.table).push(" SET ");

        {
            let mut set = query.separated(", ");
            for (column, value) in self.assignments {
                set.push(column);
                set.push_unseparated(" = ");
                match value {
                    SqlValue::Text(v) => set.push_bind_unseparated(v),
                    SqlValue::Int(v) => set.push_bind_unseparated(v),
                    SqlValue::Bool(v) => set.push_bind_unseparated(v),
                };
            }
        }

        query.push(" WHERE ").push(key_column).push(" = ").push_bind(key);

        Some(query)
    }
}
