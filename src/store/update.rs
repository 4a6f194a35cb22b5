//! # Partial Update Builder
//!
//! Turns a [`RecipePatch`] into an `UPDATE` touching only the supplied
//! columns. Column names come from [`Assignment`], never from request input;
//! every value is bound as a positional parameter. `updated_at` is always
//! refreshed and the statement is always scoped by `id`.

use rusqlite::types::Value as SqlValue;
use thiserror::Error;

use super::model::RecipePatch;

/// One column assignment, carrying a value of the column's type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Title(String),
    MakingTime(String),
    Serves(String),
    Ingredients(String),
    Cost(i64),
}

impl Assignment {
    /// Column name
    pub fn column(&self) -> &'static str {
        match self {
            Assignment::Title(_) => "title",
            Assignment::MakingTime(_) => "making_time",
            Assignment::Serves(_) => "serves",
            Assignment::Ingredients(_) => "ingredients",
            Assignment::Cost(_) => "cost",
        }
    }

    /// Value bound to the column's placeholder
    pub fn sql_value(&self) -> SqlValue {
        match self {
            Assignment::Title(s)
            | Assignment::MakingTime(s)
            | Assignment::Serves(s)
            | Assignment::Ingredients(s) => SqlValue::Text(s.clone()),
            Assignment::Cost(i) => SqlValue::Integer(*i),
        }
    }
}

/// Errors from building an update
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("No fields provided to update.")]
    NoFields,
}

/// A parameterized partial update of one recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    id: i64,
    assignments: Vec<Assignment>,
}

impl UpdateStatement {
    /// Build an update for `id` from the supplied fields.
    ///
    /// Fails with [`UpdateError::NoFields`] when the patch is empty.
    pub fn build(id: i64, patch: RecipePatch) -> Result<Self, UpdateError> {
        let RecipePatch {
            title,
            making_time,
            serves,
            ingredients,
            cost,
        } = patch;

        let assignments: Vec<Assignment> = [
            title.map(Assignment::Title),
            making_time.map(Assignment::MakingTime),
            serves.map(Assignment::Serves),
            ingredients.map(Assignment::Ingredients),
            cost.map(Assignment::Cost),
        ]
        .into_iter()
        .flatten()
        .collect();

        if assignments.is_empty() {
            return Err(UpdateError::NoFields);
        }

        Ok(Self { id, assignments })
    }

    /// Target recipe id
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Column assignments in statement order
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Render the SQL text. Placeholders are numbered to match [`params`](Self::params).
    pub fn sql(&self) -> String {
        let mut set: Vec<String> = self
            .assignments
            .iter()
            .enumerate()
            .map(|(i, assignment)| format!("{} = ?{}", assignment.column(), i + 1))
            .collect();
        set.push("updated_at = CURRENT_TIMESTAMP".to_string());

        format!(
            "UPDATE recipes SET {} WHERE id = ?{}",
            set.join(", "),
            self.assignments.len() + 1
        )
    }

    /// Bound values, id last
    pub fn params(&self) -> Vec<SqlValue> {
        self.assignments
            .iter()
            .map(Assignment::sql_value)
            .chain(std::iter::once(SqlValue::Integer(self.id)))
            .collect()
    }
}
