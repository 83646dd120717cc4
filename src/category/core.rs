use rusqlite::Connection;
use serde::Serialize;

pub type CategoryId = i64;

/// A category that expenses are filed under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    /// The id for the category.
    pub id: CategoryId,
    /// The display name of the category.
    pub name: String,
}

pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS Categories (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_category(row: &rusqlite::Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;

    Ok(Category { id, name })
}

#[cfg(test)]
pub fn create_category(name: &str, connection: &Connection) -> Category {
    connection
        .execute(
            "INSERT INTO Categories (name) VALUES (?1)",
            rusqlite::params![name],
        )
        .unwrap();

    Category {
        id: connection.last_insert_rowid(),
        name: name.to_owned(),
    }
}
