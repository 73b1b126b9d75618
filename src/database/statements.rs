use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const TABLE: &str = "Products";

pub const ID: &str = "id";
pub const COLOR: &str = "color";
pub const COST: &str = "cost";
pub const NAME: &str = "name";
pub const RETIRED: &str = "retired";
pub const SIZE: &str = "size";

/// Statement shapes the product store executes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statement {
    CreateTable,
    Count,
    Insert,
    Update,
    DeleteById,
    SelectById,
    SelectMaxId,
}

impl Statement {
    pub const ALL: [Statement; 7] = [
        Statement::CreateTable,
        Statement::Count,
        Statement::Insert,
        Statement::Update,
        Statement::DeleteById,
        Statement::SelectById,
        Statement::SelectMaxId,
    ];

    /// SQL text for this statement. Values are always bound positionally.
    pub fn sql(self) -> &'static str {
        // Every variant is inserted when the table is built
        STATEMENTS.get(&self).map(String::as_str).unwrap_or_default()
    }

    fn render(self) -> String {
        match self {
            Statement::CreateTable => format!(
                "CREATE TABLE IF NOT EXISTS {TABLE} (\
                 {ID} INTEGER PRIMARY KEY AUTOINCREMENT, \
                 {COLOR} TEXT NOT NULL, \
                 {NAME} TEXT NOT NULL, \
                 {RETIRED} INTEGER DEFAULT 0, \
                 {SIZE} TEXT NOT NULL, \
                 {COST} INTEGER DEFAULT 0)"
            ),
            Statement::Count => format!("SELECT COUNT(*) FROM {TABLE}"),
            Statement::Insert => format!(
                "INSERT INTO {TABLE} ({COLOR}, {NAME}, {RETIRED}, {SIZE}, {COST}) VALUES (?, ?, ?, ?, ?)"
            ),
            Statement::Update => format!(
                "UPDATE {TABLE} SET {COLOR} = ?, {NAME} = ?, {RETIRED} = ?, {SIZE} = ?, {COST} = ? WHERE {ID} = ?"
            ),
            Statement::DeleteById => format!("DELETE FROM {TABLE} WHERE {ID} = ?"),
            Statement::SelectById => format!("SELECT * FROM {TABLE} WHERE {ID} = ?"),
            Statement::SelectMaxId => {
                format!("SELECT * FROM {TABLE} WHERE {ID} = (SELECT MAX({ID}) FROM {TABLE})")
            }
        }
    }
}

static STATEMENTS: Lazy<HashMap<Statement, String>> = Lazy::new(|| {
    Statement::ALL
        .iter()
        .map(|statement| (*statement, statement.render()))
        .collect()
});
