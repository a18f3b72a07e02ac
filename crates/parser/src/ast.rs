use expr::WhereClause;

/// What a column projection names: every column, or an explicit list.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    Star,
    Columns(Vec<String>),
}

/// A fully validated statement, bound to the name of the table it resolved
/// against. The executor re-resolves that name through the schema rather
/// than holding a reference, since a statement and its schema have
/// independent lifetimes in the REPL loop.
#[derive(Clone, Debug)]
pub enum Statement {
    Insert {
        table: String,
        row: Vec<u8>,
    },
    Select {
        table: String,
        projection: Projection,
        filter: Option<WhereClause>,
    },
    Update {
        table: String,
        column: String,
        value: Vec<u8>,
        filter: WhereClause,
    },
    Delete {
        table: String,
        filter: WhereClause,
    },
}

impl Statement {
    pub fn table(&self) -> &str {
        match self {
            Statement::Insert { table, .. }
            | Statement::Select { table, .. }
            | Statement::Update { table, .. }
            | Statement::Delete { table, .. } => table,
        }
    }
}
