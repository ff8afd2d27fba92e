mod csv_import;

pub(crate) use csv_import::{MissingColumns, StatementLoader, REQUIRED_COLUMNS};
