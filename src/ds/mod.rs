mod table;

pub use table::{Table2, Table3};
