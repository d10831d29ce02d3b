pub mod csv_table;
pub mod stop_words;

pub use csv_table::{read_csv_table, write_csv_table};
pub use stop_words::load_stop_words;
