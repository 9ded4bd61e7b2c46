pub mod aggregations;
pub mod csv_parser;
pub mod records;
