pub mod csv_read;
pub mod html_write;
