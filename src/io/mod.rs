pub mod discovery;
pub mod excel_read;
