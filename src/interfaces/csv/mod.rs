pub mod event_reader;
pub mod line_writer;
