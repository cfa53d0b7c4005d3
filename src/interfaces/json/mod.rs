pub mod request_reader;
