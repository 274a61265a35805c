pub mod epoch;
pub mod error;
pub mod thrift;
pub mod types;
