pub mod results;
pub mod executor;
pub mod request_queue;
pub mod batch;
