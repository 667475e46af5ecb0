pub mod aggregate;
pub mod batch;
pub mod job;
pub mod materialize;
