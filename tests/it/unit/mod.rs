//! Unit tests for gridlink.

mod graph_tests;
mod perf_tests;
mod routing_tests;
mod scheduler_tests;
mod snapshot_tests;
mod view_tests;
