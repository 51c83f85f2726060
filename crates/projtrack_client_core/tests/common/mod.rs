pub mod slow_server;
pub mod test_helpers;
