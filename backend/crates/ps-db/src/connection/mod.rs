pub mod database_connection;
