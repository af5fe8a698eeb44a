pub mod charts;
pub mod chat;
pub mod data_table;
pub mod layout;
pub mod loading;
