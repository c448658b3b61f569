pub mod app;
pub mod audit;
pub mod cafe;
pub mod classify;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod recommend;
pub mod response;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
