//! REST client for the hosted auth and database service

pub mod client;
pub mod dto;

pub use client::BackendRestClient;
