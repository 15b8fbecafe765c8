pub mod opening_service;
