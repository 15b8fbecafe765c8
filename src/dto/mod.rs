pub mod opening_dto;
