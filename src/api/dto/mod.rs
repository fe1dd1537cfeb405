pub mod cafe_dto;
