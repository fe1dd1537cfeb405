pub mod cafe_entity;
pub mod cafe_repository_trait;
pub mod cafe_sqlite_repository;
