pub mod cafe_add_request;
