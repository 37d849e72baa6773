pub mod image_dto;
pub mod image_list_response;
pub mod images;
pub mod send_image_request;
pub mod send_image_response;
pub mod validation;
