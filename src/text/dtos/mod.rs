pub mod generate_text_dto;
