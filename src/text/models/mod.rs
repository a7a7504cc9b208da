pub mod generate_text_response;
