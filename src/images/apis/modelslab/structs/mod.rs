pub mod modelslab_text2img_response;
