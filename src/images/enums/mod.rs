pub mod modelslab_status;
