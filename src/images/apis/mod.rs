pub mod modelslab;
