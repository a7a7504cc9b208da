pub static MODEL: &str = "gemini-2.0-flash-exp";
pub static TEMPERATURE: f64 = 0.7;
pub static MAX_OUTPUT_TOKENS: Option<u32> = None;
