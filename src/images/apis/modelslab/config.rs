use std::time::Duration;

pub static REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub static WEBHOOK_PATH: &str = "/campaigns/webhook";
