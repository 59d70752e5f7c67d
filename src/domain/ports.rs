use chrono::{DateTime, Utc};

/// 回應時間戳的來源，測試時可換成固定時間
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn static_dir(&self) -> Option<&str>;
    fn allowed_origins(&self) -> &[String];
    fn max_batch_size(&self) -> usize;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
