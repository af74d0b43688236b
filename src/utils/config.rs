#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
}

impl Config {
    pub fn init() -> Self {
        Config {
            db_url: std::env::var("DATABASE_URL").expect("DATABASE_URL not set"),
        }
    }
}
