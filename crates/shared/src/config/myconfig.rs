use anyhow::{Context, Result, anyhow};

/// Cookie attributes for the JWT cookie. The `secure` flag applies to both
/// login and logout so the two paths can never disagree.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub secure: bool,
    pub http_only: bool,
}

#[derive(Debug, Clone)]
pub struct DefaultAdminConfig {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl DefaultAdminConfig {
    pub fn init() -> Result<Self> {
        let username = std::env::var("DEF_USER").context("Missing environment variable: DEF_USER")?;
        let password = std::env::var("DEF_PASS").context("Missing environment variable: DEF_PASS")?;
        let email = std::env::var("DEF_EMAIL").context("Missing environment variable: DEF_EMAIL")?;

        Ok(Self {
            username,
            password,
            email,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiry_minutes: i64,
    pub run_migrations: bool,
    pub port: u16,
    pub cookie: CookieConfig,
    pub default_admin: DefaultAdminConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").unwrap_or_else(|_| "true".to_string());
        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let jwt_expiry_minutes = std::env::var("JWT_EXPIRY_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<i64>()
            .context("JWT_EXPIRY_MINUTES must be a valid integer")?;

        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        let default_admin = DefaultAdminConfig::init().context("failed default admin config")?;

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiry_minutes,
            run_migrations,
            port,
            cookie: CookieConfig {
                secure: cookie_secure,
                http_only: true,
            },
            default_admin,
        })
    }
}
