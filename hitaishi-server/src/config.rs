use std::path::PathBuf;

use crate::upload::DEFAULT_MAX_UPLOAD_BYTES;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime settings, filled in by the command line front-end.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub upload_dir: PathBuf,
    /// Body cap on routes that accept files.
    pub max_upload_bytes: usize,
    /// Directory of `<code>.json` translation files.
    pub lang_dir: PathBuf,
    pub mail_from: String,
    /// Inbox that receives submitted resumes for review.
    pub review_address: String,
}

impl ServerConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            lang_dir: PathBuf::from("lang"),
            mail_from: "Hitaishi Trainings <no-reply@hitaishi.in>".to_owned(),
            review_address: "review@hitaishi.in".to_owned(),
        }
    }
}
