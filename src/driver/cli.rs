//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// `KEY=VALUE` 形式のメタデータ引数をパース
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("metadata key must not be empty in `{}`", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// ファイルをHTTPエンドポイントにアップロードするCLI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rpi-uploader")]
#[command(
    about = "Upload files from a Raspberry Pi to an HTTP endpoint",
    long_about = None
)]
pub struct Args {
    /// Path of a single file to upload
    #[arg(long)]
    pub file: Option<String>,

    /// Directory to monitor for new files
    #[arg(long)]
    pub monitor: Option<String>,

    /// Upload endpoint URL (e.g. https://example.com/wp-json/raspberry/v1/upload)
    #[arg(long)]
    pub url: Option<String>,

    /// API key sent in the X-API-KEY header
    #[arg(long)]
    pub key: Option<String>,

    /// JSON config file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Check interval in seconds for monitor mode [default: 30]
    #[arg(long)]
    pub interval: Option<u64>,

    /// Comma-separated list of file extensions to monitor (e.g. .jpg,.png)
    #[arg(long)]
    pub extensions: Option<String>,

    /// Move files to this directory after a successful upload
    #[arg(long)]
    pub move_to: Option<String>,

    /// Test the connection to the API
    #[arg(long)]
    pub test: bool,

    /// Show detailed log messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra metadata field sent with every upload (repeatable)
    #[arg(long = "meta", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub metadata: Vec<(String, String)>,
}
