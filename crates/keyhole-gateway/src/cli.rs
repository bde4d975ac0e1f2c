use clap::Parser;
use keyhole_codec::DEFAULT_MIN_LENGTH;
use keyhole_shortener::allocator::DEFAULT_SEQUENCE_START;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "KEYHOLE_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "KEYHOLE_PUBLIC_BASE_URL";
pub const CODEC_SALT_ENV: &str = "KEYHOLE_CODEC_SALT";
pub const MIN_CODE_LENGTH_ENV: &str = "KEYHOLE_MIN_CODE_LENGTH";
pub const SEQUENCE_START_ENV: &str = "KEYHOLE_SEQUENCE_START";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "keyhole-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base URL used when rendering short links back to clients.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    /// Secret salt for the codec. Changing it invalidates every
    /// previously issued code.
    #[arg(long, env = CODEC_SALT_ENV)]
    pub codec_salt: String,

    #[arg(long, env = MIN_CODE_LENGTH_ENV, default_value_t = DEFAULT_MIN_LENGTH)]
    pub min_code_length: usize,

    /// First identifier the in-process allocator hands out.
    #[arg(long, env = SEQUENCE_START_ENV, default_value_t = DEFAULT_SEQUENCE_START)]
    pub sequence_start: u64,
}
