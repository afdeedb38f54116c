use std::sync::LazyLock;

pub const DEFAULT_HEX_BYTES_PER_LINE: usize = 16;
pub const DEFAULT_MAX_INPUT_SIZE: usize = 64 * 1024 * 1024;

/// Settings for the command-line tool. Codecs never consult these.
#[allow(non_snake_case)]
pub struct Config {
    // bytes per line in hex dumps
    pub HEX_BYTES_PER_LINE: usize,
    // largest file `decode-file` will map
    pub MAX_INPUT_SIZE: usize,
}

impl Config {
    fn from_env() -> Self {
        Self {
            HEX_BYTES_PER_LINE: env_usize("RECORDCODEC_HEX_WIDTH")
                .filter(|&width| width > 0)
                .unwrap_or(DEFAULT_HEX_BYTES_PER_LINE),
            MAX_INPUT_SIZE: env_usize("RECORDCODEC_MAX_INPUT").unwrap_or(DEFAULT_MAX_INPUT_SIZE),
        }
    }
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok()?.trim().parse().ok()
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);
