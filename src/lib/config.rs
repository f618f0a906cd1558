use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub sourmash_path: PathBuf,
    pub alternate_path: PathBuf,
    pub log_level: tracing::Level,
}

const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

const USAGE: &str = "usage: gather_compare <sourmash_gather_file> <alternate_gather_file>";

impl Config {
    /// Builds the run configuration from process arguments: two required
    /// positional CSV paths. Log level comes from the LOG_LEVEL environment
    /// variable and defaults to INFO.
    pub fn from_args(args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let positionals: Vec<String> = args.skip(1).collect();
        let [sourmash, alternate] = positionals.as_slice() else {
            anyhow::bail!("{}", USAGE);
        };
        let log_level = match std::env::var(LOG_LEVEL_KEY) {
            Ok(value) => value
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid {} value: {}", LOG_LEVEL_KEY, value))?,
            Err(_) => tracing::Level::INFO,
        };
        Ok(Self {
            sourmash_path: PathBuf::from(sourmash),
            alternate_path: PathBuf::from(alternate),
            log_level,
        })
    }
}
