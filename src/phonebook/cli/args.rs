use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version = get_version())]
#[command(about = "Interactive contact manager backed by a JSON file", long_about = None)]
pub struct Cli {
    /// Backing JSON file [default: phonebook.json, or the configured one]
    #[arg(short, long, env = "PHONEBOOK_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json [default: platform config dir]
    #[arg(long, env = "PHONEBOOK_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
