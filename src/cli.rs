use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    /// Path of the configuration file
    #[clap(long, short)]
    pub config: Option<camino::Utf8PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Run every configured countdown until all targets have passed
    Run {
        /// Comma-separated epoch seconds for an extra countdown
        #[clap(long, short)]
        targets: Option<String>,

        /// Surface id of the extra countdown
        #[clap(long, default_value = "countdown")]
        id: String,
    },
    VerifyConfig,
}
