use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a fresh insult and print it
    Insult {
        /// Direct the insult at someone
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show the effective client configuration
    Config {
        /// Print the full client state as JSON
        #[arg(long)]
        json: bool,
    },
}
