use super::IOArgs;
use clap::Subcommand;

mod merge;
pub use merge::MergeDocument;

#[derive(Subcommand)]
pub enum Commands {
    /// Merge incoming prices into existing prices and report the result
    Merge {
        #[command(flatten)]
        io: IOArgs,
    },

    /// Report prices in the same group whose validity spans overlap
    Check {
        #[command(flatten)]
        io: IOArgs,
    },
}
