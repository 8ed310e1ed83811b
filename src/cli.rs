use clap::Parser;

/// Options for the console driver.
///
/// The search scenario itself (stop words, documents, query) streams over
/// stdin line by line; flags only control presentation and logging.
#[derive(Parser)]
#[command(name = "docrank")]
#[command(about = "Rank documents read from stdin against a keyword query", long_about = None)]
pub struct Cli {
    /// Results per printed page.
    #[arg(short, long, default_value = "2")]
    pub page_size: usize,

    /// Print results as JSON lines instead of the text format.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
