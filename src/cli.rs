use clap::{Args as ClapArgs, Parser, Subcommand};

/// Generate distinct, sRGB-safe colors for categorical map regions.
#[derive(Parser, Debug)]
#[command(name = "regionhue", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Preview every color: colored terminal lines, or log records with =log
    #[arg(
        long,
        value_enum,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "terminal"
    )]
    pub preview: Option<PreviewTarget>,

    /// Draw the colors as a swatch grid after the listing
    #[arg(long, global = true)]
    pub grid: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PreviewTarget {
    Terminal,
    Log,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate N colors by walking the hue circle
    Sequence(SequenceArgs),

    /// Color region names (from arguments, or one per line on stdin)
    Names(NamesArgs),

    /// Decode a #rrggbb color into its byte channels
    Decode(DecodeArgs),
}

#[derive(ClapArgs, Debug)]
pub struct SequenceArgs {
    /// Number of colors
    pub count: usize,

    /// Starting hue in degrees (random if omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<f64>,
}

#[derive(ClapArgs, Debug)]
pub struct NamesArgs {
    /// Region names, in palette order
    pub names: Vec<String>,

    /// Hand out one golden-angle palette in order instead of hashing names
    #[arg(long)]
    pub sequential: bool,

    /// Starting hue for --sequential (random if omitted)
    #[arg(short, long, requires = "sequential", allow_negative_numbers = true)]
    pub seed: Option<f64>,
}

#[derive(ClapArgs, Debug)]
pub struct DecodeArgs {
    /// Color like #1a2b3c or 1A2B3C
    pub hex: String,
}
