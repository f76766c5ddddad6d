use anyhow::Result;
use clap::Parser;

use zoneshift::pipeline;

/// Convert a human-typed zoned date-time into a target timezone.
///
/// The arguments are joined into one expression of the form
/// `<date-time w/ time-zone> to <target time-zone>`, e.g.:
///
///     zoneshift 2010-02-04T14:39:28 PST to EST
#[derive(Parser)]
#[command(name = "zoneshift", version, about)]
struct Cli {
    /// Emit the structured conversion as JSON instead of the reply line
    #[arg(long)]
    json: bool,

    /// The expression, e.g.: 2010-02-04T14:39:28 PST to EST
    #[arg(required = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let input = cli.expression.join(" ");

    if cli.json {
        match pipeline::run(&input) {
            Ok(conversion) => println!("{}", serde_json::to_string_pretty(&conversion)?),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        }
    } else {
        // The reply line is the product, success or diagnostic; relay it
        // unchanged.
        println!("{}", pipeline::convert_command(&input));
    }
    Ok(())
}
