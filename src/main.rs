use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;
use subnet_mask_calc::config::{init_logging, Config, OutputFormat};
use subnet_mask_calc::output::render_report;
use subnet_mask_calc::Request;

/// Convert an IPv4 subnet mask between CIDR, netmask, hex and wildcard forms
#[derive(Parser)]
#[command(name = "subnet-mask-calc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  subnet-mask-calc /26\n  subnet-mask-calc 255.255.192.0\n  \
    subnet-mask-calc 192.168.0.113/0xffffffe0\n  subnet-mask-calc 192.168.0.169 0.0.0.127")]
struct Cli {
    /// Mask (26, /26, 255.255.255.192, 0xffffffc0, 0.0.0.63) or IP/MASK
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    input: String,

    /// Mask for INPUT when the IP and mask are given separately
    #[arg(value_name = "MASK")]
    mask: Option<String>,

    /// Output format [env: SUBNET_MASK_CALC_OUTPUT]
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Log debug detail to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logging(&config, cli.verbose)?;
    log::info!("#Start main()");

    let format = cli.output.unwrap_or(config.output);
    let request = Request::parse(&cli.input, cli.mask.as_deref());

    match request.evaluate() {
        Ok(report) => {
            println!("{}", render_report(&report, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::debug!("{request:?} failed: {e}");
            eprintln!("{} {e}", "error:".red().bold());
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
