//! Command-line driver: prints driver-level information about the
//! Bluetooth adapters connected to this machine.

use clap::Parser;

use btdevinfo::{report_all, DisplayMode};

#[derive(Parser, Debug)]
#[command(
    name = "btdevinfo",
    about = "Prints driver-level information about the Bluetooth devices connected to this machine"
)]
struct Cli {
    /// Print more details about each adapter
    #[arg(short, long)]
    verbose: bool,

    /// Also show Bluetooth features this adapter does not support or that
    /// are simply not active at the moment (implies --verbose)
    #[arg(short, long)]
    unsupported: bool,

    /// Colorized output for improved readability
    #[arg(short, long)]
    color: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mode = DisplayMode {
        verbose: cli.verbose || cli.unsupported,
        show_unsupported: cli.unsupported,
        colorized: cli.color,
    };

    println!("Bluetooth adapter info:");

    // Per-adapter failures are reported on stderr inside report_all and
    // leave the exit status at 0; only a failed enumeration is fatal.
    if let Err(err) = report_all(&mode) {
        eprintln!("Can't enumerate Bluetooth adapters: {err}");
        std::process::exit(1);
    }
}
