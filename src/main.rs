mod cli;
mod export;
mod load;
mod util;

use std::path::Path;

use clap::{App, Arg};
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{color::Palette, plot::Plotter, report::Report, table::Table};
use load::error::Record;

fn main() {
    let matches = App::new("budgie")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Track internal costs against the approved client budget")
        .arg(
            Arg::with_name("FILE")
                .help("Session file to replay")
                .default_value("budget.bgt")
                .index(1),
        )
        .arg(
            Arg::with_name("export")
                .short("e")
                .long("export")
                .help("Write the cost details and budget summary as CSV"),
        )
        .arg(
            Arg::with_name("out-dir")
                .short("o")
                .long("out-dir")
                .value_name("DIR")
                .default_value(".")
                .help("Directory receiving the CSV exports"),
        )
        .arg(
            Arg::with_name("plot")
                .short("p")
                .long("plot")
                .value_name("SVG")
                .help("Render a chart of the session to this file"),
        )
        .arg(
            Arg::with_name("no-color")
                .long("no-color")
                .help("Disable colored output, implied when stdout is not a terminal"),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let palette = Palette::for_stdout(matches.is_present("no-color"));
    let filename = matches.value_of("FILE").unwrap_or("budget.bgt");

    let mut errs = Record::new().with_palette(palette);
    let session = load::read_session(filename, &mut errs);
    print!("{}", errs);
    let session = match session {
        Some(session) => session,
        None => std::process::exit(1),
    };

    if session.ledger().is_empty() {
        println!("No internal costs added yet.");
        return;
    }
    println!(
        "{}",
        Table::from(session.ledger().lines()).with_title("Internal Cost Breakdown")
    );
    println!("{}", Report::new(session.summary(), palette));

    let mut failed = false;
    if matches.is_present("export") {
        let dir = Path::new(matches.value_of("out-dir").unwrap_or("."));
        match export::write_all(&session, dir) {
            Ok(paths) => {
                for path in paths {
                    println!("Exported {}", path.display());
                }
            }
            Err(e) => {
                error!("export to {} failed: {}", dir.display(), e);
                failed = true;
            }
        }
    }
    if let Some(file) = matches.value_of("plot") {
        match Plotter::from(&session).render(file) {
            Ok(()) => println!("Chart saved to {}", file),
            Err(e) => {
                error!("rendering {} failed: {}", file, e);
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}
