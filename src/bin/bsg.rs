extern crate bindsugar;

use std::process;

use bindsugar::driver::options::DesugarOptions;
use bindsugar::driver::prepare;
use bindsugar::driver::source::SourceLoader;
use bindsugar::driver::statistics::Timings;
use log::debug;

pub fn main() {
    let opt = DesugarOptions::from_args();

    let default_filter = if opt.debug() { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    debug!("{}", opt.explanation());

    let mut loader = SourceLoader::default();
    let mut timings = Timings::default();

    // Load and desugar, handling errors by printing diagnostic
    let output = prepare::prepare(&opt, &mut loader, &mut timings)
        .and_then(|program| prepare::render(&program, &opt));

    match output {
        Ok(text) => {
            print!("{text}");
            exit(&opt, 0, &timings)
        }
        Err(e) => {
            let diag = loader.diagnostic(&e);
            if loader.diagnose_to_stderr(&diag).is_err() {
                eprintln!("error: {e}");
            }
            exit(&opt, 1, &timings)
        }
    }
}

/// Optionally dump timings to stderr then exit
pub fn exit(opts: &DesugarOptions, code: i32, timings: &Timings) {
    if opts.statistics() && !timings.is_empty() {
        eprintln!();
        eprintln!("~~~~~~~~~~");
        eprintln!("STATISTICS");
        eprintln!("~~~~~~~~~~");
        eprintln!();
        eprintln!("{timings}");
    }
    process::exit(code)
}
