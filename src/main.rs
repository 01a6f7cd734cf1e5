use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;

use toysim::toy::{Machine, program::{read_image, read_inputs}};
use toysim::ui::{Debugger, Terminal, run_plain};

#[derive(Parser, Debug)]
#[command(name = "toysim", version)]
#[command(about = "Toy machine simulator with a line debugger", long_about = None)]
struct Args {
    /// Program image, one `AA: WWWW` cell per line
    program: PathBuf,

    /// Values for LOAD from FF, one hex word per line; the console is asked once they run out
    input: Option<PathBuf>,

    /// Start under the debugger
    #[arg(short, long)]
    debug: bool,

    /// Trace every instruction
    #[arg(short, long)]
    verbose: bool,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level).init()?;

    let image = read_image(&args.program)?;
    let inputs = match &args.input {
        Some(path) => read_inputs(path)?,
        None => Vec::new(),
    };
    info!("loaded {} cells from {}", image.cells().len(), args.program.display());

    let machine = Machine::new(image, inputs)?;
    let mut console = Terminal;
    if args.debug {
        let mut dbg = Debugger::new(machine);
        dbg.verbose = args.verbose;
        dbg.run(&mut console).context("debugger aborted")?;
    } else {
        let mut machine = machine;
        run_plain(&mut machine, &mut console, args.verbose).context("program aborted")?;
    }
    Ok(())
}
