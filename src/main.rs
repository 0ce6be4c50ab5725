use std::{fs::File, io::Write, path::PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::Result;
use sat2vc::{
    graph::VertexCover,
    io,
    reduce::{reduce, Method},
};
use simplelog::LevelFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Emit {
    /// 3-CNF formula in DIMACS
    Cnf,
    /// Vertex Cover instance
    Vc,
}

#[derive(Parser)]
#[command(author, version, about = "Reduce a DIMACS CNF formula to 3-SAT and Vertex Cover")]
struct Cli {
    /// Input file in DIMACS CNF, optionally .gz, .bz2 or .xz
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Reduction used to reach 3-CNF
    #[arg(short, long, value_enum, default_value_t = Method::Linear)]
    method: Method,

    /// What to write
    #[arg(short, long, value_enum, default_value_t = Emit::Vc)]
    emit: Emit,

    /// Output file, stdout if absent
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// More log output, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// No log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    log::info!("Reading {:?}", cli.input);
    let mut input = io::open(&cli.input)?;
    let problem = io::read_problem(&mut input)?;

    let formula = reduce(&problem, cli.method)?;

    let mut output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };

    match cli.emit {
        Emit::Cnf => io::write_formula(&mut output, &formula)?,
        Emit::Vc => {
            let vc = VertexCover::from_formula(&formula)?;
            io::vc::write_vertex_cover(&mut output, &vc)?;
        }
    }

    Ok(())
}
