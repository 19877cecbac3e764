use clap::Parser;
use distancing::{
    config::Config,
    presenter::{Control, Controls, Presenter, ViewModel},
    prelude::*,
};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{fs::File, process};

/// Draw the infection curve of a social distancing scenario.
#[derive(Parser, Debug)]
#[command(name = "curve")]
struct Args {
    /// Optional path for a TOML scenario file
    #[arg(short, long)]
    config: Option<String>,

    /// Contacts per person per day during the intervention
    #[arg(short, long)]
    reduced_contacts: Option<Real>,

    /// First day of the intervention
    #[arg(short, long)]
    start_day: Option<Real>,

    /// Day the intervention ends (exclusive)
    #[arg(short, long)]
    end_day: Option<Real>,

    /// Optional path for the CSV epicurve
    #[arg(short, long)]
    output: Option<String>,

    /// Plot width in characters
    #[arg(long)]
    width: Option<usize>,

    /// Plot height in characters
    #[arg(long)]
    height: Option<usize>,

    /// Print debug information
    #[arg(short, long)]
    verbose: bool,
}

pub fn main() {
    let args = Args::parse();
    SimpleLogger::new()
        .with_level(LevelFilter::Debug)
        .init()
        .unwrap();
    log::set_max_level(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let cfg = match &args.config {
        Some(path) => {
            info!("Using scenario from {}", path);
            Config::load(path)?
        }
        None => Config::default(),
    };
    if cfg.verbose() {
        log::set_max_level(LevelFilter::Debug);
    }

    let mut presenter =
        Presenter::with_controls(cfg.fixed(), Controls::from(cfg.variable()))?;
    let mut view = presenter.view()?;
    let moves = [
        (Control::ReducedContacts, args.reduced_contacts),
        (Control::StartDay, args.start_day),
        (Control::EndDay, args.end_day),
    ];
    for (control, value) in moves {
        if let Some(value) = value {
            view = presenter.update(control, value)?;
        }
    }

    let width = args.width.unwrap_or(cfg.plot().width());
    let height = args.height.unwrap_or(cfg.plot().height());
    report(&presenter, &view, width, height);

    if let Some(path) = args.output.as_ref().or(cfg.output().as_ref()) {
        view.result().write_csv(File::create(path)?)?;
        info!("Epicurve written to {}", path);
    }
    Ok(())
}

fn report(presenter: &Presenter, view: &ViewModel, width: usize, height: usize) {
    let controls = presenter.controls();
    println!("{}", view.render_ascii(width, height));
    println!();
    for control in Control::ALL {
        println!("{:>22}: {}", control.range().label, controls.get(control));
    }
}
