use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Combine numbered frame PNGs into looping demo GIFs.
#[derive(Parser, Debug)]
#[command(name = "demoreel", version)]
struct Cli {
    /// Directory holding frame-1.png, frame-2.png, ...
    /// [default: /tmp/recomposable-frames]
    frames_dir: Option<PathBuf>,

    /// Directory the GIFs are written to. [default: screenshots]
    out_dir: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<demoreel::DemoreelError>() {
                Some(err) if err.is_missing_frame() => eprintln!("{err}"),
                _ => eprintln!("error: {e:?}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let board = demoreel::Storyboard::builtin();
    let opts = demoreel::RunOpts::new(cli.frames_dir, cli.out_dir);

    println!("Speed: {}", board.speed);
    demoreel::run(&board, &opts, &mut |summary| println!("  {summary}"))?;
    Ok(())
}
