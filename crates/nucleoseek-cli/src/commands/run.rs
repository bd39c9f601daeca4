use crate::cli::RunArgs;
use crate::config;
use crate::error::{CliError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use nucleoseek::engine::progress::{Progress, ProgressReporter};
use nucleoseek::workflows::discovery::DiscoverySession;
use tracing::info;

pub fn run(args: RunArgs) -> Result<()> {
    let params = config::load_params(args.config.as_deref())?;
    let mut session = match args.seed {
        Some(seed) => {
            info!(seed, "starting deterministic run");
            DiscoverySession::with_seed(params, args.max_z, seed)?
        }
        None => DiscoverySession::new(params, args.max_z)?,
    };

    let bar = ProgressBar::new(args.ticks);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ticks ({eta})",
        )
        .expect("progress bar template is valid")
        .progress_chars("#>-"),
    );

    let bar_handle = bar.clone();
    let reporter = ProgressReporter::with_callback(Box::new(move |event| match event {
        Progress::TickFinish => bar_handle.inc(1),
        Progress::Discovery {
            atomic_number,
            symbol,
        } => bar_handle.println(format!("  ✨ discovered {symbol} (Z={atomic_number})")),
        Progress::RunStart { .. } | Progress::RunFinish => {}
    }));

    let report = session.run(args.ticks, &reporter);
    bar.finish_and_clear();

    if args.json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::Other(anyhow::Error::new(e)))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Ran {} ticks.", report.ticks);
    println!(
        "Engine claimed stability {} times; {} claims were correct.",
        report.claims, report.correct_claims
    );
    println!(
        "Discovered {} of {} elements:",
        report.discovered.len(),
        nucleoseek::core::catalog::all().len()
    );
    for element in &report.discovered {
        println!(
            "  {:>3}  {:<2}  {}",
            element.atomic_number, element.symbol, element.name
        );
    }
    Ok(())
}
