//! Command dispatch: synthesize once, then hand the result to an output.

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use esweep::{io, synthesize, SweepConfig, Synthesis};

use super::cli::Commands;
use super::playback;
use super::ui::UiApp;

/// Run one CLI command to completion
pub fn run(command: Commands) -> EyreResult<()> {
    match command {
        Commands::Generate {
            sweep,
            output,
            single_output,
            format,
        } => {
            let synthesis = synthesize_reported(&sweep.to_config())?;
            let format = io::WavFormat::from(format);

            io::write_wav(&output, &synthesis.composite, synthesis.sample_rate, format)
                .wrap_err_with(|| format!("failed to write {}", output.display()))?;
            println!("Composite: {}", output.display());

            if let Some(path) = single_output {
                io::write_wav(&path, &synthesis.single, synthesis.sample_rate, format)
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                println!("Single:    {}", path.display());
            }
            Ok(())
        }
        Commands::Plot { sweep } => {
            let config = sweep.to_config();
            let synthesis = synthesize_reported(&config)?;
            let mut app = UiApp::new(&synthesis);

            let mut terminal = ratatui::init();
            let res = app.run(&mut terminal);
            ratatui::restore();
            res
        }
        Commands::Play { sweep } => {
            let synthesis = synthesize_reported(&sweep.to_config())?;
            println!("Playing... Press Ctrl+C to stop");
            playback::play(&synthesis.composite, synthesis.sample_rate)
        }
    }
}

/// Synthesize and print a short summary of what was produced
fn synthesize_reported(config: &SweepConfig) -> EyreResult<Synthesis> {
    let synthesis = synthesize(config).wrap_err("sweep synthesis failed")?;
    let rate = synthesis.sample_rate;

    println!("=== esweep ===");
    println!("Sample rate: {} Hz", rate);
    println!(
        "Sweep: {} samples ({:.3} s)",
        synthesis.single.len(),
        synthesis.single.len() as f64 / rate
    );
    println!(
        "Repetitions: {} every {:.3} s",
        synthesis.repetition_count,
        config.sweep_duration + synthesis.inter_sweep_interval
    );
    for (i, offset) in synthesis.offsets.iter().enumerate() {
        println!("  #{}: sample {} ({:.3} s)", i + 1, offset, *offset as f64 / rate);
    }
    println!(
        "Composite: {} samples ({:.3} s)",
        synthesis.composite.len(),
        synthesis.composite.len() as f64 / rate
    );
    println!();

    Ok(synthesis)
}
