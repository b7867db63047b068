use clap::{Parser, ValueEnum};
use tweening::{DemoConfig, Easing, FrameSample};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of frames to simulate
    #[arg(long)]
    frames: Option<u32>,

    /// Simulated frames per second
    #[arg(long)]
    fps: Option<f64>,

    /// Use this easing for every property (e.g. bounceEaseOut, strong_ease_in)
    #[arg(long)]
    easing: Option<Easing>,

    /// Wrap tweens around instead of stopping at the end
    #[arg(long)]
    looping: bool,

    /// Reverse every tween each time it finishes
    #[arg(long)]
    yoyo: bool,

    /// Keep durations as configured instead of halving them
    #[arg(long)]
    exact_duration: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// List available easing functions
    #[arg(long)]
    list_easings: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Ron,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    // Handle --list-easings flag
    if args.list_easings {
        for easing in Easing::ALL {
            println!("{easing}");
        }
        return Ok(());
    }

    let mut config = DemoConfig::load()?;
    apply_overrides(&mut config, &args);
    log::debug!("Configuration: {config:?}");

    let samples = tweening::run_headless(&config);

    match args.format {
        OutputFormat::Table => print_table(&samples),
        OutputFormat::Ron => {
            let pretty = ron::ser::PrettyConfig::default();
            println!("{}", ron::ser::to_string_pretty(&samples, pretty)?);
        }
    }

    Ok(())
}

fn apply_overrides(config: &mut DemoConfig, args: &Args) {
    if let Some(frames) = args.frames {
        config.scene.frames = frames;
    }
    if let Some(fps) = args.fps {
        config.scene.frame_rate = fps;
    }
    if let Some(easing) = args.easing {
        config.scene.x_easing = easing;
        config.scene.y_easing = easing;
        config.scene.color_easing = easing;
        config.scene.radius_easing = easing;
    }
    config.tween.looping |= args.looping;
    config.tween.yoyo |= args.yoyo;
    if args.exact_duration {
        config.tween.legacy_halved_duration = false;
    }
}

fn print_table(samples: &[FrameSample]) {
    println!(
        "{:>6} {:>8} {:>10} {:>10} {:>8} {:>8}",
        "frame", "time", "x", "y", "blue", "radius"
    );
    for sample in samples {
        let sprite = sample.sprite;
        println!(
            "{:>6} {:>8.3} {:>10.3} {:>10.3} {:>8.1} {:>8.2}{}",
            sample.frame,
            sample.time,
            sprite.x,
            sprite.y,
            sprite.blue_level,
            sprite.radius,
            if sample.finished > 0 { "  *" } else { "" }
        );
    }
}
