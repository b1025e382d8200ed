use std::fmt;
use std::path::PathBuf;

use capture::QuatOrder;
use clap::{Parser, ValueEnum};
use export::{Materialize, PrepConfig};
use tracing::info;

/// CLI for converting a pose capture into a 3DGRUT-style training dataset.
#[derive(Parser)]
struct Args {
    /// Capture directory containing images/ and poses.json
    #[arg(long)]
    data_dir: PathBuf,

    /// Output directory for the prepared dataset
    #[arg(long)]
    output_dir: PathBuf,

    /// Fraction of frames assigned to the train split
    #[arg(long, default_value_t = export::DEFAULT_SPLIT_RATIO)]
    split_ratio: f64,

    /// Shuffle seed for a reproducible split
    #[arg(long)]
    seed: Option<u64>,

    /// Component order of quaternions in poses.json
    #[arg(long, value_enum, default_value_t = QuatOrderArg::Wxyz)]
    quat_order: QuatOrderArg,

    /// Copy image files instead of symlinking the images directory
    #[arg(long)]
    copy_images: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum QuatOrderArg {
    Wxyz,
    Xyzw,
}

impl fmt::Display for QuatOrderArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuatOrderArg::Wxyz => "wxyz",
            QuatOrderArg::Xyzw => "xyzw",
        })
    }
}

impl From<QuatOrderArg> for QuatOrder {
    fn from(arg: QuatOrderArg) -> Self {
        match arg {
            QuatOrderArg::Wxyz => QuatOrder::Wxyz,
            QuatOrderArg::Xyzw => QuatOrder::Xyzw,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = PrepConfig::default()
        .with_split_ratio(args.split_ratio)
        .with_quat_order(args.quat_order.into());
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.copy_images {
        config = config.with_images(Materialize::CopyDir);
    }

    let summary = export::prepare(&args.data_dir, &args.output_dir, &config)?;

    info!(
        "Processed {} frames: train {}, val {}, test {}",
        summary.n_frames, summary.n_train, summary.n_val, summary.n_test
    );
    if summary.is_panorama {
        info!("Capture contains spherical images; the trainer may need panorama handling");
    }

    Ok(())
}
