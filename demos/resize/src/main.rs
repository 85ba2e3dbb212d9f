use argh::FromArgs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rasize::imgproc::parallel::ExecutionStrategy;
use rasize::imgproc::resize::{resize_with, ResizeSpec};
use rasize::io::{functional as F, ImageFileName};

#[derive(FromArgs)]
/// Resize a jpeg or png image, keeping the aspect ratio when only one side is given
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output image (default: <name>_<width>x<height>.<ext> next to the input)
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// target width, 0 to derive it from the height (default: 0)
    #[argh(option, short = 'w', default = "0")]
    width: usize,

    /// target height, 0 to derive it from the width (default: 0)
    #[argh(option, short = 'H', default = "0")]
    height: usize,

    /// interpolation method: nearest-neighbor, bilinear, bicubic (default: bilinear)
    #[argh(option, short = 'm', default = "String::new()")]
    method: String,

    /// number of worker threads (default: one per logical cpu)
    #[argh(option, short = 't')]
    threads: Option<usize>,
}

fn parse_file_name(path: &Path) -> Result<ImageFileName, Box<dyn std::error::Error>> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("not a file path: {}", path.display()))?;
    Ok(ImageFileName::parse(file_name)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // validate everything before touching the file system
    let input_file = parse_file_name(&args.input)?;
    let spec = ResizeSpec::new(args.width, args.height, &args.method)?;
    let strategy = match args.threads {
        Some(n) => ExecutionStrategy::Fixed(n),
        None => ExecutionStrategy::ParallelChunks,
    };

    // read the image
    let image = F::read_image_rgba8(&args.input)?;

    let start = Instant::now();
    let resized = resize_with(&image, &spec, strategy)?;
    log::info!(
        "resized {} to {} with {} in {:?}",
        image.size(),
        resized.size(),
        spec.interpolation(),
        start.elapsed()
    );

    let output = args.output.unwrap_or_else(|| {
        let suffix = format!("{}x{}", resized.width(), resized.height());
        args.input.with_file_name(input_file.with_suffix(&suffix))
    });
    let output_file = parse_file_name(&output)?;

    F::write_image_rgba8(&output, &resized, output_file.format)?;
    log::info!("wrote {}", output.display());

    Ok(())
}
