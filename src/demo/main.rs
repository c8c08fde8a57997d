use clap::Parser;
use console::Color;
use imgtext::logger::init_logger_exe;
use imgtext::{Credentials, ExtractionOptions, ExtractorConfig, ImageTextExtractor};
use imgtext_cli::common::display::{
    print_banner, print_batch, print_colored_text, print_loading_animation, print_result,
};
use imgtext_cli::common::utils::load_config;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(version, about = "Runs the image text extractor against a fixed set of images", long_about = None)]
struct Cli {
    #[arg(long, help = "JSON config file, demo users are used when absent")]
    config: Option<PathBuf>,
    #[arg(long, help = "image for the single-image runs", default_value = "img.png")]
    image: PathBuf,
    #[arg(
        long,
        num_args = 1..,
        help = "images for the batch runs",
        default_values = ["img1.png", "img2.png"]
    )]
    batch: Vec<PathBuf>,
    #[arg(long, default_value = "user1")]
    user: String,
    #[arg(long, default_value = "password1")]
    password: String,
    #[arg(long, help = "skip the pause and loading bar", default_value_t = false)]
    no_animation: bool,
}

fn demo_config() -> ExtractorConfig {
    ExtractorConfig::default()
        .with_user("user1", "password1")
        .with_user("user2", "password2")
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => match load_config(Some(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{:#}", e);
                std::process::exit(1);
            }
        },
        None => demo_config(),
    };
    if let Err(e) = init_logger_exe(config.error_log.as_deref()) {
        eprintln!("Failed to initialize logger: {:#}", e);
    }

    print_banner();
    if !cli.no_animation {
        std::thread::sleep(Duration::from_secs(2));
        print_loading_animation(Duration::from_millis(100));
    }

    let extractor = ImageTextExtractor::new(config);
    let credentials = Credentials::new(cli.user, cli.password);
    let tesseract = ExtractionOptions::default().with_engine("tesseract");
    let neural = ExtractionOptions::default().with_engine("neural");

    let result = extractor.extract_text_from_image(&cli.image, &credentials, &tesseract);
    println!("\nExtracted Text (Single Image - Tesseract):");
    print_result(result.as_ref(), Color::Green);

    let result = extractor.extract_text_from_image(&cli.image, &credentials, &neural);
    println!("\nExtracted Text (Single Image - Neural):");
    print_result(result.as_ref(), Color::Blue);

    let results = extractor.batch_process_images(cli.batch.as_slice(), &credentials, &tesseract);
    println!("\nExtracted Text (Batch Processing - Tesseract):");
    print_batch(&results, Color::Yellow);

    let results = extractor.batch_process_images(cli.batch.as_slice(), &credentials, &neural);
    println!("\nExtracted Text (Batch Processing - Neural):");
    print_batch(&results, Color::Yellow);

    print_colored_text("\nExtraction process completed!", Color::Green);
}
