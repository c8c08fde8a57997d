use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use console::Color;
use imgtext::image_utils::Roi;
use imgtext::logger::init_logger_exe;
use imgtext::{Credentials, ExtractionOptions, ExtractorConfig, ImageTextExtractor};
use imgtext_cli::common::display::{print_batch, print_result};
use imgtext_cli::common::utils::load_config;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about = "A CLI tool to extract text from images", long_about = None)]
struct Cli {
    #[arg(long, global = true, help = "JSON config file (users, error log, OCR settings)")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract text from a single image
    Extract {
        #[arg(long, help = "input file in image (png, jpeg, gif, webp, tiff, bmp, etc) format")]
        image: PathBuf,
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Extract text from several images, one after another
    Batch {
        #[arg(long, num_args = 1.., required = true, help = "input image files")]
        images: Vec<PathBuf>,
        #[command(flatten)]
        request: RequestArgs,
    },
}

#[derive(Args)]
struct RequestArgs {
    #[arg(long, help = "user name")]
    user: String,
    #[arg(long, help = "password")]
    password: String,
    #[arg(long, help = "OCR engine: tesseract or neural", default_value = "tesseract")]
    engine: String,
    #[arg(long, help = "language hint passed to the OCR engine", default_value = "eng")]
    lang: String,
    #[arg(long, help = "skip the preprocessing stage", default_value_t = false)]
    no_preprocessing: bool,
    #[arg(long, help = "skip the rotation correction stage", default_value_t = false)]
    no_rotation_correction: bool,
    #[arg(long, help = "region of interest as x,y,width,height")]
    roi: Option<Roi>,
    #[arg(long, help = "print results as JSON", default_value_t = false)]
    json: bool,
}

impl RequestArgs {
    fn credentials(&self) -> Credentials {
        Credentials::new(&self.user, &self.password)
    }

    fn options(&self) -> ExtractionOptions {
        ExtractionOptions {
            preprocessing: !self.no_preprocessing,
            rotation_correction: !self.no_rotation_correction,
            roi: self.roi,
            ..ExtractionOptions::default()
        }
        .with_engine(&self.engine)
        .with_language(&self.lang)
    }
}

fn run(cli: Cli, config: ExtractorConfig) -> Result<bool> {
    let extractor = ImageTextExtractor::new(config);

    match cli.command {
        Command::Extract { image, request } => {
            let result =
                extractor.extract_text_from_image(&image, &request.credentials(), &request.options());
            if request.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(result.as_ref(), Color::Green);
            }
            Ok(result.is_some())
        }
        Command::Batch { images, request } => {
            let results =
                extractor.batch_process_images(images.as_slice(), &request.credentials(), &request.options());
            if request.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_batch(&results, Color::Yellow);
            }
            log::info!("{}/{} image(s) extracted", results.succeeded(), results.len());
            Ok(results.succeeded() == results.len())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logger_exe(config.error_log.as_deref()) {
        eprintln!("Failed to initialize logger: {:#}", e);
    }
    if let Some(path) = &cli.config {
        log::info!("Loaded config from {}", path.display());
    }

    match run(cli, config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_flags_become_options() {
        let cli = Cli::try_parse_from([
            "imgtext-cli", "extract", "--image", "page.png", "--user", "user1", "--password",
            "password1", "--engine", "neural", "--lang", "deu", "--no-preprocessing", "--roi",
            "1,2,30,40",
        ])
        .unwrap();

        let Command::Extract { image, request } = cli.command else {
            panic!("expected the extract subcommand");
        };
        let options = request.options();
        assert_eq!(image, PathBuf::from("page.png"));
        assert_eq!(options.engine, "neural");
        assert_eq!(options.language, "deu");
        assert!(!options.preprocessing);
        assert!(options.rotation_correction);
        assert_eq!(options.roi.map(|roi| roi.width), Some(30));
        assert_eq!(request.credentials().username, "user1");
    }

    #[test]
    fn test_defaults_match_library_defaults() {
        let cli = Cli::try_parse_from([
            "imgtext-cli", "batch", "--images", "a.png", "b.png", "--user", "u", "--password", "p",
        ])
        .unwrap();

        let Command::Batch { images, request } = cli.command else {
            panic!("expected the batch subcommand");
        };
        let options = request.options();
        let defaults = ExtractionOptions::default();
        assert_eq!(images.len(), 2);
        assert_eq!(options.engine, defaults.engine);
        assert_eq!(options.language, defaults.language);
        assert!(options.preprocessing && options.rotation_correction);
        assert!(options.roi.is_none());
    }
}
