use console::{style, Color};
use imgtext::{BatchResults, ExtractionResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const BANNER: &str = r#"
 ___ __  __  ____ _____ _______  _______
|_ _|  \/  |/ ___|_   _| ____\ \/ /_   _|
 | || |\/| | |  _  | | |  _|  \  /  | |
 | || |  | | |_| | | | | |___ /  \  | |
|___|_|  |_|\____| |_| |_____/_/\_\ |_|
"#;

pub fn print_banner() {
    println!("{}", style(BANNER).cyan().bold());
    println!("Welcome to the image text extractor!");
    println!("Initiating extraction process...");
}

/// Fills a 20 step bar, `step` apart.
pub fn print_loading_animation(step: Duration) {
    let bar = ProgressBar::new(20);
    let bar_style = ProgressStyle::with_template("\nLoading: [{bar:20}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(bar_style);

    for _ in 0..20 {
        std::thread::sleep(step);
        bar.inc(1);
    }
    bar.finish_with_message("Complete!");
}

pub fn print_colored_text(text: &str, color: Color) {
    println!("{}", style(text).fg(color));
}

pub fn print_result(result: Option<&ExtractionResult>, color: Color) {
    match result {
        Some(result) => {
            print_colored_text(&result.text, color);
            println!(
                "Detected Language: {} (confidence {:.2})",
                result.language, result.confidence
            );
        }
        None => print_colored_text("No text extracted, see the error log.", Color::Red),
    }
}

pub fn print_batch(results: &BatchResults, color: Color) {
    for (path, result) in results.iter() {
        println!("--- Image: {} ---", path.display());
        print_result(result, color);
    }
    println!("---------------");
}
