//! Human-readable run report on stdout

use crate::output::Summary;
use std::path::Path;

/// Prints a summary to stdout in a formatted manner
///
/// # Arguments
///
/// * `summary` - The run summary to display
/// * `output_root` - Directory the artifacts were written to
pub fn print_summary(summary: &Summary, output_root: &Path) {
    println!("=== Extraction Summary ===\n");

    println!("Overview:");
    println!("  Base URL: {}", summary.base_url);
    println!("  Output directory: {}", output_root.display());
    println!("  Duration: {} seconds", summary.duration_seconds());
    println!();

    println!("Pages:");
    println!("  Attempted: {}", summary.pages_extracted);
    println!("  With content: {}", summary.pages_with_content);
    if !summary.failed_pages.is_empty() {
        println!("  Failed ({}):", summary.failed_pages.len());
        for page in &summary.failed_pages {
            println!("    - {}", page);
        }
    }
    println!();

    println!("Assets:");
    println!("  Images downloaded: {}", summary.total_images);
    println!("  Stylesheets downloaded: {}", summary.total_css_files);
    println!();

    println!("Design tokens:");
    println!("  Unique colors: {}", summary.unique_colors.len());
    println!("  Unique fonts: {}", summary.unique_fonts.len());
    for font in &summary.unique_fonts {
        println!("    - {}", font);
    }
}
