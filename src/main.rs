use anyhow::{anyhow, Result};
use clap::Parser;
use icon_stub::generate;
use icon_stub::Rgba;
use std::fs::create_dir_all;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Parser)]
#[clap(
    name = "icon-stub",
    about = "Generate solid-color placeholder PNG icons for desktop app bundles"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Custom PNG icon sizes to generate. When set, only these sizes are generated.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    png: Option<Vec<u32>>,

    /// Fill color for the generated icons (CSS color format).
    #[clap(short, long, default_value = "#2980b9")]
    color: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let color = parse_color(&args.color)?;

    create_dir_all(&args.output)
        .map_err(|e| anyhow!("Can't create output directory {}: {e}", args.output.display()))?;

    match &args.png {
        Some(sizes) => generate::generate_custom_sizes(&args.output, sizes, color),
        None => generate::generate_placeholder_set(&args.output, color),
    }
}

fn parse_color(color: &str) -> Result<Rgba> {
    let parsed =
        css_color::Srgb::from_str(color).map_err(|_| anyhow!("Invalid CSS color: {color}"))?;

    Ok(Rgba::new(
        (parsed.red * 255.) as u8,
        (parsed.green * 255.) as u8,
        (parsed.blue * 255.) as u8,
        (parsed.alpha * 255.) as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color_is_placeholder_blue() {
        let color = parse_color("#2980b9").unwrap();
        assert_eq!(color, Rgba::new(41, 128, 185, 255));
    }

    #[test]
    fn test_named_and_functional_colors_parse() {
        assert_eq!(parse_color("red").unwrap(), Rgba::new(255, 0, 0, 255));
        assert_eq!(
            parse_color("rgb(41 128 185)").unwrap(),
            Rgba::new(41, 128, 185, 255)
        );
    }

    #[test]
    fn test_garbage_color_is_rejected() {
        assert!(parse_color("not-a-color").is_err());
    }
}
