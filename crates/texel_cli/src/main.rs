//! Texel CLI
//!
//! Rasterize SVG files through the Texel SVG reader and save them as PNG.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use texel_core::{FilePathList, ReadError, ReaderOptions, ReaderWriter};
use texel_svg::SvgReader;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod output;

use config::TexelConfig;

#[derive(Parser)]
#[command(name = "texel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rasterize SVG files into texture images", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./texel.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rasterize an SVG file and write it as PNG
    Render {
        /// SVG file, absolute or relative to a search path
        input: String,

        /// Output PNG path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reader option string, e.g. "1024x512" or "rs=2.0"
        #[arg(long = "options")]
        option_string: Option<String>,

        /// Additional search directory (repeatable)
        #[arg(short, long = "path")]
        paths: Vec<PathBuf>,
    },

    /// Show reader name, extensions and options
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = match &cli.config {
        Some(path) => TexelConfig::load(path)?,
        None => TexelConfig::load_from_dir(&std::env::current_dir()?)?,
    };

    match cli.command {
        Commands::Render {
            input,
            output,
            option_string,
            paths,
        } => cmd_render(&config, &input, output, option_string, paths),

        Commands::Info => cmd_info(&config),
    }
}

fn build_reader(config: &TexelConfig) -> SvgReader {
    let mut data_paths = FilePathList::from_env_default();
    data_paths.extend(config.search_paths.iter().cloned());

    SvgReader::new()
        .with_data_paths(data_paths)
        .with_system_fonts(config.load_system_fonts)
}

fn cmd_render(
    config: &TexelConfig,
    input: &str,
    output: Option<PathBuf>,
    option_string: Option<String>,
    paths: Vec<PathBuf>,
) -> Result<()> {
    let reader = build_reader(config);

    let mut options = ReaderOptions::new();
    if let Some(option_string) = option_string.or_else(|| config.option_string.clone()) {
        options = options.with_option_string(option_string);
    }
    options.database_paths.extend(paths);

    let image = match reader.read_image(input, Some(&options)) {
        Ok(image) => image,
        Err(ReadError::FileNotHandled) => {
            anyhow::bail!("'{}' is not an SVG file", input)
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", input)),
    };

    let output = output.unwrap_or_else(|| default_output(config, input));
    output::save_png(&image, &output)?;

    info!(
        "Wrote {}x{} image to {}",
        image.width(),
        image.height(),
        output.display()
    );
    Ok(())
}

/// `<output_dir or cwd>/<input stem>.png`
fn default_output(config: &TexelConfig, input: &str) -> PathBuf {
    let stem = Path::new(input)
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "out".into());
    let mut name = PathBuf::from(stem);
    name.set_extension("png");

    match &config.output_dir {
        Some(dir) => dir.join(name),
        None => name,
    }
}

fn cmd_info(config: &TexelConfig) -> Result<()> {
    let reader = build_reader(config);

    println!("{}", reader.class_name());
    println!();
    println!("Extensions:");
    for (ext, description) in reader.supported_extensions() {
        println!("  .{:<10} {}", ext, description);
    }
    println!();
    println!("Options:");
    for (option, description) in reader.supported_options() {
        println!("  {:<11} {}", option, description);
    }
    println!();
    println!("Search paths:");
    if reader.data_paths().is_empty() {
        println!("  (none)");
    }
    for path in reader.data_paths().iter() {
        println!("  {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::CONFIG_FILE_NAME;
    use std::fs;

    // Top half red, bottom half blue.
    const SHAPE: &str = r#"
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20">
            <rect x="0" y="0" width="20" height="10" fill="red"/>
            <rect x="0" y="10" width="20" height="10" fill="blue"/>
        </svg>
    "#;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("texel-cli-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_render_with_config_and_flags() {
        let dir = scratch_dir("render");
        let assets = dir.join("assets");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("shape.svg"), SHAPE).unwrap();

        let config = TexelConfig {
            search_paths: vec![assets.clone()],
            option_string: Some("256x256".into()),
            output_dir: Some(dir.clone()),
            ..Default::default()
        };
        let config_path = dir.join(CONFIG_FILE_NAME);
        fs::write(&config_path, config.to_toml().unwrap()).unwrap();
        let config = TexelConfig::load(&config_path).unwrap();

        // Config supplies search path, option string and output directory.
        cmd_render(&config, "shape.svg", None, None, Vec::new()).unwrap();
        let png = image::open(dir.join("shape.png")).unwrap().to_rgba8();
        assert_eq!(png.dimensions(), (256, 256));
        assert_eq!(png.get_pixel(128, 10).0, [255, 0, 0, 255]);
        assert_eq!(png.get_pixel(128, 245).0, [0, 0, 255, 255]);

        // Command line options win over the config.
        let out = dir.join("flag.png");
        cmd_render(
            &config,
            "shape.svg",
            Some(out.clone()),
            Some("64x32 rs=4".into()),
            Vec::new(),
        )
        .unwrap();
        let png = image::open(&out).unwrap().to_rgba8();
        assert_eq!(png.dimensions(), (256, 128));

        // Search paths can come from flags alone.
        let out = dir.join("paths.png");
        cmd_render(
            &TexelConfig::default(),
            "shape.svg",
            Some(out.clone()),
            None,
            vec![assets],
        )
        .unwrap();
        let png = image::open(&out).unwrap().to_rgba8();
        assert_eq!(png.dimensions(), (128, 128));
    }

    #[test]
    fn test_render_rejects_other_formats() {
        let err = cmd_render(&TexelConfig::default(), "photo.png", None, None, Vec::new())
            .unwrap_err();
        assert!(err.to_string().contains("not an SVG file"));
    }

    #[test]
    fn test_default_output_name() {
        let config = TexelConfig::default();
        assert_eq!(default_output(&config, "icons/logo.svg"), PathBuf::from("logo.png"));

        let config = TexelConfig {
            output_dir: Some(PathBuf::from("out")),
            ..Default::default()
        };
        assert_eq!(
            default_output(&config, "logo.svg"),
            PathBuf::from("out").join("logo.png")
        );
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "texel", "render", "a.svg", "--options", "rs=2.0", "-p", "x", "-p", "y",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                input,
                option_string,
                paths,
                ..
            } => {
                assert_eq!(input, "a.svg");
                assert_eq!(option_string.as_deref(), Some("rs=2.0"));
                assert_eq!(paths.len(), 2);
            }
            Commands::Info => panic!("expected render"),
        }
    }
}
