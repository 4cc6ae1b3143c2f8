use clap::{Parser, Subcommand};
use logo_gal::icon::IconConfig;
use logo_gal::raster::RsvgBackend;
use logo_gal::server::FileServer;
use logo_gal::{gallery, icon, output, scan};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "logo-gal")]
#[command(about = "Gallery and raster pipeline for SVG logo collections")]
#[command(long_about = "\
Gallery and raster pipeline for SVG logo collections

Your filesystem is the data source: a flat directory of SVG files. Each
logo is rendered at the standard hicolor sizes, incrementally — a PNG is
regenerated only when it is missing or older than its source SVG.

Expected layout:

  logos/                           # Source directory (--source)
  ├── logo.svg
  ├── logo-mono.svg
  └── badge.svg
  share/icons/hicolor/             # Rendered output (--output)
  ├── 16x16/logo.png
  ├── 32x32/logo.png
  └── ...
  index.html                       # Gallery page (logo-gal index)

Rendering is delegated to rsvg-convert (Debian: librsvg2-bin); the
preview server wraps python3 -m http.server on port 8000.")]
#[command(version = version_string())]
struct Cli {
    /// Logo source directory
    #[arg(long, default_value = "logos", global = true)]
    source: PathBuf,

    /// Root directory for rendered PNGs
    #[arg(long, default_value = "share/icons/hicolor", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the index.html gallery page
    Index {
        /// Start the preview server after generating
        #[arg(long)]
        serve: bool,
    },
    /// Render missing or outdated PNG icons for every logo and size
    Icon,
    /// Serve a directory over HTTP for preview
    Server {
        /// Directory to serve [default: .]
        dir: Option<PathBuf>,
    },
    /// Validate the logo directory without writing anything
    Check,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = IconConfig::new(&cli.source, &cli.output);

    match cli.command {
        Command::Index { serve } => {
            let listing = scan::scan(&cli.source)?;
            let out_path = PathBuf::from("index.html");
            gallery::generate(&listing, &config, &out_path)?;
            output::print_index_output(&listing, &out_path);
            if serve {
                run_server(PathBuf::from("."))?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Icon => {
            let backend = RsvgBackend::new();
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_icon_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let report = icon::regenerate(&backend, &config, Some(tx))?;
            printer.join().unwrap();
            output::print_icon_summary(&report);
            if report.is_clean() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Server { dir } => {
            run_server(dir.unwrap_or_else(|| PathBuf::from(".")))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let listing = scan::scan(&cli.source)?;
            output::print_check_output(&listing);
            println!("==> Logo directory is valid");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_server(dir: PathBuf) -> Result<(), logo_gal::server::ServerError> {
    let server = FileServer::new(dir);
    println!(
        "==> Serving {} at http://localhost:{}/ (Ctrl-C to stop)",
        server.dir.display(),
        server.port
    );
    server.serve()
}
