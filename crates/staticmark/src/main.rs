//! staticmark - build a static site from Markdown

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use staticmark::{SiteConfig, SiteGenerator};
use staticmark_core::{LineBreaks, Options, UnmatchedDelimiter};

#[derive(Parser)]
#[command(name = "staticmark")]
#[command(version, about = "Build a static HTML site from Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    staticmark                              Build ./content into ./public
    staticmark --basepath /my-repo/         Build for hosting under a sub-path")]
struct Cli {
    /// Directory of Markdown pages
    #[arg(long, value_name = "DIR", default_value = "content")]
    content: PathBuf,

    /// Directory of assets copied verbatim
    #[arg(long = "static", value_name = "DIR", default_value = "static")]
    static_dir: PathBuf,

    /// Output directory (replaced on every build)
    #[arg(short, long, value_name = "DIR", default_value = "public")]
    output: PathBuf,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long, value_name = "FILE", default_value = "template.html")]
    template: PathBuf,

    /// Prefix for root-relative links
    #[arg(long, default_value = "/")]
    basepath: String,

    /// Fail on unpaired **, _ or ` markers instead of keeping them as text
    #[arg(long)]
    strict: bool,

    /// Render line breaks inside paragraphs as spaces
    #[arg(long)]
    join_lines: bool,
}

impl From<Cli> for SiteConfig {
    fn from(cli: Cli) -> Self {
        let mut markdown = Options::default();
        if cli.strict {
            markdown.unmatched_delimiter = UnmatchedDelimiter::Strict;
        }
        if cli.join_lines {
            markdown.line_breaks = LineBreaks::Space;
        }

        SiteConfig {
            content_dir: cli.content,
            static_dir: cli.static_dir,
            output_dir: cli.output,
            template_path: cli.template,
            basepath: cli.basepath,
            markdown,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let generator = SiteGenerator::with_config(Cli::parse().into());
    match generator.build() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
