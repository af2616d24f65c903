//! Command-line entry point: `article-json <FILE>`.
//!
//! Writes `<FILE>` with `.html` replaced by `.content.json` and
//! `parsed-article.html` in the working directory. Exits 1 on any failure.

use std::path::PathBuf;
use std::process;

use article_json::Error;
use clap::Parser;

#[derive(Parser)]
#[command(name = "article-json", version)]
#[command(about = "Extract the readable article from an HTML file into JSON", long_about = None)]
struct Arguments {
    /// Path to the HTML file to parse
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

impl Arguments {
    fn run(self) -> article_json::Result<()> {
        let input = self
            .input
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(Error::MissingArgument)?;

        let report = article_json::run(&input)?;
        log::info!(
            "wrote `{}` and `{}`",
            report.json_path.display(),
            report.sidecar_path.display()
        );

        println!("HTML processing completed.");
        Ok(())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(error) if error.use_stderr() => {
            eprint!("{error}");
            process::exit(1);
        }
        Err(error) => {
            print!("{error}");
            process::exit(0);
        }
    };

    if let Err(error) = arguments.run() {
        eprintln!("error: {error}");
        process::exit(error.exit_code());
    }
}
