use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    let cli = snippetbook::cli::Cli::parse();
    snippetbook::logging::init(&cli.log_level).context("init logging")?;
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        snippetbook::cli::Command::Chapter(args) => {
            snippetbook::snippet::chapter(args).context("chapter")?;
        }
        snippetbook::cli::Command::Heading(args) => {
            snippetbook::snippet::heading(args).context("heading")?;
        }
        snippetbook::cli::Command::Hints(args) => {
            snippetbook::snippet::hints(args).context("hints")?;
        }
        snippetbook::cli::Command::Page(args) => {
            snippetbook::snippet::page(args).context("page")?;
        }
        snippetbook::cli::Command::Paragraph(args) => {
            snippetbook::snippet::paragraph(args).context("paragraph")?;
        }
        snippetbook::cli::Command::Poem(args) => {
            snippetbook::snippet::poem(args).context("poem")?;
        }
        snippetbook::cli::Command::Image(args) => {
            snippetbook::snippet::image(args).context("image")?;
        }
        snippetbook::cli::Command::Footer(args) => {
            snippetbook::snippet::footer(args).context("footer")?;
        }
        snippetbook::cli::Command::Options => {
            snippetbook::snippet::list_options().context("options")?;
        }
        snippetbook::cli::Command::Validate(args) => {
            snippetbook::export::run_validate(args).context("validate")?;
        }
        snippetbook::cli::Command::Build(args) => {
            snippetbook::script::run(args).context("build")?;
        }
    }

    Ok(())
}
