use clap::{Args, Parser, Subcommand, ValueEnum as _};

use crate::formats::{ContentKind, HeadingType};
use crate::output::EXPORT_FILE_NAME;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile a chapter marker.
    Chapter(ChapterArgs),
    /// Compile a main or sub heading.
    Heading(HeadingArgs),
    /// Compile a hints block.
    Hints(HintsArgs),
    /// Compile a Tamil book page marker.
    Page(PageArgs),
    /// Compile a paragraph from inline snippets.
    Paragraph(ParagraphArgs),
    /// Compile a poem.
    Poem(PoemArgs),
    /// Compile an image reference.
    Image(ImageArgs),
    /// Compile a footer passage.
    Footer(FooterArgs),
    /// List the volume, chapter and heading-number options.
    Options,
    /// Check that a file is an importable record array.
    Validate(ValidateArgs),
    /// Run a YAML build script and write the compiled array.
    Build(BuildArgs),
}

#[derive(Debug, Args)]
pub struct ChapterArgs {
    /// Chapter selector, e.g. `chapter-07`.
    #[arg(long)]
    pub select: String,
}

#[derive(Debug, Args)]
pub struct HeadingArgs {
    #[arg(long)]
    pub text: String,

    #[arg(long, value_enum, default_value_t = HeadingType::Main)]
    pub kind: HeadingType,

    /// Numeric prefix `1`..`20`, or `no-prefix`.
    #[arg(long, default_value = "")]
    pub number: String,
}

#[derive(Debug, Args)]
pub struct HintsArgs {
    #[arg(long)]
    pub text: String,
}

#[derive(Debug, Args)]
pub struct PageArgs {
    /// Page number (1-1000). Non-digits are ignored.
    #[arg(long)]
    pub number: String,

    /// Print the formatted preview line instead of the record.
    #[arg(long)]
    pub preview: bool,
}

#[derive(Debug, Args)]
pub struct ParagraphArgs {
    /// Volume token, e.g. `v1`.
    #[arg(long)]
    pub volume: String,

    /// Chapter token, e.g. `c01`.
    #[arg(long)]
    pub chapter: String,

    /// Numeric paragraph id, zero-padded to three digits.
    #[arg(long)]
    pub custom_id: String,

    /// Inline snippet as `<kind>=<value>`, in reading order.
    #[arg(long = "snippet", value_parser = parse_snippet)]
    pub snippets: Vec<SnippetArg>,

    /// Link attached to every verse snippet.
    #[arg(long)]
    pub verse_link: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SnippetArg {
    pub kind: ContentKind,
    pub value: String,
}

fn parse_snippet(raw: &str) -> Result<SnippetArg, String> {
    let (kind, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("snippet must be <kind>=<value>: {raw}"))?;
    let kind = ContentKind::from_str(kind.trim(), true)?;
    Ok(SnippetArg {
        kind,
        value: value.to_owned(),
    })
}

#[derive(Debug, Args)]
pub struct PoemArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub title: String,

    /// Poem text, one line per line break.
    #[arg(long)]
    pub text: String,
}

#[derive(Debug, Args)]
pub struct ImageArgs {
    #[arg(long)]
    pub src: String,
}

#[derive(Debug, Args)]
pub struct FooterArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub text: String,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Exported JSON array to check.
    #[arg(long)]
    pub input: String,

    /// Print the normalized array instead of the record count.
    #[arg(long)]
    pub print: bool,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Input path to the YAML build script.
    #[arg(long)]
    pub script: String,

    /// Output file path for the compiled array.
    #[arg(long, default_value = EXPORT_FILE_NAME)]
    pub out: String,

    /// Overwrite the output file if it exists.
    #[arg(long)]
    pub force: bool,
}
