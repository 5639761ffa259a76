use std::io::Write as _;

use anyhow::Context as _;

use crate::cli::{
    ChapterArgs, FooterArgs, HeadingArgs, HintsArgs, ImageArgs, PageArgs, ParagraphArgs, PoemArgs,
};
use crate::compile;
use crate::formats::{ContentKind, Record};
use crate::numbering::Counters;
use crate::options;
use crate::paragraph::ParagraphDraft;

pub fn chapter(args: ChapterArgs) -> anyhow::Result<()> {
    print_record(&compile::chapter(&args.select)?)
}

pub fn heading(args: HeadingArgs) -> anyhow::Result<()> {
    let mut counters = Counters::default();
    let record = compile::heading(&mut counters, &args.text, args.kind, &args.number)?;
    print_record(&record)
}

pub fn hints(args: HintsArgs) -> anyhow::Result<()> {
    let mut counters = Counters::default();
    print_record(&compile::hints(&mut counters, &args.text)?)
}

pub fn page(args: PageArgs) -> anyhow::Result<()> {
    if args.preview {
        return print_line(&options::page_preview(&args.number));
    }
    print_record(&compile::page(&args.number)?)
}

pub fn paragraph(args: ParagraphArgs) -> anyhow::Result<()> {
    let mut draft = ParagraphDraft::new(&args.volume, &args.chapter, &args.custom_id);
    for (index, snippet) in args.snippets.iter().enumerate() {
        let link = match snippet.kind {
            ContentKind::Verse => args.verse_link.as_deref(),
            _ => None,
        };
        draft
            .add_snippet(snippet.kind, &snippet.value, link)
            .with_context(|| format!("add snippet {index} ({})", snippet.kind.as_str()))?;
    }
    print_record(&draft.assemble()?)
}

pub fn poem(args: PoemArgs) -> anyhow::Result<()> {
    print_record(&compile::poem(&args.id, &args.title, &args.text)?)
}

pub fn image(args: ImageArgs) -> anyhow::Result<()> {
    print_record(&compile::image(&args.src)?)
}

pub fn footer(args: FooterArgs) -> anyhow::Result<()> {
    print_record(&compile::footer_passage(&args.id, &args.text)?)
}

pub fn list_options() -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(&options::catalog()).context("serialize option catalog")?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(yaml.as_bytes())
        .context("write option catalog to stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn print_record(record: &Record) -> anyhow::Result<()> {
    print_line(&record.to_pretty_json()?)
}

fn print_line(line: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}").context("write to stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}
