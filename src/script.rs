//! YAML build scripts: an ordered list of steps replayed against one session.
//!
//! ```yaml
//! steps:
//!   - chapter: chapter-01
//!   - heading: { text: Beginnings, kind: main, number: 1 }
//!   - paragraph:
//!       volume: v1
//!       chapter: c01
//!       custom_id: 1
//!       snippets:
//!         - { kind: text, value: "In the beginning" }
//!         - { kind: verse, value: "Gen 1:1" }
//!   - page: 12
//!   - undo
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

use crate::cli::BuildArgs;
use crate::compile;
use crate::export;
use crate::formats::{ContentKind, HeadingType};
use crate::output::{OutputSequence, UndoOutcome};
use crate::paragraph::ParagraphDraft;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Chapter(String),
    Heading(HeadingStep),
    Hints(String),
    Page(Token),
    Paragraph(ParagraphStep),
    Poem(PoemStep),
    Image(String),
    FooterPassage(FooterPassageStep),
    /// Path to an exported array, relative to the script file.
    Import(PathBuf),
    Undo,
    Clear,
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Step::Chapter(_) => "chapter",
            Step::Heading(_) => "heading",
            Step::Hints(_) => "hints",
            Step::Page(_) => "page",
            Step::Paragraph(_) => "paragraph",
            Step::Poem(_) => "poem",
            Step::Image(_) => "image",
            Step::FooterPassage(_) => "footer_passage",
            Step::Import(_) => "import",
            Step::Undo => "undo",
            Step::Clear => "clear",
        }
    }
}

/// A scalar written either as a YAML number or as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Token {
    Number(i64),
    Text(String),
}

impl Token {
    fn to_text(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadingStep {
    pub text: String,
    #[serde(default)]
    pub kind: HeadingType,
    #[serde(default)]
    pub number: Option<Token>,
}

/// `volume` and `chapter` fall back to the previous paragraph's selection when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParagraphStep {
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub chapter: Option<String>,
    pub custom_id: Token,
    pub snippets: Vec<SnippetStep>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnippetStep {
    pub kind: ContentKind,
    pub value: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoemStep {
    pub id: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterPassageStep {
    pub id: String,
    pub text: String,
}

pub fn parse(yaml: &str) -> anyhow::Result<Script> {
    serde_yaml::from_str(yaml).context("deserialize build script")
}

pub fn run(args: BuildArgs) -> anyhow::Result<()> {
    let script_path = PathBuf::from(&args.script);
    let out_path = PathBuf::from(&args.out);

    if out_path.exists() && !args.force {
        anyhow::bail!("build output already exists: {}", out_path.display());
    }

    let yaml = std::fs::read_to_string(&script_path)
        .with_context(|| format!("read build script: {}", script_path.display()))?;
    let script = parse(&yaml)?;

    let base_dir = script_path.parent().unwrap_or_else(|| Path::new(""));
    let output = execute(&script, base_dir)?;

    export::write_output(&output, &out_path, args.force)?;
    Ok(())
}

/// Replays every step in order against a fresh session.
pub fn execute(script: &Script, base_dir: &Path) -> anyhow::Result<OutputSequence> {
    let mut output = OutputSequence::new();
    let mut draft = ParagraphDraft::default();

    for (index, step) in script.steps.iter().enumerate() {
        apply(&mut output, &mut draft, step, base_dir)
            .with_context(|| format!("step {} ({})", index + 1, step.name()))?;
    }

    tracing::info!(
        steps = script.steps.len(),
        records = output.len(),
        "build script finished"
    );
    Ok(output)
}

fn apply(
    output: &mut OutputSequence,
    draft: &mut ParagraphDraft,
    step: &Step,
    base_dir: &Path,
) -> anyhow::Result<()> {
    match step {
        Step::Chapter(selector) => output.append(&compile::chapter(selector)?)?,
        Step::Heading(heading) => {
            let number = heading
                .number
                .as_ref()
                .map(Token::to_text)
                .unwrap_or_default();
            let record =
                compile::heading(output.counters_mut(), &heading.text, heading.kind, &number)?;
            output.append(&record)?;
        }
        Step::Hints(text) => {
            let record = compile::hints(output.counters_mut(), text)?;
            output.append(&record)?;
        }
        Step::Page(number) => output.append(&compile::page(&number.to_text())?)?,
        Step::Paragraph(paragraph) => {
            if let Some(volume) = &paragraph.volume {
                draft.volume.clone_from(volume);
            }
            if let Some(chapter) = &paragraph.chapter {
                draft.chapter.clone_from(chapter);
            }
            draft.custom_id = paragraph.custom_id.to_text();
            draft.clear_snippets();
            for snippet in &paragraph.snippets {
                draft.add_snippet(snippet.kind, &snippet.value, snippet.link.as_deref())?;
            }
            output.commit_paragraph(draft)?;
        }
        Step::Poem(poem) => output.append(&compile::poem(&poem.id, &poem.title, &poem.text)?)?,
        Step::Image(src) => output.append(&compile::image(src)?)?,
        Step::FooterPassage(footer) => {
            output.append(&compile::footer_passage(&footer.id, &footer.text)?)?;
        }
        Step::Import(path) => {
            let records = export::read_import(&base_dir.join(path))?;
            output.append_batch(&records)?;
        }
        Step::Undo => {
            if output.undo() == UndoOutcome::NothingToUndo {
                tracing::warn!("undo step with empty output");
            }
        }
        Step::Clear => {
            output.clear();
            *draft = ParagraphDraft::default();
        }
    }
    Ok(())
}
