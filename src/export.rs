use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

use anyhow::Context as _;

use crate::cli::ValidateArgs;
use crate::output::OutputSequence;
use crate::validate::{self, ImportedRecord};

/// Writes the exported array to `out`. Refuses to replace an existing file unless `force`.
pub fn write_output(output: &OutputSequence, out: &Path, force: bool) -> anyhow::Result<()> {
    if out.exists() && !force {
        anyhow::bail!("export output already exists: {}", out.display());
    }
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create export output dir: {}", parent.display()))?;
    }

    let json = output.export().context("render compiled output")?;

    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options
        .open(out)
        .with_context(|| format!("open output: {}", out.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("write output: {}", out.display()))?;
    file.flush()
        .with_context(|| format!("flush output: {}", out.display()))?;

    tracing::info!(records = output.len(), out = %out.display(), "wrote compiled output");
    Ok(())
}

/// Reads and validates an exported array from disk.
pub fn read_import(path: &Path) -> anyhow::Result<Vec<ImportedRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read import: {}", path.display()))?;
    let records = validate::validate_str(&contents)
        .with_context(|| format!("validate import: {}", path.display()))?;
    Ok(records)
}

pub fn run_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let records = read_import(Path::new(&args.input))?;

    let mut stdout = std::io::stdout().lock();
    if args.print {
        let mut output = OutputSequence::new();
        output.append_batch(&records)?;
        writeln!(stdout, "{}", output.render()?).context("write rendered output")?;
    } else {
        writeln!(stdout, "{} records accepted", records.len()).context("write summary")?;
    }
    stdout.flush().context("flush stdout")?;
    Ok(())
}
