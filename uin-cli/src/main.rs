use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "uin", version, about = "Convert UIN scenes to SVG, depth maps, and prompts")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a UIN scene to SVG.
    Render(RenderArgs),
    /// Generate a depth-map PNG for ControlNet conditioning.
    Depth(DepthArgs),
    /// Compose a text-to-image prompt.
    Prompt(PromptArgs),
    /// Validate a UIN document and report the first violation.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input UIN JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Skip structural validation.
    #[arg(long, default_value_t = false)]
    no_validate: bool,
}

#[derive(Parser, Debug)]
struct DepthArgs {
    /// Input UIN JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Skip structural validation.
    #[arg(long, default_value_t = false)]
    no_validate: bool,
}

#[derive(Parser, Debug)]
struct PromptArgs {
    /// Input UIN JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Style phrase appended to the prompt.
    #[arg(long)]
    style: Option<String>,

    /// Emit the structured prompt (positive, negative, metadata) as JSON.
    #[arg(long, default_value_t = false)]
    structured: bool,

    /// Exclude the default quality phrases.
    #[arg(long, default_value_t = false)]
    no_quality: bool,

    /// Skip structural validation.
    #[arg(long, default_value_t = false)]
    no_validate: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input UIN JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Depth(args) => cmd_depth(args),
        Command::Prompt(args) => cmd_prompt(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn read_document(path: &PathBuf) -> anyhow::Result<serde_json::Value> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read input '{}'", path.display()))?;
    uin::parse_document(&json).with_context(|| format!("parse '{}'", path.display()))
}

fn ensure_parent_dir(path: &PathBuf) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let opts = uin::ConvertOptions {
        validate: !args.no_validate,
        ..uin::ConvertOptions::default()
    };
    let svg = uin::to_svg(&doc, &opts)?;

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_depth(args: DepthArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let opts = uin::ConvertOptions {
        validate: !args.no_validate,
        ..uin::ConvertOptions::default()
    };
    let depth = uin::to_depth_map(&doc, &opts)?;
    let png = depth.encode_png()?;

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_prompt(args: PromptArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let opts = uin::ConvertOptions {
        validate: !args.no_validate,
        style: args.style,
        quality_tags: !args.no_quality,
    };

    if args.structured {
        let structured = uin::to_structured_prompt(&doc, &opts)?;
        println!("{}", serde_json::to_string_pretty(&structured)?);
    } else {
        println!("{}", uin::to_prompt(&doc, &opts)?);
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    uin::validate_document(&doc)
        .with_context(|| format!("'{}' is not a valid UIN document", args.in_path.display()))?;
    eprintln!("{} is valid", args.in_path.display());
    Ok(())
}
