use clap::{Parser, Subcommand};
use notify::{RecursiveMode, Watcher};
use resolutio::example::SAHEL_RESOLUTION;
use resolutio::layout::{Block, BlockKind, StyledSegment, classify, tokenize};
use resolutio::types::ResolutionMetadata;
use resolutio::{
    Debouncer, PipelineBuilder, PipelineConfig, PipelineError, ResolutionPipeline,
    parse_resolution,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Renders markdown resolutions into UN committee style PDFs.
#[derive(Parser)]
#[command(name = "resolutio")]
#[command(version)]
#[command(about = "Render markdown resolutions into UN style PDF documents", long_about = None)]
struct Cli {
    /// JSON config file (asset_dir, icon_path, output_dir, debounce_ms)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a resolution to PDF
    Render {
        input: PathBuf,

        /// Output file; defaults to the export name inside output_dir
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Year printed in the document symbol
        #[arg(long)]
        year: Option<i32>,
    },

    /// Re-render whenever the input changes
    Watch {
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the sample resolution
    Example {
        #[arg(short, long, default_value = "sahel.md")]
        output: PathBuf,

        /// Also render it to PDF next to the markdown file
        #[arg(long)]
        render: bool,
    },

    /// Print the classified blocks and inline segments as JSON
    Inspect { input: PathBuf },
}

#[derive(Serialize)]
struct InspectedBlock {
    #[serde(flatten)]
    block: Block,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    segments: Vec<StyledSegment>,
}

#[derive(Serialize)]
struct InspectReport {
    metadata: ResolutionMetadata,
    blocks: Vec<InspectedBlock>,
}

#[tokio::main]
async fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("resolutio=info"))
        .init();

    let cli = Cli::parse();
    let builder = match &cli.config {
        Some(path) => PipelineBuilder::new().with_config_file(path)?,
        None => PipelineBuilder::new(),
    };
    let config = builder.config().clone();

    match cli.command {
        Commands::Render { input, output, year } => {
            let builder = match year {
                Some(year) => builder.with_year(year),
                None => builder,
            };
            let pipeline = builder.build()?;
            let path = render_file(&pipeline, &config, &input, output.as_deref()).await?;
            println!("{}", path.display());
        }
        Commands::Watch { input, output } => {
            let pipeline = Arc::new(builder.build()?);
            watch(pipeline, config, input, output).await?;
        }
        Commands::Example { output, render } => {
            fs::write(&output, SAHEL_RESOLUTION)?;
            println!("{}", output.display());
            if render {
                let pipeline = builder.build()?;
                let document = pipeline.render(SAHEL_RESOLUTION).await?;
                let dir = output.parent().unwrap_or_else(|| Path::new(""));
                let path = document.write_into(dir)?;
                println!("{}", path.display());
            }
        }
        Commands::Inspect { input } => {
            let source = fs::read_to_string(&input)?;
            let resolution = parse_resolution(&source)?;
            let blocks = classify(&resolution.content)
                .into_iter()
                .map(|block| {
                    let segments = match block.kind {
                        BlockKind::Operative | BlockKind::Paragraph => tokenize(&block.content),
                        _ => Vec::new(),
                    };
                    InspectedBlock { block, segments }
                })
                .collect();
            let report = InspectReport {
                metadata: resolution.metadata,
                blocks,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

async fn render_file(
    pipeline: &ResolutionPipeline,
    config: &PipelineConfig,
    input: &Path,
    output: Option<&Path>,
) -> Result<PathBuf, PipelineError> {
    let source = fs::read_to_string(input)?;
    let document = pipeline.render(&source).await?;
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => config.output_path(&document.export_file_name()),
    };
    document.write_to(&path)?;
    Ok(path)
}

async fn watch(
    pipeline: Arc<ResolutionPipeline>,
    config: PipelineConfig,
    input: PathBuf,
    output: Option<PathBuf>,
) -> Result<(), PipelineError> {
    let config = Arc::new(config);
    let input = Arc::new(input);
    let output = Arc::new(output);

    let render = {
        let (pipeline, config, input, output) =
            (pipeline.clone(), config.clone(), input.clone(), output.clone());
        move || {
            let (pipeline, config, input, output) =
                (pipeline.clone(), config.clone(), input.clone(), output.clone());
            async move {
                match render_file(&pipeline, &config, &input, output.as_deref()).await {
                    Ok(path) => log::info!("Preview updated: {}", path.display()),
                    Err(e) => log::error!("Render of {} failed: {}", input.display(), e),
                }
            }
        }
    };

    let debouncer = Debouncer::spawn(config.debounce(), render);
    debouncer.trigger();

    // Editors often replace the file instead of writing in place, so watch
    // the directory and filter by name.
    let file_name = input.file_name().map(|name| name.to_os_string());
    let dir = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let (tx, mut rx) = mpsc::unbounded_channel::<()>();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| match res {
        Ok(event) => {
            let touches_input = event
                .paths
                .iter()
                .any(|path| path.file_name().map(|n| n.to_os_string()) == file_name);
            if touches_input && (event.kind.is_modify() || event.kind.is_create()) {
                let _ = tx.send(());
            }
        }
        Err(e) => log::warn!("Watch error: {}", e),
    })?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    log::info!("Watching {} (Ctrl+C to stop)", input.display());

    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Some(()) => {
                    debouncer.trigger();
                }
                None => break,
            },
            signal = tokio::signal::ctrl_c() => {
                signal?;
                break;
            }
        }
    }

    drop(watcher);
    debouncer.close().await;
    Ok(())
}
