use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use livestock_ai_rust::classifier::{classify_batch, BatchImage, ProxyClient};
use livestock_ai_rust::history::SessionHistory;
use livestock_ai_rust::{cli, config, encoder, error, export, scanner};

use cli::{Cli, Commands};
use config::Config;
use error::{LivestockAiError, Result};
use livestock_ai_common::validator;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { paths, output, proxy_url } => {
            run_classify(paths, output, proxy_url, cli.verbose).await?;
        }

        Commands::Export { input, id, output, yes } => {
            run_export(input, id, output, yes)?;
        }

        Commands::Config { set_proxy_url } => {
            let mut config = Config::load()?;
            if let Some(url) = set_proxy_url {
                config.set_proxy_url(url)?;
                println!("✔ Proxy URL saved");
            } else {
                println!("proxy_url: {}", config.proxy_url);
                println!("config file: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

async fn run_classify(
    paths: Vec<PathBuf>,
    output: Option<PathBuf>,
    proxy_url: Option<String>,
    verbose: bool,
) -> Result<()> {
    let config = Config::load()?;
    println!("🐂 livestock-ai - image classification\n");

    // 1. Collect and validate
    println!("[1/3] Collecting images...");
    let entries = scanner::collect(&paths)?;
    if entries.is_empty() {
        return Err(LivestockAiError::NoImagesFound(
            paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        ));
    }

    let candidates = entries.iter().map(|e| e.candidate.clone()).collect();
    let (accepted, rejections) = validator::validate(candidates);

    for rejection in &rejections {
        println!("  ✗ {} {}", rejection.file_name, rejection.reason);
    }
    println!("✔ {} image(s) accepted, {} rejected\n", accepted.len(), rejections.len());

    if accepted.is_empty() {
        println!("No valid images to classify.");
        return Ok(());
    }

    // 2. Encode previews (concurrent reads, reassembled by index)
    println!("[2/3] Encoding images...");
    // The accepted list is an order-preserving subsequence of the
    // collected entries; walk both to recover each candidate's path.
    let mut accepted_paths: Vec<PathBuf> = Vec::with_capacity(accepted.len());
    let mut remaining = accepted.iter();
    let mut next = remaining.next();
    for entry in &entries {
        if let Some(candidate) = next {
            if entry.candidate.name == candidate.name && entry.candidate.size == candidate.size {
                accepted_paths.push(entry.path.clone());
                next = remaining.next();
            }
        }
    }

    let mut previews: Vec<Option<String>> = vec![None; accepted_paths.len()];
    let mut images = Vec::new();
    let mut failures: Vec<(String, String)> = Vec::new();

    for (index, result) in encoder::encode_batch(&accepted_paths).await {
        match result {
            Ok(data_url) if index < previews.len() => previews[index] = Some(data_url),
            Ok(_) => {}
            Err(e) => failures.push((
                accepted
                    .get(index)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| "<unknown>".to_string()),
                e.to_string(),
            )),
        }
    }

    for (index, preview) in previews.into_iter().enumerate() {
        if let Some(data_url) = preview {
            images.push(BatchImage {
                file_name: accepted[index].name.clone(),
                data_url,
            });
        }
    }
    println!("✔ {} image(s) encoded\n", images.len());

    // 3. Classify sequentially against the proxy
    println!("[3/3] Classifying...");
    let client = ProxyClient::new(config.resolve_proxy_url(proxy_url.as_deref()));
    let mut history = SessionHistory::new();

    let total = images.len();
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let batch_failures = classify_batch(
        images,
        |data_url| {
            let client = client.clone();
            async move { client.classify(&data_url).await }
        },
        &mut history,
        |current, _| {
            bar.set_position(current as u64);
        },
    )
    .await;
    bar.finish_and_clear();

    for failure in &batch_failures {
        failures.push((failure.file_name.clone(), failure.message.clone()));
    }

    // Newest first, like the history tab
    for record in history.records() {
        println!(
            "  {} → {} ({:.0}% confidence)",
            record.id,
            record.prediction,
            record.confidence * 100.0
        );
        if verbose {
            for feature in &record.features.cattle {
                println!("      cattle:  {feature}");
            }
            for feature in &record.features.buffalo {
                println!("      buffalo: {feature}");
            }
        }
    }
    for (name, message) in &failures {
        println!("  ✗ {name}: {message}");
    }

    println!(
        "\n✅ Successfully classified {} of {} image(s)",
        history.len(),
        total
    );

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(history.records())?;
        std::fs::write(&path, json)?;
        println!("✔ Records saved: {}", path.display());
    }

    Ok(())
}

fn run_export(
    input: PathBuf,
    id: Option<String>,
    output: Option<PathBuf>,
    yes: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(&input)?;
    let records: Vec<livestock_ai_common::ClassificationRecord> =
        serde_json::from_str(&content)?;

    let record = match id {
        Some(id) => records
            .iter()
            .find(|r| r.id == id)
            .ok_or(LivestockAiError::RecordNotFound(id))?,
        None => records
            .first()
            .ok_or_else(|| LivestockAiError::RecordNotFound("<empty records file>".into()))?,
    };

    let path = output.unwrap_or_else(|| PathBuf::from(export::report_file_name(&record.id)));

    if path.exists() && !yes {
        let overwrite = dialoguer::Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", path.display()))
            .default(false)
            .interact()
            .unwrap_or(false);
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    export::write_report(record, &path)?;
    println!("✔ Report written: {}", path.display());
    Ok(())
}
