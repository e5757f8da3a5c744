//! Keyword generation command: `keysmith generate`.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use keysmith::config::KeysmithConfig;
use keysmith::export::{self, ExportFormat, KeywordExport};
use keysmith::generator::{
    GeneratedBatch, GenerationRequest, KeywordGenerator, LocalGenerator, RemoteGenerator, Strategy,
};
use keysmith::ui::GenerationUI;
use keysmith::ui::review::{ReviewAction, display_keywords, prompt_review};
use keysmith::vocabulary::Vocabularies;

use super::super::GenerateArgs;

/// Build the generator selected by configuration.
fn build_generator(
    strategy: Strategy,
    config: &KeysmithConfig,
    args: &GenerateArgs,
) -> Box<dyn KeywordGenerator> {
    match strategy {
        Strategy::Local => {
            let vocabularies = Arc::new(Vocabularies::builtin());
            let settings = config.generator_settings();
            match args.seed {
                Some(seed) => Box::new(LocalGenerator::with_seed(vocabularies, settings, seed)),
                None => Box::new(LocalGenerator::new(vocabularies, settings)),
            }
        }
        Strategy::Remote => {
            if args.seed.is_some() {
                warn!("--seed has no effect on the remote strategy");
            }
            let remote = config.remote();
            let country = args.country.clone().or_else(|| remote.country.clone());
            Box::new(RemoteGenerator::new(remote.to_completion()).with_country(country))
        }
    }
}

pub fn cmd_generate(
    project_dir: &Path,
    config_path: Option<&Path>,
    args: &GenerateArgs,
    verbose: bool,
) -> Result<()> {
    let config = KeysmithConfig::load(project_dir, config_path)?;
    for warning in config.toml.validate() {
        warn!("{}", warning);
    }

    let defaults = config.defaults();
    let request = GenerationRequest::new(
        args.base.clone(),
        args.language.clone().unwrap_or_else(|| defaults.language.clone()),
        args.count.unwrap_or(defaults.count),
        args.max_words.unwrap_or(defaults.max_words),
        args.complexity.unwrap_or(defaults.complexity),
    );

    // Fail fast, before any spinner or child process.
    let valid = request.validate()?;

    let strategy = args.strategy.unwrap_or(defaults.strategy);
    let format = args
        .format
        .or_else(|| args.output.as_deref().and_then(ExportFormat::from_path))
        .unwrap_or(defaults.format);
    info!(%strategy, %format, "Generating keywords");

    let mut generator = build_generator(strategy, &config, args);

    let batch = loop {
        let ui = GenerationUI::new(verbose);
        ui.start(generator.name(), &valid.base_phrase);
        let batch: GeneratedBatch = match generator.generate_batch(&request) {
            Ok(batch) => batch,
            Err(e) => {
                ui.finish_error(&e.to_string());
                return Err(e.into());
            }
        };
        ui.finish_success(batch.keywords.len(), valid.desired_count);
        if strategy == Strategy::Local && batch.keywords.len() < valid.desired_count {
            ui.hint("Raise --complexity or --max-words to widen the vocabulary");
        }
        ui.detail(&format!(
            "{} · {} · max {} words",
            valid.language, valid.complexity, valid.max_words_per_keyword
        ));

        if !args.interactive {
            break batch;
        }

        display_keywords(&batch.keywords);
        match prompt_review()? {
            ReviewAction::Accept => break batch,
            ReviewAction::Regenerate => {
                debug!("Regenerating batch");
                continue;
            }
            ReviewAction::Quit => {
                eprintln!("Exiting without saving.");
                return Ok(());
            }
        }
    };

    let language = valid.language.code();
    let document = KeywordExport::new(
        &valid.base_phrase,
        language,
        valid.complexity,
        strategy,
        &batch.keywords,
    )
    .with_ideas(&batch.ideas);
    let content = export::render(format, &document)?;

    match &args.output {
        Some(path) => {
            export::write_export(path, &content)?;
            info!(path = %path.display(), "Wrote export");
            GenerationUI::new(verbose).exported(path, batch.keywords.len());
        }
        None => print!("{}", content),
    }

    Ok(())
}
