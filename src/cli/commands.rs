use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

use crate::models::{Fragment, SequentialIds, Thread, UuidIds};
use crate::scoring::{analyze_thread, PostScorer, ThreadAnalysis};
use crate::segmentation::{RandomCta, SegmentationConfig, Segmenter};
use crate::settings::{ComposerSettings, SettingsStore};

use super::{render, Cli, Commands};

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

const THREAD_SEPARATOR: &str = "---";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SplitReport {
    fragments: Vec<Fragment>,
    analysis: ThreadAnalysis,
}

pub(super) fn dispatch(cli: Cli) -> Result<()> {
    let store = SettingsStore::new(cli.config.clone())?;

    match cli.command {
        Commands::Split {
            input,
            max_parts,
            no_hook,
            no_cta,
            seed,
            save,
            format,
        } => {
            let settings = store.settings();
            let requested = SegmentationConfig {
                max_parts: max_parts.unwrap_or(settings.segmentation.max_parts),
                add_hook: settings.segmentation.add_hook && !no_hook,
                add_cta: settings.segmentation.add_cta && !no_cta,
            };
            let config = requested.clamped();
            if config.max_parts != requested.max_parts {
                log_warn!(
                    "max parts {} is outside 3-10, using {}",
                    requested.max_parts,
                    config.max_parts
                );
            }

            if save {
                store.update_segmentation(config)?;
                log_info!("Saved split options to {}", store.path().display());
            }

            let text = read_input(input.as_deref())?;
            let output = split(&text, &config, seed, &settings, &format)?;
            println!("{}", output);
        }

        Commands::Thread {
            input,
            json,
            format,
        } => {
            let text = read_input(input.as_deref())?;
            let bodies = if json {
                serde_json::from_str::<Vec<String>>(&text)
                    .context("Thread input is not a JSON array of strings")?
            } else {
                parse_thread_bodies(&text)
            };

            let thread = Thread::from_bodies(bodies, &mut SequentialIds::default());
            let settings = store.settings();
            let analysis = analyze_thread(
                thread.fragments(),
                &settings.limits,
                &settings.scoring.thread,
            );

            let output = match format.as_str() {
                "json" => serde_json::to_string_pretty(&analysis)?,
                _ => render::thread_report(thread.fragments(), &analysis, &settings.limits),
            };
            println!("{}", output);
        }

        Commands::Post {
            input,
            media,
            format,
        } => {
            let text = read_input(input.as_deref())?;
            let settings = store.settings();
            let scorer = PostScorer::new(settings.limits, settings.scoring.post);
            let breakdown = scorer.analyze(text.trim(), &media);

            let output = match format.as_str() {
                "json" => serde_json::to_string_pretty(&breakdown)?,
                _ => render::post_report(&breakdown),
            };
            println!("{}", output);
        }

        Commands::Init { force } => {
            if store.path().exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    store.path().display()
                );
            }
            store.reset()?;
            println!("Wrote default settings to {}", store.path().display());
        }
    }

    Ok(())
}

fn split(
    text: &str,
    config: &SegmentationConfig,
    seed: Option<u64>,
    settings: &ComposerSettings,
    format: &str,
) -> Result<String> {
    let cta = match seed {
        Some(seed) => RandomCta::seeded(seed),
        None => RandomCta::new(),
    };
    let mut segmenter = Segmenter::with_strategies(settings.limits, UuidIds, cta);
    let fragments = segmenter.segment(text, config);

    let output = match format {
        "export" => Thread::from_fragments(fragments).export(),
        "json" => {
            let analysis =
                analyze_thread(&fragments, &settings.limits, &settings.scoring.thread);
            serde_json::to_string_pretty(&SplitReport {
                fragments,
                analysis,
            })?
        }
        _ => {
            let analysis =
                analyze_thread(&fragments, &settings.limits, &settings.scoring.thread);
            render::thread_report(&fragments, &analysis, &settings.limits)
        }
    };

    Ok(output)
}

/// Read a file, or stdin when no path (or `-`) is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Split hand-written thread text on lines consisting only of `---`.
fn parse_thread_bodies(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut bodies = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim() == THREAD_SEPARATOR {
            bodies.push(current.join("\n").trim().to_string());
            current.clear();
        } else {
            current.push(line);
        }
    }
    bodies.push(current.join("\n").trim().to_string());

    bodies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_bodies_split_on_separator_lines() {
        let text = "First post.\nStill first.\n---\nSecond post.\n  ---  \nThird.\n";
        assert_eq!(
            parse_thread_bodies(text),
            vec!["First post.\nStill first.", "Second post.", "Third."]
        );
    }

    #[test]
    fn dashes_inside_a_line_are_content() {
        assert_eq!(parse_thread_bodies("a --- b"), vec!["a --- b"]);
    }

    #[test]
    fn blank_thread_input_has_no_bodies() {
        assert!(parse_thread_bodies(" \n\n").is_empty());
    }

    #[test]
    fn split_export_is_numbered() {
        let text = "Sentence number one is here and it keeps going for a while. ".repeat(12);
        let config = SegmentationConfig {
            max_parts: 5,
            add_hook: false,
            add_cta: false,
        };
        let output = split(&text, &config, Some(1), &ComposerSettings::default(), "export").unwrap();

        assert!(output.starts_with("1/3\nSentence number one"));
        assert_eq!(output.matches("\n\n---\n\n").count(), 2);
    }

    #[test]
    fn split_json_contains_fragments_and_analysis() {
        let config = SegmentationConfig::default();
        let output = split("Short one.", &config, Some(1), &ComposerSettings::default(), "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["fragments"][0]["content"], "Thread: Short one.");
        assert_eq!(value["analysis"]["hookStrength"], 65);
        assert_eq!(value["analysis"]["partScores"].as_array().unwrap().len(), 1);
    }
}
