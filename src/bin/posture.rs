use clap::Parser;
use glob::glob;
use indicatif::ParallelProgressIterator;
use posture_geometry::AnalyzerConfig;
use posture_geometry::analysis::PostureAnalyzer;
use posture_geometry::io::{SubjectOutcome, load_any, object_from_json, write_report};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(version, about, author)]
struct PostureCli {
    /// landmark json file, or a folder of them
    path: String,

    /// analyzer config json
    #[arg(short, long)]
    config: Option<String>,

    /// write a json report here
    #[arg(short, long)]
    output: Option<String>,

    /// multiply lengths before display, 100 turns meters into centimeters
    #[arg(long, default_value_t = 100.0)]
    scale: f64,
}

fn collect_inputs(path: &str) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    if Path::new(path).is_dir() {
        let mut paths: Vec<PathBuf> = glob(format!("{}/**/*.json", path).as_str())?
            .filter_map(|p| p.ok())
            .collect();
        paths.sort();
        Ok(paths)
    } else {
        Ok(vec![PathBuf::from(path)])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = PostureCli::parse();
    let config: AnalyzerConfig = match &cli.config {
        Some(p) => object_from_json(p)?,
        None => AnalyzerConfig::default(),
    };
    let analyzer = PostureAnalyzer::new(config);

    let inputs = collect_inputs(&cli.path)?;
    log::info!("analyzing {} file(s)", inputs.len());
    let now = Instant::now();
    let outcomes: Vec<SubjectOutcome> = inputs
        .par_iter()
        .progress_count(inputs.len() as u64)
        .flat_map_iter(|path| {
            let source = path.to_string_lossy().to_string();
            match load_any(path) {
                Ok(sets) => sets
                    .iter()
                    .enumerate()
                    .map(|(i, set)| {
                        let outcome = analyzer.analyze(set).map(|r| r.scaled(cli.scale));
                        (source.clone(), i, outcome)
                    })
                    .collect::<Vec<_>>(),
                Err(e) => vec![(source, 0, Err(e))],
            }
        })
        .collect();
    log::debug!("analysis took {:.6} sec", now.elapsed().as_secs_f64());

    for (source, subject, outcome) in &outcomes {
        match outcome {
            Ok(r) => {
                println!("{} [{}]:", source, subject);
                println!("    parallelism angle:        {:.2} deg", r.parallelism_angle_deg);
                println!(
                    "    verticality deviation:    {:.2} deg",
                    r.spine_verticality_deviation_deg
                );
                println!(
                    "    left shoulder correction: ({:.2}, {:.2}, {:.2})",
                    r.total_correction_left.x, r.total_correction_left.y, r.total_correction_left.z
                );
                println!(
                    "    right shoulder correction: ({:.2}, {:.2}, {:.2})",
                    r.total_correction_right.x,
                    r.total_correction_right.y,
                    r.total_correction_right.z
                );
            }
            Err(e) => log::warn!("{} [{}]: {}", source, subject, e),
        }
    }

    if let Some(output) = &cli.output {
        write_report(output, &outcomes, cli.scale)?;
        log::info!("report written to {}", output);
    }
    Ok(())
}
