use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use clap::Parser as ClapParser;
use log::{error, info, warn};

use lotlogic::io::export::export_plan;
use lotlogic::io::svg::plan_to_svg;
use lotlogic::planning::SitePlanner;
use lotlogic_cli::config::CliConfig;
use lotlogic_cli::io::cli::Cli;
use lotlogic_cli::io::output::PlanOutput;
use lotlogic_cli::{PlannedSite, io, plan_all};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CliConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed config: {config:?}");

    let ext_sites = io::read_sites(&args.input_file)?;
    let n_sites = ext_sites.len();

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    let planner = SitePlanner::new(config.planner);
    let mut n_failed = 0;
    for result in plan_all(ext_sites, &planner) {
        match result {
            Ok(planned) => write_outputs(&planned, &config, &args.output_folder, !args.no_svg)?,
            Err(e) => {
                error!("[MAIN] {e:#}");
                n_failed += 1;
            }
        }
    }

    info!("[MAIN] planned {} of {n_sites} site(s)", n_sites - n_failed);
    ensure!(n_failed == 0, "{n_failed} of {n_sites} site(s) could not be planned");
    Ok(())
}

fn write_outputs(
    planned: &PlannedSite,
    config: &CliConfig,
    output_folder: &Path,
    draw_svg: bool,
) -> Result<()> {
    let PlannedSite { ext_site, plan } = planned;
    let file_stem = format!("plan_{}", ext_site.id.replace(['/', '\\'], "_"));

    {
        let output = PlanOutput {
            site: ext_site.clone(),
            plan: export_plan(&ext_site.id, plan),
            config: config.planner,
        };
        let json_path = output_folder.join(format!("{file_stem}.json"));
        io::write_json(&output, &json_path)?;
    }

    if draw_svg {
        let title = match &plan.house {
            Some(house) => format!("{}, {}", ext_site.id, house.title),
            None => ext_site.id.clone(),
        };
        let svg = plan_to_svg(plan, config.svg_draw_options, &title);
        let svg_path = output_folder.join(format!("{file_stem}.svg"));
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
