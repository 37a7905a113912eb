use anyhow::Context;
use candidate_gen::core::reader::verify_output;
use candidate_gen::utils::{logger, validation::Validate};
use candidate_gen::{CandidateConfig, CandidateEngine, CliArgs, LocalStorage, SeedPipeline};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    if let Err(e) = run(args).await {
        tracing::error!("Candidate generation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let mut config = CandidateConfig::from_env().context("reading environment")?;
    args.apply_to(&mut config);
    config.validate().context("invalid configuration")?;

    tracing::info!("Starting candidate-gen");
    tracing::debug!("Config: {:?}", config);

    let output_path = config.output_path.clone();
    let pipeline = SeedPipeline::new(LocalStorage::default(), config);
    let engine = CandidateEngine::new(pipeline);

    let summary = if args.dry_run {
        engine.preview().await?
    } else {
        engine
            .run()
            .await
            .with_context(|| format!("writing {}", output_path))?
    };

    if args.verify && !args.dry_run {
        verify_output(&LocalStorage::default(), &output_path, summary.total).await?;
    }

    if args.summary_json {
        println!("{}", summary.to_json()?);
    }

    Ok(())
}
