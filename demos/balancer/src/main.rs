use std::process::exit;

use clap::Parser;
use log::{error, info};

use vm_balancer::core::balancer::Balancer;
use vm_balancer::core::config::BalancerConfig;
use vm_balancer::core::vm_placement_algorithm::placement_algorithm_resolver;
use vm_balancer::BalancerError;

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    /// Path to YAML config with servers and VMs
    #[clap(long, default_value = "config.yaml")]
    config: String,

    /// Placement algorithm overriding the one from config [LeastLoaded, FirstFit, MostLoaded]
    #[clap(long)]
    algorithm: Option<String>,

    /// Save placement report to CSV file
    #[clap(long)]
    report: Option<String>,
}

fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn run(args: &Args) -> Result<(), BalancerError> {
    let config = BalancerConfig::from_file(&args.config)?;
    let algorithm = match &args.algorithm {
        Some(name) => placement_algorithm_resolver(name)?,
        None => config.placement_algorithm()?,
    };
    let mut servers = config.build_servers()?;
    let vms = config.build_vms()?;

    let report = Balancer::new(algorithm).balance(&mut servers, &vms);

    for server in &servers {
        println!("{}", server);
    }
    let unplaced = report.unplaced();
    if !unplaced.is_empty() {
        println!("unplaced vms: {:?}", unplaced);
    }

    if let Some(path) = &args.report {
        report.save_csv(path)?;
        info!("report saved to {}", path);
    }
    Ok(())
}

fn main() {
    init_logger();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{}", e);
        exit(1);
    }
}
