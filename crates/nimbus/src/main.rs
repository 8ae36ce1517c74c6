mod commands;
mod registry;

use clap::{Parser, Subcommand};
use colored::Colorize;
use nimbus_cloud::Tag;
use nimbus_config::ProviderSettings;

#[derive(Parser)]
#[command(name = "nimbus")]
#[command(about = "Query and drive cloud resources through one provider interface", long_about = None)]
struct Cli {
    /// Vendor to talk to (alibaba, aliyun, AlibabaCloud)
    #[arg(long, global = true)]
    vendor: Option<String>,

    /// Region the session is bound to
    #[arg(short, long, global = true)]
    region: Option<String>,

    /// Base URL of the signing gateway
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Gateway request timeout in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List regions
    Regions,
    /// List zones of the region
    Zones,
    /// Describe instances by ID, tag or cluster
    Instances {
        /// Instance ID (repeatable)
        #[arg(long = "id", conflicts_with_all = ["tags", "cluster"])]
        ids: Vec<String>,
        /// Tag filter as key=value (repeatable)
        #[arg(long = "tag", conflicts_with = "cluster")]
        tags: Vec<Tag>,
        /// Cluster name, shorthand for --tag ClusterName=<name>
        #[arg(short, long)]
        cluster: Option<String>,
    },
    /// Instance types offered in a zone
    InstanceTypes {
        /// Zone ID
        zone: String,
    },
    /// List VPCs of the region
    Vpcs,
    /// List switches of a VPC
    Switches {
        /// VPC ID
        vpc: String,
    },
    /// List security groups of the region
    Groups {
        /// Only groups of this VPC
        #[arg(long)]
        vpc: Option<String>,
    },
    /// List rules of a security group
    Rules {
        /// Security group ID
        group: String,
    },
    /// List images of the region
    Images,
    /// List sub-orders of orders created in a time window
    Orders {
        /// Window start (RFC 3339 or YYYY-MM-DD), defaults to 30 days ago
        #[arg(long)]
        from: Option<String>,
        /// Window end (RFC 3339 or YYYY-MM-DD), defaults to now
        #[arg(long)]
        to: Option<String>,
        /// Page of main orders
        #[arg(long, default_value = "1")]
        page: i32,
        #[arg(long, default_value = "20")]
        page_size: i32,
    },
    /// Start an instance
    Start {
        /// Instance ID
        id: String,
    },
    /// Stop an instance
    Stop {
        /// Instance ID
        id: String,
    },
    /// Force-delete instances
    Delete {
        /// Instance IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Show version
    Version,
}

impl Cli {
    /// Config file and environment, overridden by command-line flags
    fn settings(&self) -> anyhow::Result<ProviderSettings> {
        let mut settings = nimbus_config::load_config()?.provider;

        if let Some(vendor) = &self.vendor {
            settings.vendor = vendor.clone();
        }
        if let Some(region) = &self.region {
            settings.region = region.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }

        Ok(settings)
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if matches!(cli.command, Commands::Version) {
        println!("nimbus {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let settings = cli.settings()?;
    let provider = registry::create_provider(&settings)?;
    let ctx = commands::Context::new(provider.as_ref(), &settings);

    match cli.command {
        Commands::Regions => commands::inventory::regions(&ctx).await,
        Commands::Zones => commands::inventory::zones(&ctx).await,
        Commands::InstanceTypes { zone } => commands::inventory::instance_types(&ctx, zone).await,
        Commands::Images => commands::inventory::images(&ctx).await,
        Commands::Instances { ids, tags, cluster } => {
            commands::compute::instances(&ctx, ids, tags, cluster).await
        }
        Commands::Start { id } => commands::compute::start(&ctx, &id).await,
        Commands::Stop { id } => commands::compute::stop(&ctx, &id).await,
        Commands::Delete { ids } => commands::compute::delete(&ctx, &ids).await,
        Commands::Vpcs => commands::network::vpcs(&ctx).await,
        Commands::Switches { vpc } => commands::network::switches(&ctx, vpc).await,
        Commands::Groups { vpc } => commands::network::groups(&ctx, vpc).await,
        Commands::Rules { group } => commands::network::rules(&ctx, group).await,
        Commands::Orders {
            from,
            to,
            page,
            page_size,
        } => commands::billing::orders(&ctx, from, to, page, page_size).await,
        Commands::Version => Ok(()),
    }
}
