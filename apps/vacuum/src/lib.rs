use clap::{
	Parser, Subcommand,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use color_eyre::eyre;
use tracing_subscriber::EnvFilter;

use vacuum_client::ProductAdvertising;
use vacuum_request::{LookupRequest, Parameters, SearchQuery};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(
	version = VERSION,
	rename_all = "kebab",
	styles = styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: std::path::PathBuf,
	/// Print the built parameters instead of sending the request.
	#[arg(long, global = true)]
	pub dry_run: bool,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Look up 1 to 20 items by id.
	Lookup {
		#[arg(required = true, value_name = "ID")]
		item_ids: Vec<String>,
		#[arg(long = "param", short = 'p', value_name = "KEY=VALUE", value_parser = parse_param)]
		params: Vec<(String, String)>,
		/// Replace the API version for this request.
		#[arg(long, value_name = "VERSION")]
		api_version: Option<String>,
	},
	/// Search an index by keywords or by attribute parameters.
	Search {
		#[arg(value_name = "INDEX")]
		index: String,
		#[arg(long, short = 'k', conflicts_with = "params", required_unless_present = "params")]
		keywords: Option<String>,
		#[arg(long = "param", short = 'p', value_name = "KEY=VALUE", value_parser = parse_param)]
		params: Vec<(String, String)>,
	},
}

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Red.on_default() | Effects::BOLD)
		.usage(AnsiColor::Red.on_default() | Effects::BOLD)
		.literal(AnsiColor::Blue.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
}

pub fn parse_param(raw: &str) -> Result<(String, String), String> {
	let Some((key, value)) = raw.split_once('=') else {
		return Err(format!("Expected KEY=VALUE, got {raw:?}."));
	};

	if key.trim().is_empty() {
		return Err(format!("Parameter key must be non-empty in {raw:?}."));
	}

	Ok((key.trim().to_string(), value.to_string()))
}

pub fn lookup_request(
	item_ids: Vec<String>,
	params: Vec<(String, String)>,
	api_version: Option<String>,
) -> LookupRequest {
	let mut request = LookupRequest::new(item_ids).parameters(params.into_iter().collect());

	request.version_override = api_version;

	request
}

pub fn search_query(keywords: Option<String>, params: Vec<(String, String)>) -> SearchQuery {
	match keywords {
		Some(keywords) => SearchQuery::Keywords(keywords),
		None => SearchQuery::Parameters(params.into_iter().collect::<Parameters>()),
	}
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = vacuum_config::load(&args.config)?;
	let filter = EnvFilter::new(config.service.log_level.clone());

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	let client = ProductAdvertising::from_config(&config)?;
	let response = match args.command {
		Command::Lookup { item_ids, params, api_version } => {
			let request = lookup_request(item_ids, params, api_version);

			if args.dry_run {
				print!("{}", client.build_lookup(&request)?);

				return Ok(());
			}

			client.look_up(&request).await?
		},
		Command::Search { index, keywords, params } => {
			let query = search_query(keywords, params);

			if args.dry_run {
				print!("{}", client.build_search(&index, &query));

				return Ok(());
			}

			client.search(&index, &query).await?
		},
	};

	tracing::info!(status = response.status(), "Request completed.");
	println!("{}", response.body());

	if !response.is_success() {
		return Err(eyre::eyre!("API responded with status {}.", response.status()));
	}

	Ok(())
}
