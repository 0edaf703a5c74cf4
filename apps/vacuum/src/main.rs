use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = vacuum::Args::parse();
	vacuum::run(args).await
}
