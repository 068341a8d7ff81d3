use banklink_page::infrastructure::config::settings::Config;
use banklink_page::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Config::load().expect("Failed to load configuration");
	run(config).await
}
