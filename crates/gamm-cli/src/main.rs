#[tokio::main]
async fn main() {
    gamm_cli::start(std::env::args()).await;
}
