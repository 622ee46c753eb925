#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    planes::cli::run().await;
}
