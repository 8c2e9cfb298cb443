#[tokio::main]
async fn main() {
    vetcal::start_server().await;
}
