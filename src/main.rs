use backend_pinger::app;

#[tokio::main]
async fn main() {
    // Ping failures are absorbed by the service; only a broken configuration
    // reaches this point. The exit status is success in every case.
    if let Err(err) = app::run().await {
        eprintln!("Error: {err:#}");
    }
}
