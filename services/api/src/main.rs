use van_mitra_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("van-mitra error: {err}");
        std::process::exit(1);
    }
}
