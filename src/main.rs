use accountd::node;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    node::run_cli().await
}
